//! Pluggable position evaluation.
//!
//! Search stays independent of any particular heuristic by asking this trait
//! for frontier scores. Scores are extended reals: `WIN_SCORE` and
//! `LOSS_SCORE` are infinities, so they survive any further min/max.

use crate::game_state::game_position::GamePosition;

pub type Score = f64;

pub const WIN_SCORE: Score = f64::INFINITY;
pub const LOSS_SCORE: Score = f64::NEG_INFINITY;

#[inline]
pub fn is_decisive(score: Score) -> bool {
    score.is_infinite()
}

pub trait Evaluator<P: GamePosition>: Send + Sync {
    /// Score of `position` as seen by `perspective`; higher is better for
    /// them. Must be pure and must not return NaN.
    fn evaluate(&self, position: &P, perspective: P::Player) -> Score;
}

impl<P, F> Evaluator<P> for F
where
    P: GamePosition,
    F: Fn(&P, P::Player) -> Score + Send + Sync,
{
    #[inline]
    fn evaluate(&self, position: &P, perspective: P::Player) -> Score {
        self(position, perspective)
    }
}
