//! Engine abstraction over the search layer.
//!
//! Every move-choosing strategy (fixed-depth minimax, iterative alpha-beta,
//! random baseline) sits behind one trait so callers can swap them at
//! runtime. Engines report a move, or `None` when they forfeit, together
//! with human-readable `info` lines.

use crate::errors::SearchError;
use crate::game_state::game_position::GamePosition;
use crate::search::deadline::TimeLeft;

#[derive(Debug, Clone)]
pub struct EngineOutput<M> {
    pub best_move: Option<M>,
    pub info_lines: Vec<String>,
}

impl<M> Default for EngineOutput<M> {
    fn default() -> Self {
        Self {
            best_move: None,
            info_lines: Vec::new(),
        }
    }
}

pub trait Engine<P: GamePosition>: Send {
    fn name(&self) -> &str;

    /// Chooses a move for `position` while `time_left` keeps running. The
    /// engine's player must be the side to move. Only board contract
    /// violations surface as errors; running out of time is a forfeit
    /// (`best_move == None`).
    fn choose_move(
        &mut self,
        position: &P,
        time_left: &dyn TimeLeft,
    ) -> Result<EngineOutput<P::Move>, SearchError>;
}
