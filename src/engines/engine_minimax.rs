//! Fixed-depth minimax engine.
//!
//! Runs a single minimax pass at the configured depth. If the deadline fires
//! before the pass finishes the engine forfeits instead of guessing.

use std::time::Duration;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::SearchError;
use crate::game_state::game_position::GamePosition;
use crate::search::deadline::{Deadline, TimeLeft};
use crate::search::evaluation::Evaluator;
use crate::search::iterative_deepening::DEFAULT_MARGIN;
use crate::search::minimax::minimax_decision;
use crate::search::search_types::SearchContext;

pub const DEFAULT_MINIMAX_DEPTH: u8 = 3;

pub struct MinimaxEngine<P: GamePosition, E> {
    evaluator: E,
    owner: P::Player,
    depth: u8,
    margin: Duration,
}

impl<P, E> MinimaxEngine<P, E>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    pub fn new(evaluator: E, owner: P::Player, depth: u8, margin: Duration) -> Self {
        Self {
            evaluator,
            owner,
            depth,
            margin,
        }
    }

    pub fn with_defaults(evaluator: E, owner: P::Player) -> Self {
        Self::new(evaluator, owner, DEFAULT_MINIMAX_DEPTH, DEFAULT_MARGIN)
    }
}

impl<P, E> Engine<P> for MinimaxEngine<P, E>
where
    P: GamePosition,
    P::Player: Send,
    E: Evaluator<P>,
{
    fn name(&self) -> &str {
        "Fixed-Depth Minimax"
    }

    fn choose_move(
        &mut self,
        position: &P,
        time_left: &dyn TimeLeft,
    ) -> Result<EngineOutput<P::Move>, SearchError> {
        let mut ctx = SearchContext::new(
            &self.evaluator,
            self.owner,
            Deadline::new(time_left, self.margin),
        );

        let mut out = EngineOutput::default();
        match minimax_decision(&mut ctx, position, self.depth) {
            Ok(result) => {
                out.info_lines.push(format!(
                    "info depth {} score {} nodes {}",
                    self.depth,
                    result.score,
                    ctx.nodes()
                ));
                out.best_move = result.best_move;
            }
            Err(SearchError::Aborted) => {
                out.info_lines.push(format!(
                    "info string minimax_engine aborted depth {} nodes {}",
                    self.depth,
                    ctx.nodes()
                ));
            }
            Err(err) => return Err(err),
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::MinimaxEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_position::GamePosition;
    use crate::game_state::isolation::{Cell, IsolationBoard, Player};
    use crate::search::board_scoring::OpenMoveScorer;
    use crate::search::deadline::MoveClock;
    use crate::test_support::{ample_time, tree_score, two_move_tree, Side};

    #[test]
    fn picks_the_minimax_move_at_configured_depth() {
        let mut engine = MinimaxEngine::new(tree_score, Side::Max, 2, Duration::from_millis(10));
        let clock = ample_time;
        let out = engine
            .choose_move(&two_move_tree(), &clock)
            .expect("no illegal moves");

        assert_eq!(engine.name(), "Fixed-Depth Minimax");
        assert_eq!(out.best_move, Some("A"));
        assert_eq!(out.info_lines[0], "info depth 2 score 5 nodes 7");
    }

    #[test]
    fn forfeits_when_the_pass_cannot_finish() {
        let mut engine: MinimaxEngine<IsolationBoard, _> =
            MinimaxEngine::with_defaults(OpenMoveScorer, Player::One);
        let clock = MoveClock::from_millis(5);
        let out = engine
            .choose_move(&IsolationBoard::default(), &clock)
            .expect("abort is not an error");

        assert_eq!(out.best_move, None);
        assert!(out.info_lines[0].contains("aborted"));
    }

    #[test]
    fn plays_a_legal_isolation_move() {
        let board = IsolationBoard::new(5, 5)
            .apply_move(&Cell::new(0, 0))
            .and_then(|b| b.apply_move(&Cell::new(4, 4)))
            .expect("openings are legal");
        let mut engine: MinimaxEngine<IsolationBoard, _> =
            MinimaxEngine::with_defaults(OpenMoveScorer, Player::One);
        let clock = ample_time;
        let out = engine.choose_move(&board, &clock).expect("no illegal moves");

        let mv = out.best_move.expect("player one can move");
        assert!(board.legal_moves(Player::One).contains(&mv));
    }
}
