use std::time::Duration;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::SearchError;
use crate::game_state::game_position::GamePosition;
use crate::search::deadline::TimeLeft;
use crate::search::evaluation::Evaluator;
use crate::search::iterative_deepening::{AlphaBetaSearch, SearchConfig};

pub struct IterativeEngine<P: GamePosition, E> {
    search: AlphaBetaSearch<P, E>,
}

impl<P, E> IterativeEngine<P, E>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    pub fn new(evaluator: E, owner: P::Player, margin: Duration) -> Self {
        Self {
            search: AlphaBetaSearch::new(evaluator, owner, margin),
        }
    }

    pub fn with_config(evaluator: E, owner: P::Player, config: SearchConfig) -> Self {
        Self {
            search: AlphaBetaSearch::with_config(evaluator, owner, config),
        }
    }
}

impl<P, E> Engine<P> for IterativeEngine<P, E>
where
    P: GamePosition,
    P::Player: Send,
    E: Evaluator<P>,
{
    fn name(&self) -> &str {
        "Iterative AlphaBeta"
    }

    fn choose_move(
        &mut self,
        position: &P,
        time_left: &dyn TimeLeft,
    ) -> Result<EngineOutput<P::Move>, SearchError> {
        let report = self.search.search(position, time_left)?;

        let mut out = EngineOutput::default();
        for summary in &report.completed {
            out.info_lines.push(format!(
                "info depth {} score {} nodes {}",
                summary.depth, summary.score, summary.nodes
            ));
        }
        out.info_lines.push(format!(
            "info string iterative_engine reached_depth {} nodes {} elapsed_ms {} aborted {}",
            report.reached_depth, report.nodes, report.elapsed_ms, report.aborted
        ));
        if report.best_move.is_none() {
            out.info_lines
                .push("info string iterative_engine no move justified".to_string());
        }
        out.best_move = report.best_move;

        Ok(out)
    }
}
