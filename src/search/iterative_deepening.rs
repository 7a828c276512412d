//! Iterative deepening driver over the alpha-beta engine.
//!
//! Depth grows from one until the deadline clock fires. Only passes that
//! finish contribute: an aborted pass leaves the previous depth's move in
//! place. When not even depth one completes the driver returns no move,
//! which callers treat as a forfeit. This is the only place a
//! `SearchError::Aborted` is swallowed.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::errors::{SearchError, SearchOutcome};
use crate::game_state::game_position::GamePosition;
use crate::search::alpha_beta::alpha_beta_decision;
use crate::search::deadline::{Deadline, TimeLeft};
use crate::search::evaluation::{is_decisive, Evaluator, Score};
use crate::search::search_types::SearchContext;

/// Default slack kept between the last deadline check and the real
/// deadline.
pub const DEFAULT_MARGIN: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub margin: Duration,
    /// Optional ceiling on the deepening loop; `None` lets the deadline
    /// decide. `Some(0)` runs no pass at all.
    pub max_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            max_depth: None,
        }
    }
}

/// Outcome of one completed depth.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthSummary<M> {
    pub depth: u8,
    pub score: Score,
    pub best_move: Option<M>,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub struct DeepeningReport<M> {
    pub best_move: Option<M>,
    pub best_score: Option<Score>,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    /// True when the loop ended on the deadline rather than a depth cap or
    /// a settled tree.
    pub aborted: bool,
    pub completed: Vec<DepthSummary<M>>,
}

impl<M> Default for DeepeningReport<M> {
    fn default() -> Self {
        Self {
            best_move: None,
            best_score: None,
            reached_depth: 0,
            nodes: 0,
            elapsed_ms: 0,
            aborted: false,
            completed: Vec::new(),
        }
    }
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Deepens an alpha-beta search for `owner`, who must be the side to move in
/// `position`.
pub fn iterative_deepening_search<P, E>(
    position: &P,
    evaluator: &E,
    owner: P::Player,
    time_left: &dyn TimeLeft,
    config: &SearchConfig,
) -> SearchOutcome<DeepeningReport<P::Move>>
where
    P: GamePosition,
    E: Evaluator<P> + ?Sized,
{
    let started_at = Instant::now();
    let mut ctx = SearchContext::new(evaluator, owner, Deadline::new(time_left, config.margin));
    let mut report = DeepeningReport::default();
    let max_depth = config.max_depth.unwrap_or(u8::MAX);

    for depth in 1..=max_depth {
        ctx.begin_pass();
        let nodes_before = ctx.nodes();

        let result = match alpha_beta_decision(&mut ctx, position, depth) {
            Ok(result) => result,
            Err(SearchError::Aborted) => {
                debug!(depth, nodes = ctx.nodes() - nodes_before, "depth aborted by deadline");
                report.aborted = true;
                break;
            }
            Err(err) => return Err(err),
        };

        let pass_nodes = ctx.nodes() - nodes_before;
        debug!(
            depth,
            score = result.score,
            best_move = ?result.best_move,
            nodes = pass_nodes,
            elapsed_ms = whole_millis(started_at.elapsed()),
            "depth completed"
        );

        report.best_move = result.best_move.clone();
        report.best_score = Some(result.score);
        report.reached_depth = depth;
        report.completed.push(DepthSummary {
            depth,
            score: result.score,
            best_move: result.best_move,
            nodes: pass_nodes,
        });

        if is_decisive(result.score) {
            trace!(depth, score = result.score, "outcome decided; deeper passes cannot change it");
            break;
        }
        if !ctx.horizon_reached() {
            trace!(depth, "game tree exhausted before the depth limit");
            break;
        }
    }

    report.nodes = ctx.nodes();
    report.elapsed_ms = whole_millis(started_at.elapsed());
    Ok(report)
}

/// Caller-facing search instance: one evaluator, one fixed owner, one
/// safety margin. Holds no per-call state, so a shared reference can serve
/// concurrent searches on independent positions.
pub struct AlphaBetaSearch<P: GamePosition, E> {
    evaluator: E,
    owner: P::Player,
    config: SearchConfig,
}

impl<P, E> AlphaBetaSearch<P, E>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    pub fn new(evaluator: E, owner: P::Player, margin: Duration) -> Self {
        Self {
            evaluator,
            owner,
            config: SearchConfig {
                margin,
                ..SearchConfig::default()
            },
        }
    }

    pub fn with_config(evaluator: E, owner: P::Player, config: SearchConfig) -> Self {
        Self {
            evaluator,
            owner,
            config,
        }
    }

    /// Best move justified before `time_left` drops under the margin, or
    /// `None` (forfeit) when not even depth one finished. Fails with
    /// `SearchError::IllegalMove` if the owner is not the side to move.
    pub fn best_move(&self, position: &P, time_left: &dyn TimeLeft) -> SearchOutcome<Option<P::Move>> {
        Ok(self.search(position, time_left)?.best_move)
    }

    pub fn search(
        &self,
        position: &P,
        time_left: &dyn TimeLeft,
    ) -> SearchOutcome<DeepeningReport<P::Move>> {
        iterative_deepening_search(position, &self.evaluator, self.owner, time_left, &self.config)
    }
}
