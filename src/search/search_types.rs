//! Values threaded through the recursive search engines.

use crate::errors::{IllegalMove, SearchError, SearchOutcome};
use crate::game_state::game_position::GamePosition;
use crate::search::deadline::Deadline;
use crate::search::evaluation::{Evaluator, Score};

/// Score paired with the move that produced it. `best_move` is `None` for
/// frontier nodes, positions without legal moves, and minimizing plies.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub score: Score,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    #[inline]
    pub fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Which side of the minimax recursion a ply belongs to. Alternates strictly
/// with ply parity, starting from `Maximizing` at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }
}

/// Per-call search state: who owns the search, how to score frontiers, and
/// when to stop. Owned by a single top-level call and never shared.
pub struct SearchContext<'a, P: GamePosition, E: Evaluator<P> + ?Sized> {
    evaluator: &'a E,
    owner: P::Player,
    deadline: Deadline<'a>,
    nodes: u64,
    horizon_reached: bool,
}

impl<'a, P: GamePosition, E: Evaluator<P> + ?Sized> SearchContext<'a, P, E> {
    pub fn new(evaluator: &'a E, owner: P::Player, deadline: Deadline<'a>) -> Self {
        Self {
            evaluator,
            owner,
            deadline,
            nodes: 0,
            horizon_reached: false,
        }
    }

    /// Deadline check run first thing in every frame.
    #[inline]
    pub fn enter_frame(&mut self) -> SearchOutcome<()> {
        if self.deadline.expired() {
            return Err(SearchError::Aborted);
        }
        self.nodes += 1;
        Ok(())
    }

    /// Scores `position` for the search owner. `at_horizon` records that the
    /// depth limit, not the game tree, ended this line.
    #[inline]
    pub fn evaluate(&mut self, position: &P, at_horizon: bool) -> Score {
        if at_horizon {
            self.horizon_reached = true;
        }
        self.evaluator.evaluate(position, self.owner)
    }

    /// Rejects a root position whose side to move is not the search owner.
    pub fn ensure_owner_to_move(&self, position: &P) -> SearchOutcome<()> {
        let to_move = position.player_to_move();
        if to_move == self.owner {
            return Ok(());
        }
        tracing::warn!(owner = ?self.owner, ?to_move, "search started on the opponent's turn");
        Err(IllegalMove::new(format!(
            "search owner {:?} is not to move ({:?} is)",
            self.owner, to_move
        ))
        .into())
    }

    /// The player whose moves are generated on a ply with `role`.
    #[inline]
    pub fn mover(&self, position: &P, role: Role) -> P::Player {
        match role {
            Role::Maximizing => self.owner,
            Role::Minimizing => position.opponent_of(self.owner),
        }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn horizon_reached(&self) -> bool {
        self.horizon_reached
    }

    /// Clears per-pass bookkeeping before the driver starts a new depth.
    pub fn begin_pass(&mut self) {
        self.horizon_reached = false;
    }
}

/// Applies `mv` to a copy of `position`. The recursion only plays moves the
/// board itself listed, so a rejection here means the board broke its own
/// contract.
pub fn forecast<P: GamePosition>(position: &P, mv: &P::Move) -> SearchOutcome<P> {
    position.apply_move(mv).map_err(|err| {
        tracing::warn!(?mv, %err, "board rejected a move it reported as legal");
        SearchError::from(err)
    })
}
