//! Isolation heuristics plugged into search through `Evaluator`.
//!
//! Every scorer except `NullScorer` short-circuits decided positions to
//! `LOSS_SCORE`/`WIN_SCORE` using the board's own win/loss detection, so a
//! player left without moves is scored as a loss for them.

use crate::game_state::game_position::GamePosition;
use crate::game_state::isolation::{Cell, IsolationBoard, Player};
use crate::search::evaluation::{Evaluator, Score, LOSS_SCORE, WIN_SCORE};

#[inline]
fn decided_score(board: &IsolationBoard, player: Player) -> Option<Score> {
    if board.is_loser(player) {
        Some(LOSS_SCORE)
    } else if board.is_winner(player) {
        Some(WIN_SCORE)
    } else {
        None
    }
}

#[inline]
fn mobility(board: &IsolationBoard, player: Player) -> Score {
    board.legal_moves(player).len() as Score
}

/// Always zero; search degenerates to "first legal move".
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScorer;

impl Evaluator<IsolationBoard> for NullScorer {
    fn evaluate(&self, _board: &IsolationBoard, _perspective: Player) -> Score {
        0.0
    }
}

/// Number of moves open to the perspective player.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMoveScorer;

impl Evaluator<IsolationBoard> for OpenMoveScorer {
    fn evaluate(&self, board: &IsolationBoard, perspective: Player) -> Score {
        decided_score(board, perspective).unwrap_or_else(|| mobility(board, perspective))
    }
}

/// Own mobility minus opponent mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedScorer;

impl Evaluator<IsolationBoard> for ImprovedScorer {
    fn evaluate(&self, board: &IsolationBoard, perspective: Player) -> Score {
        decided_score(board, perspective).unwrap_or_else(|| {
            mobility(board, perspective) - mobility(board, board.opponent_of(perspective))
        })
    }
}

/// Squared distance of the perspective player from the board centre.
/// Players who have not moved yet score zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterScorer;

impl Evaluator<IsolationBoard> for CenterScorer {
    fn evaluate(&self, board: &IsolationBoard, perspective: Player) -> Score {
        if let Some(score) = decided_score(board, perspective) {
            return score;
        }
        let Some(cell) = board.location_of(perspective) else {
            return 0.0;
        };
        let half_w = Score::from(board.width()) / 2.0;
        let half_h = Score::from(board.height()) / 2.0;
        let d_row = half_h - Score::from(cell.row);
        let d_col = half_w - Score::from(cell.col);
        d_row * d_row + d_col * d_col
    }
}

/// Own mobility minus `weight` times opponent mobility. Weights above one
/// make the player chase the opponent.
#[derive(Debug, Clone, Copy)]
pub struct WeightedMobilityScorer {
    pub weight: Score,
}

impl WeightedMobilityScorer {
    pub const AGGRESSIVE: Self = Self { weight: 1.5 };
    pub const VERY_AGGRESSIVE: Self = Self { weight: 2.0 };

    pub const fn new(weight: Score) -> Self {
        Self { weight }
    }
}

impl Default for WeightedMobilityScorer {
    fn default() -> Self {
        Self::AGGRESSIVE
    }
}

impl Evaluator<IsolationBoard> for WeightedMobilityScorer {
    fn evaluate(&self, board: &IsolationBoard, perspective: Player) -> Score {
        decided_score(board, perspective).unwrap_or_else(|| {
            mobility(board, perspective)
                - self.weight * mobility(board, board.opponent_of(perspective))
        })
    }
}

/// Blends immediate mobility with the average mobility one jump ahead,
/// weighted by the blank fraction `b` of the board.
///
/// With `weight_by_blank` set the score is `(1 - b) * immediate + b *
/// follow_up`, so look-ahead dominates while the board is open and the
/// immediate difference takes over as it fills. Clearing the flag swaps the
/// two weights.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveScorer {
    pub weight_by_blank: bool,
}

impl AdaptiveScorer {
    pub const BLANK_WEIGHTED: Self = Self {
        weight_by_blank: true,
    };
    pub const OCCUPANCY_WEIGHTED: Self = Self {
        weight_by_blank: false,
    };

    fn mean_follow_up(board: &IsolationBoard, moves: &[Cell]) -> Score {
        if moves.is_empty() {
            return 0.0;
        }
        let total: usize = moves.iter().map(|&cell| board.moves_from(cell).len()).sum();
        total as Score / moves.len() as Score
    }
}

impl Default for AdaptiveScorer {
    fn default() -> Self {
        Self::BLANK_WEIGHTED
    }
}

impl Evaluator<IsolationBoard> for AdaptiveScorer {
    fn evaluate(&self, board: &IsolationBoard, perspective: Player) -> Score {
        if let Some(score) = decided_score(board, perspective) {
            return score;
        }
        let blank = board.blank_ratio();
        let weight = if self.weight_by_blank { blank } else { 1.0 - blank };
        let own_moves = board.legal_moves(perspective);
        let opp_moves = board.legal_moves(board.opponent_of(perspective));

        let immediate = own_moves.len() as Score - opp_moves.len() as Score;
        let follow_up =
            Self::mean_follow_up(board, &own_moves) - Self::mean_follow_up(board, &opp_moves);

        (1.0 - weight) * immediate + weight * follow_up
    }
}
