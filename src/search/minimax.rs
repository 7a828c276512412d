//! Fixed-depth minimax.
//!
//! A single recursive walk alternating between the maximizing ply (the search
//! owner's turn) and the minimizing ply (the opponent's turn). Frontier and
//! move-less positions are scored by the evaluator for the owner; the board's
//! move order decides ties, keeping the first move seen with the best score.

use crate::errors::SearchOutcome;
use crate::game_state::game_position::GamePosition;
use crate::search::evaluation::{Evaluator, Score, LOSS_SCORE, WIN_SCORE};
use crate::search::search_types::{forecast, Role, SearchContext, SearchResult};

/// Exact-depth minimax value of `position`. Only maximizing plies report a
/// best move.
pub fn minimax<P, E>(
    ctx: &mut SearchContext<'_, P, E>,
    position: &P,
    depth: u8,
    role: Role,
) -> SearchOutcome<SearchResult<P::Move>>
where
    P: GamePosition,
    E: Evaluator<P> + ?Sized,
{
    ctx.enter_frame()?;

    if depth == 0 {
        return Ok(SearchResult::leaf(ctx.evaluate(position, true)));
    }

    let moves = position.legal_moves(ctx.mover(position, role));
    if moves.is_empty() {
        return Ok(SearchResult::leaf(ctx.evaluate(position, false)));
    }

    match role {
        Role::Maximizing => {
            let mut best_score = LOSS_SCORE;
            let mut best_move = None;
            for mv in moves {
                let child = forecast(position, &mv)?;
                let score = minimax(ctx, &child, depth - 1, role.next())?.score;
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
            }
            Ok(SearchResult {
                score: best_score,
                best_move,
            })
        }
        Role::Minimizing => {
            let mut best_score: Score = WIN_SCORE;
            for mv in moves {
                let child = forecast(position, &mv)?;
                let score = minimax(ctx, &child, depth - 1, role.next())?.score;
                if score < best_score {
                    best_score = score;
                }
            }
            Ok(SearchResult::leaf(best_score))
        }
    }
}

/// Root call: best move for the search owner at exactly `depth` plies. The
/// owner must be the side to move in `position`.
pub fn minimax_decision<P, E>(
    ctx: &mut SearchContext<'_, P, E>,
    position: &P,
    depth: u8,
) -> SearchOutcome<SearchResult<P::Move>>
where
    P: GamePosition,
    E: Evaluator<P> + ?Sized,
{
    ctx.ensure_owner_to_move(position)?;
    minimax(ctx, position, depth, Role::Maximizing)
}
