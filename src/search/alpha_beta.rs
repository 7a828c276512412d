//! Depth-limited minimax with alpha-beta pruning.
//!
//! Same recursion as `minimax`, with two bounds threaded through the call:
//! `alpha`, the best score the maximizer is already guaranteed, and `beta`,
//! the best score the minimizer is already guaranteed. A ply stops exploring
//! siblings as soon as its running value falls outside the window; the value
//! it returns then is only a bound, but the root value and root move match
//! the unpruned search at the same depth.

use crate::errors::SearchOutcome;
use crate::game_state::game_position::GamePosition;
use crate::search::evaluation::{Evaluator, Score, LOSS_SCORE, WIN_SCORE};
use crate::search::search_types::{forecast, Role, SearchContext, SearchResult};

pub fn alpha_beta<P, E>(
    ctx: &mut SearchContext<'_, P, E>,
    position: &P,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
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
                let score = alpha_beta(ctx, &child, depth - 1, alpha, beta, role.next())?.score;
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                // Beta cutoff: the minimizer above will never allow this line.
                if best_score >= beta {
                    break;
                }
                alpha = alpha.max(best_score);
            }
            Ok(SearchResult {
                score: best_score,
                best_move,
            })
        }
        Role::Minimizing => {
            let mut best_score = WIN_SCORE;
            for mv in moves {
                let child = forecast(position, &mv)?;
                let score = alpha_beta(ctx, &child, depth - 1, alpha, beta, role.next())?.score;
                if score < best_score {
                    best_score = score;
                }
                // Alpha cutoff.
                if best_score <= alpha {
                    break;
                }
                beta = beta.min(best_score);
            }
            Ok(SearchResult::leaf(best_score))
        }
    }
}

/// Root call with a full window. The owner must be the side to move.
pub fn alpha_beta_decision<P, E>(
    ctx: &mut SearchContext<'_, P, E>,
    position: &P,
    depth: u8,
) -> SearchOutcome<SearchResult<P::Move>>
where
    P: GamePosition,
    E: Evaluator<P> + ?Sized,
{
    ctx.ensure_owner_to_move(position)?;
    alpha_beta(ctx, position, depth, LOSS_SCORE, WIN_SCORE, Role::Maximizing)
}
