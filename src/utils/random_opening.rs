//! Seeded random opening prefixes for Isolation.
//!
//! Lets tests and benches start from varied but reproducible positions,
//! the way the match harness randomises its first few plies.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::errors::IllegalMove;
use crate::game_state::game_position::GamePosition;
use crate::game_state::isolation::IsolationBoard;

/// Plays up to `plies` uniformly random legal moves from `board`. Stops
/// early if the side to move runs out of moves.
pub fn random_opening<R: Rng + ?Sized>(
    board: &IsolationBoard,
    plies: u8,
    rng: &mut R,
) -> Result<IsolationBoard, IllegalMove> {
    let mut current = board.clone();
    for _ in 0..plies {
        let moves = current.legal_moves(current.active_player());
        let Some(mv) = moves.as_slice().choose(rng) else {
            break;
        };
        current = current.apply_move(mv)?;
    }
    Ok(current)
}
