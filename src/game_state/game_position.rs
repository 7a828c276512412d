//! Board contract consumed by the search core.
//!
//! The search never mutates a position in place: every move goes through
//! `apply_move`, which hands back an independently owned child position.
//! Win/loss queries exist for evaluators only; the recursion itself never
//! calls them.

use std::fmt::Debug;

use crate::errors::IllegalMove;

pub trait GamePosition: Sized {
    type Move: Clone + PartialEq + Debug;
    type Player: Copy + Eq + Debug;

    /// Legal moves for `player`, in a deterministic order. Empty means the
    /// player has no options in this position.
    fn legal_moves(&self, player: Self::Player) -> Vec<Self::Move>;

    /// The side `apply_move` plays for.
    fn player_to_move(&self) -> Self::Player;

    /// Returns the position reached by playing `mv` for the side to move.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self, IllegalMove>;

    fn is_winner(&self, player: Self::Player) -> bool;

    fn is_loser(&self, player: Self::Player) -> bool;

    fn opponent_of(&self, player: Self::Player) -> Self::Player;
}
