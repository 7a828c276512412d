//! Error types shared by the board contract and the search drivers.
//!
//! `SearchError::Aborted` is the cancellation signal raised by a breached
//! deadline. It unwinds every recursive frame unchanged and is only turned
//! back into a normal value by the top-level drivers. `IllegalMove` marks a
//! broken board contract and is never recovered.

use thiserror::Error;

/// A board was asked to apply a move outside its current legal set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("illegal move: {move_text}")]
pub struct IllegalMove {
    pub move_text: String,
}

impl IllegalMove {
    pub fn new(move_text: impl Into<String>) -> Self {
        Self {
            move_text: move_text.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The deadline clock dropped below its safety margin.
    #[error("search aborted: deadline margin reached")]
    Aborted,

    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
}

impl SearchError {
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, SearchError::Aborted)
    }
}

pub type SearchOutcome<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::{IllegalMove, SearchError};

    #[test]
    fn illegal_move_converts_into_search_error() {
        let err: SearchError = IllegalMove::new("(9, 9)").into();
        assert!(!err.is_aborted());
        assert_eq!(err.to_string(), "illegal move: (9, 9)");
    }

    #[test]
    fn aborted_is_recognised() {
        assert!(SearchError::Aborted.is_aborted());
    }
}
