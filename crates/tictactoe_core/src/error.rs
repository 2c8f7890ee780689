//! Errors surfaced by the game core.

use derive_more::{Display, Error};

/// Error returned by fallible game operations.
///
/// Illegal moves are deliberately absent: they are reported as
/// [`MoveOutcome::Ignored`](crate::MoveOutcome) instead.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A history jump targeted a move that does not exist.
    #[display("Move {} is out of range (history holds {} boards)", requested, len)]
    OutOfRange {
        /// The requested move index.
        requested: usize,
        /// Number of boards in history.
        len: usize,
    },

    /// A cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    InvalidPosition(#[error(not(source))] usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_errors_are_std_errors_without_source() {
        let err = GameError::InvariantViolation("pointer past end".to_string());
        assert!(err.source().is_none());

        let boxed: Box<dyn std::error::Error> = Box::new(GameError::InvalidPosition(9));
        assert_eq!(boxed.to_string(), "Position 9 out of bounds (must be 0-8)");
    }
}
