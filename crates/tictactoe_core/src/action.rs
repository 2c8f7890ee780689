//! First-class move types for tic-tac-toe.
//!
//! A move is a domain event: the mark that was placed and where. Applying a
//! move either succeeds or is ignored, and the caller learns which.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoredMove {
    /// The current board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of asking the game to apply a move.
///
/// Ignored moves are not errors; the game state is unchanged and the caller
/// is free to drop the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The move was placed and history advanced.
    Applied(Move),
    /// The move was rejected and nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the move was placed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// Returns the applied move, if any.
    pub fn applied(&self) -> Option<Move> {
        match self {
            MoveOutcome::Applied(action) => Some(*action),
            MoveOutcome::Ignored(_) => None,
        }
    }
}
