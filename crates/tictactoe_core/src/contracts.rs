//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions gate every move; postconditions are checked
//! after each applied move in debug builds.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{GameError, GameState, IgnoredMove, Position};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Why a precondition rejected the action.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the current board has neither a winner nor a full grid.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a decided board.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), IgnoredMove> {
        if game.status().is_over() {
            Err(IgnoredMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), IgnoredMove> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(IgnoredMove::SquareOccupied(position))
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, game status first.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), IgnoredMove> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Current board is undecided
/// - Square is empty
///
/// Postconditions:
/// - History up to the old pointer is preserved, one board is appended
/// - Pointer sits on the new last board
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Rejection = IgnoredMove;

    fn pre(game: &GameState, position: &Position) -> Result<(), IgnoredMove> {
        LegalMove::check(*position, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        let kept = before.current_move() + 1;
        if after.history().len() != kept + 1 || after.history()[..kept] != before.history()[..kept] {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: history was not branched from the pointer".to_string(),
            ));
        }
        if after.current_move() != kept {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: pointer did not advance to the new board".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
