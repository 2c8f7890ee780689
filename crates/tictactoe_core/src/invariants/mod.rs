//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! game state. They are checked after each applied move in debug builds and
//! can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod monotonic_history;
pub mod pointer_in_bounds;
pub mod terminal_freeze;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use pointer_in_bounds::PointerInBoundsInvariant;
pub use terminal_freeze::TerminalFreezeInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    PointerInBoundsInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
    TerminalFreezeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::{Board, GameState, Mark, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameState::new();
        for cell in [0, 4, 1, 3] {
            let _ = game.apply_move(Position::from_index(cell).expect("cell"));
        }
        game.jump_to(2).expect("in range");
        let _ = game.apply_move(Position::BottomRight);

        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // One snapshot that adds two marks of the same kind, pointer past the end.
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        let game = GameState::from_parts(History::from_boards(vec![Board::new(), board]), 5);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (PointerInBoundsInvariant, MonotonicHistoryInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
