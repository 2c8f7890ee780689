//! Pointer invariant: the history pointer names an existing board.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_move < history.len()`.
pub struct PointerInBoundsInvariant;

impl Invariant<GameState> for PointerInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "History pointer refers to an existing board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::Position;

    #[test]
    fn test_holds_while_navigating() {
        let mut game = GameState::new();
        let _ = game.apply_move(Position::Center);
        let _ = game.apply_move(Position::TopLeft);
        for index in 0..game.history().len() {
            game.jump_to(index).expect("in range");
            assert!(PointerInBoundsInvariant::holds(&game));
        }
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let game = GameState::from_parts(History::new(), 1);
        assert!(!PointerInBoundsInvariant::holds(&game));
    }
}
