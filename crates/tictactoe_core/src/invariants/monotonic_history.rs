//! Monotonic history invariant: boards only ever gain marks.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history starts empty and each board adds exactly one mark.
///
/// A filled square never empties again, and no square changes owner.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first() != Some(&Board::new()) {
            return false;
        }

        (1..history.len()).all(|index| {
            history[index].occupied() == history[index - 1].occupied() + 1
                && game.move_at(index).is_some()
        })
    }

    fn description() -> &'static str {
        "History starts empty and each board adds exactly one mark"
    }
}
