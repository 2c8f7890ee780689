//! Terminal freeze invariant: nothing is played after a win.

use super::Invariant;
use crate::GameState;
use crate::rules;

/// Invariant: only the last board in history may hold a winning line.
pub struct TerminalFreezeInvariant;

impl Invariant<GameState> for TerminalFreezeInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history().split_last() {
            Some((_, earlier)) => earlier.iter().all(|board| rules::evaluate(board).is_none()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No board follows a won board"
    }
}
