//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: the mark added at history entry `k` belongs to pointer `k - 1`.
///
/// Entry 1 holds X's opening move, entry 2 O's reply, and so on.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        (1..game.history().len()).all(|index| {
            game.move_at(index)
                .is_some_and(|action| action.mark() == Mark::for_move(index - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
