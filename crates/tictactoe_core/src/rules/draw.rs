//! Draw detection logic for tic-tac-toe.

use super::win::evaluate;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no winning line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}
