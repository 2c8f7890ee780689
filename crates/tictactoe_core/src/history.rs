//! Move history as a sequence of board snapshots.

use crate::{Board, Move, Position};
use serde::Serialize;

/// Ordered board snapshots, starting from the empty board.
///
/// Each snapshot after the first adds exactly one mark to its predecessor.
/// History is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of snapshots, including the empty starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false for histories built through the game.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Keeps snapshots `0..=from`, drops the rest, then appends `board`.
    pub(crate) fn branch(&mut self, from: usize, board: Board) {
        self.boards.truncate(from + 1);
        self.boards.push(board);
    }

    /// Derives the move that produced snapshot `index`.
    ///
    /// Returns `None` for the starting board, for indices past the end, and
    /// for a pair of snapshots that does not differ by exactly one new mark.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let prev = self.boards.get(index.checked_sub(1)?)?;
        let next = self.boards.get(index)?;

        let mut added = Position::ALL
            .iter()
            .copied()
            .filter(|&pos| prev.get(pos) != next.get(pos));
        let pos = added.next()?;
        if added.next().is_some() || !prev.is_empty(pos) {
            return None;
        }
        next.get(pos).mark().map(|mark| Move::new(mark, pos))
    }

    /// Moves for snapshots `1..len`, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.boards.len())
            .filter_map(|index| self.move_at(index))
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
