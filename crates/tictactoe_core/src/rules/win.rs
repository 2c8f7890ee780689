//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
///
/// Rows top to bottom, columns left to right, then the `\` and `/` diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning mark and the three positions holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    mark: Mark,
    line: [Position; 3],
}

impl WinLine {
    /// The winning mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The winning triple.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The winning triple as cell indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the winning triple.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates a board for a winner.
///
/// Returns the first triple in [`LINES`] whose three squares hold the same
/// mark. When several lines are complete (impossible in legal play) the
/// earliest one in [`LINES`] is reported.
#[instrument]
pub fn evaluate(board: &Board) -> Option<WinLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == Square::Occupied(mark) && board.get(c) == Square::Occupied(mark) =>
            {
                Some(WinLine { mark, line })
            }
            _ => None,
        }
    })
}
