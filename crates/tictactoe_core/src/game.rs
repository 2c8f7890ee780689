//! Game state with linear move history and time travel.

use crate::contracts::{Contract, MoveContract};
use crate::history::History;
use crate::players::PlayerNames;
use crate::rules::{self, WinLine};
use crate::{Board, GameError, Mark, Move, MoveOutcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of the board at the history pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be played.
    InProgress,
    /// A line is complete.
    Won(WinLine),
    /// The board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning line, if any.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        }
    }
}

/// Complete game state.
///
/// History holds one board per move. `current_move` points at the board
/// being shown and played from; whose turn it is follows from its parity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    current_move: usize,
    players: PlayerNames,
}

impl GameState {
    /// Creates a new game: one empty board, pointer at 0, no names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            players: PlayerNames::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: History, current_move: usize) -> Self {
        Self {
            history,
            current_move,
            players: PlayerNames::new(),
        }
    }

    /// Places the current turn's mark at `position`.
    ///
    /// Ignored, with state untouched, when the current board is already
    /// decided or the square is taken. Playing from a past board discards
    /// every later board before appending the new one.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "Ignoring move");
            return MoveOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.current_turn();
        let mut board = *self.current_board();
        board.set(position, Square::Occupied(mark));

        let discarded = self.history.len() - self.current_move - 1;
        if discarded > 0 {
            debug!(discarded, "Branching from a past move");
        }
        self.history.branch(self.current_move, board);
        self.current_move = self.history.len() - 1;

        match self.status() {
            GameStatus::Won(line) => info!(winner = %line.mark(), line = ?line.indices(), "Game won"),
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress => debug!(%mark, %position, "Move applied"),
        }

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            if let Err(e) = &checked {
                tracing::error!(error = %e, "Move postcondition failed");
            }
            debug_assert!(checked.is_ok(), "{:?}", checked);
        }

        MoveOutcome::Applied(Move::new(mark, position))
    }

    /// Moves the history pointer to `move_index` without altering history.
    ///
    /// Allowed in any status, so finished games can be reviewed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if no board exists at `move_index`;
    /// the pointer is left where it was.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if move_index >= len {
            debug!(len, "Jump target out of range");
            return Err(GameError::OutOfRange {
                requested: move_index,
                len,
            });
        }
        self.current_move = move_index;
        Ok(())
    }

    /// Overwrites the display name for `mark`. Any string is accepted.
    #[instrument(skip(self, name))]
    pub fn set_player_name(&mut self, mark: Mark, name: impl Into<String>) {
        self.players.set(mark, name);
    }

    /// Replaces the whole game with a fresh one, names included.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// The board at the history pointer.
    pub fn current_board(&self) -> &Board {
        &self.history.boards()[self.current_move]
    }

    /// The mark that plays next from the current board.
    pub fn current_turn(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// The history pointer.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Winning line on the current board, if any.
    pub fn win_result(&self) -> Option<WinLine> {
        rules::evaluate(self.current_board())
    }

    /// Returns true if the current board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match rules::evaluate(board) {
            Some(line) => GameStatus::Won(line),
            None if rules::is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// All boards, oldest first.
    pub fn history(&self) -> &[Board] {
        self.history.boards()
    }

    /// The move that produced history entry `index` (entry 0 has none).
    pub fn move_at(&self, index: usize) -> Option<Move> {
        self.history.move_at(index)
    }

    /// Every move in history, oldest first, including any beyond the pointer.
    pub fn moves(&self) -> Vec<Move> {
        self.history.moves()
    }

    /// Player names.
    pub fn player_names(&self) -> &PlayerNames {
        &self.players
    }

    /// Empty positions of the current board, or none once it is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
