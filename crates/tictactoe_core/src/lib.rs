//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`rules::evaluate`], [`rules::is_draw`])
//! - **Game**: [`GameState`] owns board snapshots, the history pointer and
//!   player names; the turn is derived from the pointer
//! - **Contracts**: preconditions gate moves, postconditions and
//!   [`invariants`] are checked after each move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Mark, Position};
//!
//! let mut game = GameState::new();
//! for cell in [0usize, 4, 1, 3, 2] {
//!     let _ = game.apply_move(Position::try_from(cell)?);
//! }
//! let win = game.win_result().expect("X completed the top row");
//! assert_eq!(win.mark(), Mark::X);
//! assert_eq!(win.indices(), [0, 1, 2]);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod history;
mod players;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{IgnoredMove, Move, MoveOutcome};
pub use error::GameError;
pub use game::{GameState, GameStatus};
pub use history::History;
pub use players::PlayerNames;
pub use position::Position;
pub use rules::WinLine;
pub use types::{Board, Mark, Square};
