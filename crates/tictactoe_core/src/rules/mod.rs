//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules know nothing about history or
//! turn order, which keeps them usable from contracts and invariants.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinLine, evaluate};
