//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine and the AI
//! both evaluate positions through these, never through their own copies.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};
