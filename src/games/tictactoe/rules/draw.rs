//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board on which nobody completed a line.
///
/// A full board with a completed line is a win, never a draw.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
