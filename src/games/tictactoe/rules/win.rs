//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// The 8 winning triples: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and the player who owns it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let owner = board.get(a)?.player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((owner, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn board_of(cells: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in cells.chars().enumerate() {
            match c {
                'X' => board.set(i, Square::Occupied(Player::X)).unwrap(),
                'O' => board.set(i, Square::Occupied(Player::O)).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of("XXX.O.O..");
        assert_eq!(winning_line(&board), Some((Player::X, [0, 1, 2])));
    }

    #[test]
    fn test_winner_column() {
        let board = board_of("XO.XO..O.");
        assert_eq!(winning_line(&board), Some((Player::O, [1, 4, 7])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of("O.X.X.X.O");
        assert_eq!(winning_line(&board), Some((Player::X, [2, 4, 6])));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for i in line {
                board.set(i, Square::Occupied(Player::O)).unwrap();
            }
            assert_eq!(winning_line(&board), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_of("XX.OO....");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_of("XOX......");
        assert_eq!(check_winner(&board), None);
    }
}
