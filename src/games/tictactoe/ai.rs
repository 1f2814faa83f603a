//! Rule-based AI opponent.
//!
//! Rules are tried in a fixed order and the first one that applies picks
//! the move: win now, block the opponent, take the center, take a random
//! free corner, take any random free cell. There is no search.

use super::rules::check_winner;
use super::types::{Board, Player, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule produced an AI move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Strategy {
    /// Completes one of the AI's own lines.
    Win,
    /// Occupies the cell that would complete an opponent line.
    Block,
    /// Takes the center cell.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free cell.
    Any,
}

/// Returns the lowest empty index at which `player` would complete a line.
///
/// Each candidate is tried on a scratch copy of the board and undone before
/// the next one, so every trial sees the original position plus one mark.
#[instrument(skip(board))]
pub fn find_completing_move(board: &Board, player: Player) -> Option<usize> {
    let mut trial = *board;
    for index in board.empty_squares() {
        trial.set(index, Square::Occupied(player)).ok()?;
        let completes = check_winner(&trial) == Some(player);
        trial.set(index, Square::Empty).ok()?;
        if completes {
            return Some(index);
        }
    }
    None
}

/// Chooses a move for `symbol` on `board`.
///
/// Returns `None` only when the board has no empty cell. The board itself
/// is never modified.
#[instrument(skip(board, rng))]
pub fn compute_ai_move<R>(board: &Board, symbol: Player, rng: &mut R) -> Option<(usize, Strategy)>
where
    R: Rng + ?Sized,
{
    if let Some(index) = find_completing_move(board, symbol) {
        return Some((index, Strategy::Win));
    }
    if let Some(index) = find_completing_move(board, symbol.opponent()) {
        return Some((index, Strategy::Block));
    }
    if board.is_empty(Board::CENTER) {
        return Some((Board::CENTER, Strategy::Center));
    }

    let corners: Vec<usize> = Board::CORNERS
        .into_iter()
        .filter(|&i| board.is_empty(i))
        .collect();
    if let Some(&index) = corners.choose(rng) {
        return Some((index, Strategy::Corner));
    }

    board
        .empty_squares()
        .choose(rng)
        .map(|&index| (index, Strategy::Any))
}

/// The AI player with its own random source.
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    rng: StdRng,
    seed: Option<u64>,
}

impl HeuristicAi {
    /// Creates an AI with a reproducible random source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates an AI seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seed this AI was built with, if reproducible.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Chooses a move for `symbol`, logging the rule that fired.
    #[instrument(skip(self, board))]
    pub fn choose_move(&mut self, board: &Board, symbol: Player) -> Option<(usize, Strategy)> {
        let choice = compute_ai_move(board, symbol, &mut self.rng);
        if let Some((index, strategy)) = choice {
            debug!(index, %strategy, "AI chose move");
        }
        choice
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_win_beats_block() {
        // O can finish the middle row; X threatens the top row.
        let board = board_of("XX.OO....");
        let mut ai = HeuristicAi::with_seed(1);
        assert_eq!(ai.choose_move(&board, Player::O), Some((5, Strategy::Win)));
    }

    #[test]
    fn test_block_when_no_win() {
        let board = board_of("XX..O....");
        let mut ai = HeuristicAi::with_seed(1);
        assert_eq!(ai.choose_move(&board, Player::O), Some((2, Strategy::Block)));
    }

    #[test]
    fn test_lowest_winning_index_first() {
        // O completes the top row at 1 or the left column at 6.
        let board = board_of("O.OOX...X");
        let mut ai = HeuristicAi::with_seed(1);
        assert_eq!(ai.choose_move(&board, Player::O), Some((1, Strategy::Win)));
    }

    #[test]
    fn test_center_when_free() {
        let board = board_of("X........");
        let mut ai = HeuristicAi::with_seed(7);
        assert_eq!(ai.choose_move(&board, Player::O), Some((4, Strategy::Center)));
    }

    #[test]
    fn test_corner_when_center_taken() {
        let board = board_of("....X....");
        for seed in 0..32 {
            let mut ai = HeuristicAi::with_seed(seed);
            let (index, strategy) = ai.choose_move(&board, Player::O).unwrap();
            assert_eq!(strategy, Strategy::Corner);
            assert!(Board::CORNERS.contains(&index));
        }
    }

    #[test]
    fn test_any_when_corners_and_center_taken() {
        // X O X / . X . / O X O: no threats, only edges 3 and 5 free.
        let board = board_of("XOX.X.OXO");
        for seed in 0..32 {
            let mut ai = HeuristicAi::with_seed(seed);
            let (index, strategy) = ai.choose_move(&board, Player::O).unwrap();
            assert_eq!(strategy, Strategy::Any);
            assert!(index == 3 || index == 5);
        }
    }

    #[test]
    fn test_board_is_not_modified() {
        let board = board_of("XX.OO....");
        let before = board;
        let _ = compute_ai_move(&board, Player::O, &mut StdRng::seed_from_u64(3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_of("XOXOXXOXO");
        assert_eq!(compute_ai_move(&board, Player::O, &mut StdRng::seed_from_u64(3)), None);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = board_of("....X....");
        let a = HeuristicAi::with_seed(99).choose_move(&board, Player::O);
        let b = HeuristicAi::with_seed(99).choose_move(&board, Player::O);
        assert_eq!(a, b);
    }
}
