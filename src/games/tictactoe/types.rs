//! Core domain types for tic-tac-toe.

use super::action::Rejection;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O (the AI seat in PvAI mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Who sits in the O seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[strum(serialize = "pvp")]
    PvP,
    /// A human plays X against the heuristic AI playing O.
    #[strum(serialize = "pvai")]
    PvAI,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::PvP => "Player vs Player",
            GameMode::PvAI => "Player vs AI",
        }
    }

    /// Returns the symbol played by the AI in this mode.
    pub fn ai_player(&self) -> Option<Player> {
        match self {
            GameMode::PvP => None,
            GameMode::PvAI => Some(Player::O),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Index of the center cell.
    pub const CENTER: usize = 4;

    /// Indices of the four corner cells.
    pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), Rejection> {
        let cell = self
            .squares
            .get_mut(index)
            .ok_or(Rejection::InvalidIndex(index))?;
        *cell = square;
        Ok(())
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all cells.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Empty cell indices in ascending order.
    pub fn empty_squares(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board for a terminal, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
