//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::GameMode;

/// Tic-tac-toe in the terminal, against a friend or a rule-based AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or the AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Start directly in this mode (pvp or pvai)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Seed for reproducible AI moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cosmetic AI thinking delay in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Print state snapshots as JSON lines instead of drawing the board
    #[arg(long)]
    pub json: bool,
}

/// A line typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Click the cell with this index (0-8).
    Cell(usize),
    /// Select a mode.
    Mode(GameMode),
    /// Restart in the current mode.
    Restart,
    /// Go back to mode selection.
    ChangeMode,
    /// Leave.
    Quit,
    /// Show commands.
    Help,
}

impl Input {
    /// Parses a user line; cells are numbered 1-9 on screen.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if let Ok(number) = line.parse::<usize>() {
            // 0 and out-of-range numbers reach the engine as invalid indices.
            return Some(Input::Cell(number.wrapping_sub(1)));
        }
        if let Ok(mode) = line.parse::<GameMode>() {
            return Some(Input::Mode(mode));
        }
        match line.to_ascii_lowercase().as_str() {
            "r" | "restart" => Some(Input::Restart),
            "m" | "mode" => Some(Input::ChangeMode),
            "q" | "quit" | "exit" => Some(Input::Quit),
            "h" | "help" | "?" => Some(Input::Help),
            _ => None,
        }
    }
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  1-9     place a mark (cells are numbered left to right, top to bottom)
  pvp     new game, two players
  pvai    new game against the AI
  r       restart in the current mode
  m       back to mode selection
  q       quit";
