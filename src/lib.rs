//! Tic-tac-toe engine library.
//!
//! A synchronous game-state machine for human-vs-human and human-vs-AI
//! tic-tac-toe, plus a rule-based AI opponent.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the [`GameSession`] and turns user
//!   intents into [`MoveStatus`] answers and [`Snapshot`]s
//! - **Rules**: pure win/draw detection over a [`Board`]
//! - **AI**: [`HeuristicAi`] (win > block > center > corner > any)
//! - **Config**: TOML settings for the terminal driver
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameMode, HeuristicAi, MoveStatus};
//!
//! let mut engine = GameEngine::with_ai(HeuristicAi::with_seed(1));
//! engine.select_mode(GameMode::PvAI);
//!
//! let status = engine.cell_clicked(0);
//! assert!(status.snapshot().is_some_and(|s| s.is_ai_thinking));
//!
//! // The caller decides how long the AI "thinks".
//! let status = engine.play_ai_turn();
//! assert!(matches!(status, MoveStatus::Accepted(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{AiConfig, ConfigError, EngineConfig, GameConfig};

// Crate-level exports - Engine and session
pub use games::tictactoe::{EngineState, GameEngine, GameSession, MoveStatus, Rejection, Snapshot};

// Crate-level exports - Game types
pub use games::tictactoe::{Board, CELL_COUNT, GameMode, Outcome, Player, Square};

// Crate-level exports - Rules and AI
pub use games::tictactoe::{
    HeuristicAi, Strategy, WINNING_LINES, check_draw, check_winner, compute_ai_move,
    find_completing_move, winning_line,
};
