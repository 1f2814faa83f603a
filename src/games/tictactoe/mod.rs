//! Tic-tac-toe: board, rules, session, AI and the engine that ties them together.

mod action;
mod ai;
mod engine;
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) mod invariants;
mod outcome;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{MoveStatus, Rejection};
pub use ai::{HeuristicAi, Strategy, compute_ai_move, find_completing_move};
pub use engine::{EngineState, GameEngine};
pub use outcome::Outcome;
pub use rules::{WINNING_LINES, check_draw, check_winner, winning_line};
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use types::{Board, CELL_COUNT, GameMode, Player, Square};
