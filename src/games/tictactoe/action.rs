//! Results of user intents sent to the engine.
//!
//! Illegal input is never an error: the engine answers with a
//! [`Rejection`] and leaves the session untouched.

use super::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The index does not name a cell (valid range is 0-8).
    #[display("Cell {} is not on the board", _0)]
    InvalidIndex(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The AI has a move pending.
    #[display("The AI is thinking")]
    AiBusy,

    /// No mode has been selected yet.
    #[display("No game in progress, select a mode first")]
    NoSession,

    /// An AI turn was requested but none is due.
    #[display("No AI move is pending")]
    NoPendingAiTurn,
}

/// Answer to a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStatus {
    /// The move was applied; carries the state after it.
    Accepted(Snapshot),
    /// The move was refused; nothing changed.
    Rejected(Rejection),
}

impl MoveStatus {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveStatus::Accepted(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveStatus::Accepted(_) => None,
            MoveStatus::Rejected(reason) => Some(*reason),
        }
    }

    /// Returns the post-move snapshot, if accepted.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            MoveStatus::Accepted(snapshot) => Some(snapshot),
            MoveStatus::Rejected(_) => None,
        }
    }
}
