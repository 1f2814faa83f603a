//! Render-ready view of the engine state.

use super::outcome::Outcome;
use super::session::GameSession;
use super::types::{Board, CELL_COUNT, GameMode, Player, Square};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw the game.
///
/// Produced after every state change; owns its data so callers can keep
/// it around while the engine moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Selected mode, `None` while awaiting mode selection.
    pub mode: Option<GameMode>,
    /// Cells in row-major order.
    pub board: [Square; CELL_COUNT],
    /// Player to move (the last mover once the game is over).
    pub current_player: Player,
    /// Game status.
    pub outcome: Outcome,
    /// Number of accepted moves.
    pub turn_count: usize,
    /// True while an AI move is pending; user moves are refused meanwhile.
    pub is_ai_thinking: bool,
    /// The completed line of a won game.
    pub winning_line: Option<[usize; 3]>,
    /// Accepted cell indices in play order.
    pub history: Vec<usize>,
}

impl Snapshot {
    /// The view shown before any mode has been picked.
    pub fn awaiting_mode() -> Self {
        Self {
            mode: None,
            board: *Board::new().squares(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            turn_count: 0,
            is_ai_thinking: false,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Captures a session.
    pub fn from_session(session: &GameSession, is_ai_thinking: bool) -> Self {
        Self {
            mode: Some(session.mode()),
            board: *session.board().squares(),
            current_player: session.current_player(),
            outcome: session.outcome(),
            turn_count: session.turn_count(),
            is_ai_thinking,
            winning_line: session.winning_line(),
            history: session.history().to_vec(),
        }
    }

    /// Rebuilds the board value.
    pub fn board(&self) -> Board {
        Board::from_squares(self.board)
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        match (self.mode, self.outcome) {
            (None, _) => "Select a mode: pvp or pvai".to_string(),
            (Some(_), Outcome::Won(player)) => format!("Game over. Player {} wins!", player),
            (Some(_), Outcome::Draw) => "Game over. Draw!".to_string(),
            (Some(_), Outcome::InProgress) if self.is_ai_thinking => {
                "AI is thinking...".to_string()
            }
            (Some(_), Outcome::InProgress) => {
                format!("Player {} to move.", self.current_player)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awaiting_mode_is_blank() {
        let snapshot = Snapshot::awaiting_mode();
        assert_eq!(snapshot.mode, None);
        assert!(snapshot.board.iter().all(|s| *s == Square::Empty));
        assert_eq!(snapshot.status_line(), "Select a mode: pvp or pvai");
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let session = GameSession::replay(GameMode::PvAI, &[4]).unwrap();
        let snapshot = Snapshot::from_session(&session, true);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["mode"], "pvai");
        assert_eq!(json["turn_count"], 1);
        assert_eq!(json["is_ai_thinking"], true);
        assert_eq!(json["board"][4]["Occupied"], "X");
        assert_eq!(json["outcome"], "InProgress");
    }
}
