//! Turn count invariant: every accepted move fills exactly one cell.

use super::super::session::GameSession;
use super::Invariant;

/// Invariant: `turn_count` equals the number of occupied cells and the
/// length of the move history.
pub struct TurnCountInvariant;

impl Invariant<GameSession> for TurnCountInvariant {
    fn holds(session: &GameSession) -> bool {
        let filled = session.board().occupied_count();
        filled == session.turn_count() && filled == session.history().len()
    }

    fn description() -> &'static str {
        "Turn count matches occupied cells and history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameMode;

    #[test]
    fn test_holds_through_a_game() {
        let mut session = GameSession::new(GameMode::PvP);
        for index in [4, 0, 8, 2, 6] {
            session.place(index).unwrap();
            assert!(TurnCountInvariant::holds(&session));
        }
    }

    #[test]
    fn test_detects_lost_history() {
        let mut session = GameSession::replay(GameMode::PvP, &[4, 0]).unwrap();
        session.history.pop();
        assert!(!TurnCountInvariant::holds(&session));
    }
}
