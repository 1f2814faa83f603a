//! Alternating turn invariant: X, O, X, O, ...

use super::super::session::GameSession;
use super::super::{Player, Square};
use super::Invariant;

/// Invariant: players alternate, X first.
///
/// Every even history entry holds X and every odd one holds O. While the
/// game is live, X is to move exactly when an even number of moves were made.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let xs = board.count(Player::X);
        let os = board.count(Player::O);
        if xs != os && xs != os + 1 {
            return false;
        }

        let history_alternates = session.history().iter().enumerate().all(|(turn, &index)| {
            let expected = if turn % 2 == 0 { Player::X } else { Player::O };
            board.get(index) == Some(Square::Occupied(expected))
        });
        if !history_alternates {
            return false;
        }

        if session.outcome().is_terminal() {
            return true;
        }
        let expected_next = if session.turn_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        session.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameMode;

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new(GameMode::PvP)));
    }

    #[test]
    fn test_sequence_holds() {
        let session = GameSession::replay(GameMode::PvP, &[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut session = GameSession::replay(GameMode::PvP, &[0]).unwrap();
        session.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
