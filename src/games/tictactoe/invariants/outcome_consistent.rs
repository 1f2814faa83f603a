//! Outcome consistency invariant.

use super::super::outcome::Outcome;
use super::super::rules::{WINNING_LINES, check_draw, check_winner};
use super::super::session::GameSession;
use super::super::{Board, Player, Square};
use super::Invariant;

/// Invariant: the recorded outcome is the one the board shows, and at most
/// one player owns a completed line.
pub struct OutcomeConsistentInvariant;

fn owns_a_line(board: &Board, player: Player) -> bool {
    WINNING_LINES.iter().any(|line| {
        line.iter()
            .all(|&i| board.get(i) == Some(Square::Occupied(player)))
    })
}

impl Invariant<GameSession> for OutcomeConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        if owns_a_line(board, Player::X) && owns_a_line(board, Player::O) {
            return false;
        }
        match session.outcome() {
            Outcome::Won(player) => {
                check_winner(board) == Some(player) && session.winning_line().is_some()
            }
            Outcome::Draw => check_draw(board),
            Outcome::InProgress => check_winner(board).is_none() && !check_draw(board),
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board and at most one player has a line"
    }
}
