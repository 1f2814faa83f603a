//! The game engine: sole owner and mutator of the game session.
//!
//! A presentation layer forwards user intents to the engine and renders the
//! [`Snapshot`] it gets back. The engine is synchronous. When the AI is due
//! to move, the engine enters [`EngineState::AiThinking`] and refuses user
//! moves until the caller runs [`GameEngine::play_ai_turn`], typically after
//! a cosmetic delay of its own.

use super::action::{MoveStatus, Rejection};
use super::ai::HeuristicAi;
use super::outcome::Outcome;
use super::session::GameSession;
use super::snapshot::Snapshot;
use super::types::{GameMode, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the engine is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// No mode selected; no session exists.
    AwaitingMode,
    /// Waiting for the given player's move.
    InProgress(Player),
    /// An AI move is pending; user moves are refused.
    AiThinking,
    /// Terminal: a player won.
    Won(Player),
    /// Terminal: full board, no line.
    Draw,
}

/// Tic-tac-toe engine for human-vs-human and human-vs-AI play.
#[derive(Debug, Clone)]
pub struct GameEngine {
    session: Option<GameSession>,
    ai_pending: bool,
    ai: HeuristicAi,
}

impl GameEngine {
    /// Creates an engine awaiting mode selection, with an entropy-seeded AI.
    #[instrument]
    pub fn new() -> Self {
        Self::with_ai(HeuristicAi::from_entropy())
    }

    /// Creates an engine awaiting mode selection that uses `ai` for O in
    /// PvAI games.
    #[instrument(skip(ai), fields(seed = ?ai.seed()))]
    pub fn with_ai(ai: HeuristicAi) -> Self {
        Self {
            session: None,
            ai_pending: false,
            ai,
        }
    }

    /// Returns the current session, if a mode was selected.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Returns true while an AI move is pending.
    pub fn is_ai_thinking(&self) -> bool {
        self.ai_pending
    }

    /// Returns the state machine position.
    pub fn state(&self) -> EngineState {
        match &self.session {
            None => EngineState::AwaitingMode,
            Some(_) if self.ai_pending => EngineState::AiThinking,
            Some(session) => match session.outcome() {
                Outcome::InProgress => EngineState::InProgress(session.current_player()),
                Outcome::Won(player) => EngineState::Won(player),
                Outcome::Draw => EngineState::Draw,
            },
        }
    }

    /// Returns a render-ready view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        match &self.session {
            None => Snapshot::awaiting_mode(),
            Some(session) => Snapshot::from_session(session, self.ai_pending),
        }
    }

    /// Starts a fresh session in `mode`, discarding any current one.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, mode: GameMode) -> Snapshot {
        info!(mode = mode.name(), "Starting new session");
        self.session = Some(GameSession::new(mode));
        self.ai_pending = false;
        self.snapshot()
    }

    /// Applies the current player's move at `index` (0-8).
    ///
    /// Refused without any state change when no session exists, an AI move
    /// is pending, the game is over, the index is off the board, or the
    /// cell is taken, checked in that order. In PvAI mode an accepted move
    /// that hands the turn to O leaves the engine in
    /// [`EngineState::AiThinking`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> MoveStatus {
        let Some(session) = self.session.as_mut() else {
            debug!("Move before mode selection");
            return MoveStatus::Rejected(Rejection::NoSession);
        };
        if self.ai_pending {
            debug!("Move while AI is thinking");
            return MoveStatus::Rejected(Rejection::AiBusy);
        }

        let player = session.current_player();
        match session.place(index) {
            Ok(outcome) => {
                info!(%player, index, %outcome, "Move accepted");
                self.ai_pending = session.is_ai_turn();
                if self.ai_pending {
                    debug!("AI turn pending");
                }
                MoveStatus::Accepted(self.snapshot())
            }
            Err(reason) => {
                debug!(%reason, "Move rejected");
                MoveStatus::Rejected(reason)
            }
        }
    }

    /// Lets the AI make its pending move through the same path as a user move.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> MoveStatus {
        let Some(session) = self.session.as_mut() else {
            return MoveStatus::Rejected(Rejection::NoSession);
        };
        if !self.ai_pending {
            debug!("No AI turn due");
            return MoveStatus::Rejected(Rejection::NoPendingAiTurn);
        }
        self.ai_pending = false;

        let symbol = session.current_player();
        let Some((index, strategy)) = self.ai.choose_move(session.board(), symbol) else {
            warn!("AI asked to move on a full board");
            return MoveStatus::Rejected(Rejection::GameOver);
        };

        match session.place(index) {
            Ok(outcome) => {
                info!(player = %symbol, index, %strategy, %outcome, "AI move applied");
                MoveStatus::Accepted(self.snapshot())
            }
            Err(reason) => {
                warn!(%reason, index, "AI move refused");
                MoveStatus::Rejected(reason)
            }
        }
    }

    /// Replaces the session with a fresh one in the same mode.
    ///
    /// Any pending AI move is dropped with the old session. Before a mode
    /// is chosen this is a no-op.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) -> Snapshot {
        match self.session.as_ref().map(GameSession::mode) {
            Some(mode) => self.start_session(mode),
            None => {
                debug!("Restart before mode selection");
                self.snapshot()
            }
        }
    }

    /// Discards the session and returns to mode selection.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self) -> Snapshot {
        info!("Returning to mode selection");
        self.session = None;
        self.ai_pending = false;
        self.snapshot()
    }

    /// Alias of [`GameEngine::start_session`] named after the UI event.
    pub fn select_mode(&mut self, mode: GameMode) -> Snapshot {
        self.start_session(mode)
    }

    /// Alias of [`GameEngine::apply_move`] named after the UI event.
    pub fn cell_clicked(&mut self, index: usize) -> MoveStatus {
        self.apply_move(index)
    }

    /// Alias of [`GameEngine::reset_session`] named after the UI event.
    pub fn restart(&mut self) -> Snapshot {
        self.reset_session()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn engine() -> GameEngine {
        GameEngine::with_ai(HeuristicAi::with_seed(5))
    }

    #[test]
    fn test_starts_awaiting_mode() {
        let mut engine = engine();
        assert_eq!(engine.state(), EngineState::AwaitingMode);
        assert_eq!(
            engine.apply_move(0),
            MoveStatus::Rejected(Rejection::NoSession)
        );
        assert_eq!(engine.snapshot(), Snapshot::awaiting_mode());
    }

    #[test]
    fn test_pvp_turns_alternate() {
        let mut engine = engine();
        engine.start_session(GameMode::PvP);
        assert_eq!(engine.state(), EngineState::InProgress(Player::X));
        assert!(engine.apply_move(4).is_accepted());
        assert_eq!(engine.state(), EngineState::InProgress(Player::O));
        assert!(!engine.is_ai_thinking());
    }

    #[test]
    fn test_pvai_enters_ai_thinking_and_blocks_input() {
        let mut engine = engine();
        engine.start_session(GameMode::PvAI);
        let status = engine.apply_move(0);
        assert!(status.snapshot().is_some_and(|s| s.is_ai_thinking));
        assert_eq!(engine.state(), EngineState::AiThinking);

        let before = engine.snapshot();
        assert_eq!(engine.apply_move(1), MoveStatus::Rejected(Rejection::AiBusy));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_ai_turn_takes_center_after_corner() {
        let mut engine = engine();
        engine.start_session(GameMode::PvAI);
        engine.apply_move(0);
        let status = engine.play_ai_turn();
        let snapshot = status.snapshot().cloned().unwrap();
        assert_eq!(snapshot.board[4], Square::Occupied(Player::O));
        assert_eq!(snapshot.turn_count, 2);
        assert!(!snapshot.is_ai_thinking);
        assert_eq!(engine.state(), EngineState::InProgress(Player::X));
    }

    #[test]
    fn test_ai_turn_without_pending_move_rejected() {
        let mut engine = engine();
        engine.start_session(GameMode::PvAI);
        assert_eq!(
            engine.play_ai_turn(),
            MoveStatus::Rejected(Rejection::NoPendingAiTurn)
        );
        assert_eq!(engine.snapshot().turn_count, 0);
    }

    #[test]
    fn test_reset_keeps_mode_and_drops_pending_ai() {
        let mut engine = engine();
        engine.start_session(GameMode::PvAI);
        engine.apply_move(0);
        let snapshot = engine.reset_session();
        assert_eq!(snapshot.mode, Some(GameMode::PvAI));
        assert_eq!(snapshot.turn_count, 0);
        assert!(!snapshot.is_ai_thinking);
        assert_eq!(
            engine.play_ai_turn(),
            MoveStatus::Rejected(Rejection::NoPendingAiTurn)
        );
    }

    #[test]
    fn test_change_mode_returns_to_awaiting() {
        let mut engine = engine();
        engine.start_session(GameMode::PvP);
        engine.apply_move(4);
        assert_eq!(engine.change_mode(), Snapshot::awaiting_mode());
        assert_eq!(engine.state(), EngineState::AwaitingMode);
    }

    #[test]
    fn test_reset_before_mode_is_noop() {
        let mut engine = engine();
        assert_eq!(engine.reset_session(), Snapshot::awaiting_mode());
    }
}
