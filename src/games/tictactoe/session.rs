//! The game session: everything that changes while a game is played.

use super::action::Rejection;
use super::outcome::Outcome;
use super::rules::{check_draw, winning_line};
use super::types::{Board, GameMode, Player, Square};
use tracing::{debug, instrument};

/// One game from empty board to terminal outcome.
///
/// Created when a mode is selected and replaced wholesale on restart or
/// mode change. [`GameSession::place`] is the only mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) mode: GameMode,
    pub(crate) outcome: Outcome,
    pub(crate) turn_count: usize,
    pub(crate) history: Vec<usize>,
    pub(crate) winning_line: Option<[usize; 3]>,
}

impl GameSession {
    /// Creates a fresh session: empty board, X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            outcome: Outcome::InProgress,
            turn_count: 0,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the mover of the last turn once terminal).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the mode this session was started in.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the number of accepted moves.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Returns accepted cell indices in play order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the completed line once the game is won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// True when the AI owns the player to move and the game is live.
    pub fn is_ai_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.mode.ai_player() == Some(self.current_player)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Win detection runs before draw detection, so a full board with a
    /// completed line is reported as won. The turn passes to the opponent
    /// only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] for a finished game, an index outside
    /// 0-8, or an occupied cell. The session is unchanged in that case.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turn_count))]
    pub fn place(&mut self, index: usize) -> Result<Outcome, Rejection> {
        if self.outcome.is_terminal() {
            return Err(Rejection::GameOver);
        }
        match self.board.get(index) {
            None => return Err(Rejection::InvalidIndex(index)),
            Some(Square::Occupied(_)) => return Err(Rejection::CellOccupied(index)),
            Some(Square::Empty) => {}
        }

        self.board.set(index, Square::Occupied(self.current_player))?;
        self.turn_count += 1;
        self.history.push(index);

        if let Some((winner, line)) = winning_line(&self.board) {
            debug!(%winner, ?line, "Line completed");
            self.outcome = Outcome::Won(winner);
            self.winning_line = Some(line);
        } else if check_draw(&self.board) {
            debug!("Board full without a line");
            self.outcome = Outcome::Draw;
        } else {
            self.current_player = self.current_player.opponent();
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(self.outcome)
    }

    /// Panics in debug builds if a session invariant is broken.
    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            for violation in &violations {
                tracing::warn!(description = %violation.description, "Session invariant violated");
            }
            panic!("{} session invariant(s) violated", violations.len());
        }
    }

    /// Rebuilds a session by playing `moves` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Stops at the first move [`GameSession::place`] refuses.
    #[instrument]
    pub fn replay(mode: GameMode, moves: &[usize]) -> Result<Self, Rejection> {
        let mut session = Self::new(mode);
        for &index in moves {
            session.place(index)?;
        }
        Ok(session)
    }
}
