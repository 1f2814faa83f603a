//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and testable on their own.

use super::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn push_if_broken<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        push_if_broken::<S, I1>(state, &mut violations);
        push_if_broken::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        push_if_broken::<S, I1>(state, &mut violations);
        push_if_broken::<S, I2>(state, &mut violations);
        push_if_broken::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod outcome_consistent;
pub mod turn_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use turn_count::TurnCountInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    TurnCountInvariant,
    AlternatingTurnInvariant,
    OutcomeConsistentInvariant,
);
