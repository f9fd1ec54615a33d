//! First-class invariants for a match in flight.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The controller checks them in debug builds; tests check them
//! directly.

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
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
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
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
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
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod disjoint_history;
pub mod occupancy;

pub use alternating_turn::AlternatingTurnInvariant;
pub use disjoint_history::DisjointHistoryInvariant;
pub use occupancy::OccupancyMatchesHistoryInvariant;

/// All match invariants as a composable set.
pub type MatchInvariants = (
    OccupancyMatchesHistoryInvariant,
    DisjointHistoryInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchController;

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        let controller = MatchController::new();
        assert!(MatchInvariants::check_all(&controller).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut controller = MatchController::new();
        for cell in [0, 4, 8] {
            controller.submit_move(cell).unwrap();
        }
        assert!(MatchInvariants::check_all(&controller).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut controller = MatchController::new();
        controller.submit_move(4).unwrap();

        // Player two claims the same cell behind the board's back.
        controller.player_two.record_move(4);

        let violations = MatchInvariants::check_all(&controller).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let controller = MatchController::new();
        type TwoInvariants = (DisjointHistoryInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&controller).is_ok());
    }
}
