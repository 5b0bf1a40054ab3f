//! First-class invariants for ultimate tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every state the
//! engine produces. They are checked as postconditions in debug builds and
//! can be tested independently.

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

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants so sets compose by type.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
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
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod keyed_grid;
pub mod open_routing;
pub mod settled_status;

pub use alternating_turn::AlternatingTurnInvariant;
pub use keyed_grid::KeyedGridInvariant;
pub use open_routing::OpenRoutingInvariant;
pub use settled_status::SettledStatusInvariant;

/// All ultimate tic-tac-toe invariants as a composable set.
pub type UltimateInvariants = (
    KeyedGridInvariant,
    AlternatingTurnInvariant,
    SettledStatusInvariant,
    OpenRoutingInvariant,
);
