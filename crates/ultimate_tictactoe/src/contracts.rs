//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, InvariantViolation, UltimateInvariants};
use super::types::{CellState, GameState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, action, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target sub-game must still be in process.
pub struct SubGameInProcess;

impl SubGameInProcess {
    /// Rejects moves into a won or tied sub-game.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.sub_game(mov.sub_game).is_in_process() {
            Ok(())
        } else {
            Err(MoveError::SubGameFinished(mov.sub_game))
        }
    }
}

/// Precondition: the move must target the sub-game routing forces, if any.
pub struct RoutedSubGame;

impl RoutedSubGame {
    /// Rejects moves outside the forced sub-game.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        match state.current_sub_game() {
            Some(required) if required != mov.sub_game => Err(MoveError::WrongSubGame {
                required,
                attempted: mov.sub_game,
            }),
            _ => Ok(()),
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto a claimed cell.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        match state.cell(mov.sub_game, mov.cell).status() {
            CellState::Empty => Ok(()),
            CellState::Played(owner) => Err(MoveError::CellOccupied {
                sub_game: mov.sub_game,
                cell: mov.cell,
                owner,
            }),
        }
    }
}

/// Composite precondition: sub-game open, routing honoured, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, reporting the first failure.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        SubGameInProcess::check(mov, state)?;
        RoutedSubGame::check(mov, state)?;
        CellIsEmpty::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Target sub-game is in process
/// - Routing is honoured
/// - Target cell is empty
///
/// Postconditions:
/// - Exactly the target cell changed, to the mover's mark
/// - Every [`UltimateInvariants`] member that held before still holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, action: &Move, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        // Only violations the move introduced count; a caller may hand in a
        // state that was already broken (e.g. deserialized from elsewhere).
        let inherited = UltimateInvariants::check_all(before).err().unwrap_or_default();
        let mut violations: Vec<InvariantViolation> = UltimateInvariants::check_all(after)
            .err()
            .unwrap_or_default()
            .into_iter()
            .filter(|v| !inherited.contains(v))
            .collect();

        if !SingleCellPlayed::holds(before, action, after) {
            violations.push(InvariantViolation::new(SingleCellPlayed::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Properties
// ─────────────────────────────────────────────────────────────

/// Transition property: a move changes exactly one cell, from empty to the mover's mark.
pub struct SingleCellPlayed;

impl SingleCellPlayed {
    /// Checks the before/after pair cell by cell.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, action: &Move, after: &GameState) -> bool {
        let mut changed = 0;

        for (sg_before, sg_after) in before.sub_games().iter().zip(after.sub_games()) {
            for (cell_before, cell_after) in sg_before.cells().iter().zip(sg_after.cells()) {
                if cell_before == cell_after {
                    continue;
                }
                changed += 1;
                let expected = sg_before.position() == action.sub_game
                    && cell_before.position() == action.cell
                    && cell_before.is_empty()
                    && cell_after.is_played_by(before.player());
                if !expected {
                    warn!(
                        sub_game = %sg_before.position(),
                        cell = %cell_before.position(),
                        "Unexpected cell change"
                    );
                    return false;
                }
            }
        }

        changed == 1
    }

    /// Human-readable description of the property.
    pub fn description() -> &'static str {
        "A move changes exactly the target cell, from empty to the mover's mark"
    }
}

/// Panics if a transition broke its postcondition.
///
/// Only compiled into debug builds; release builds trust the engine.
#[cfg(debug_assertions)]
#[instrument(skip(before, after))]
pub(crate) fn assert_postconditions(before: &GameState, action: &Move, after: &GameState) {
    if let Err(violations) = MoveContract::post(before, action, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Postcondition failed after {}: {}", action, descriptions);
    }
}
