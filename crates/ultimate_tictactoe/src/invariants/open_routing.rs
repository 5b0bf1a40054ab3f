//! Open routing invariant: players are never sent into a finished sub-game.

use super::super::GameState;
use super::Invariant;

/// Invariant: a forced sub-game is always still in process.
///
/// When the cell just played points at a finished sub-game, the engine
/// frees the next player instead of forcing them there.
pub struct OpenRoutingInvariant;

impl Invariant<GameState> for OpenRoutingInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .current_sub_game()
            .is_none_or(|pos| state.sub_game(pos).is_in_process())
    }

    fn description() -> &'static str {
        "Routing only forces play into an in-process sub-game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::{settle, turn};
    use crate::{GameStatus, Player, Position};

    #[test]
    fn test_free_choice_holds() {
        assert!(OpenRoutingInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_forced_into_open_sub_game_holds() {
        let state = turn(GameState::new(), Some(Position::TOP_RIGHT), Player::O);
        assert!(OpenRoutingInvariant::holds(&state));
    }

    #[test]
    fn test_forced_into_finished_sub_game_violates() {
        let state = settle(&GameState::new(), Position::TOP_RIGHT, GameStatus::Tie);
        let state = turn(state, Some(Position::TOP_RIGHT), Player::O);
        assert!(!OpenRoutingInvariant::holds(&state));
    }
}
