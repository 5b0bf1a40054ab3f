//! Settled status invariant: each sub-game's status agrees with its cells.

use super::super::geometry::has_winning_line;
use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: a sub-game's stored status is the one its cells imply.
///
/// - `InProcess`: nobody has a line and some cell is empty.
/// - `Won(p)`: `p` has a line.
/// - `Tie`: every cell is played and nobody has a line.
pub struct SettledStatusInvariant;

impl Invariant<GameState> for SettledStatusInvariant {
    fn holds(state: &GameState) -> bool {
        state.sub_games().iter().all(|sg| {
            let line = |p: Player| has_winning_line(sg.cells_played_by(p));
            let nobody = !line(Player::X) && !line(Player::O);

            match sg.status() {
                GameStatus::InProcess => nobody && sg.empty_count() > 0,
                GameStatus::Won(player) => line(player),
                GameStatus::Tie => nobody && sg.empty_count() == 0,
            }
        })
    }

    fn description() -> &'static str {
        "Sub-game status matches its cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use crate::types::fixtures::{fill, settle};

    #[test]
    fn test_new_game_holds() {
        assert!(SettledStatusInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_unearned_win_violates() {
        let state = settle(&GameState::new(), Position::CENTER, GameStatus::Won(Player::O));
        assert!(!SettledStatusInvariant::holds(&state));
    }

    #[test]
    fn test_unrecorded_line_violates() {
        let state = GameState::new();
        let sub_game = fill(
            state.sub_game(Position::CENTER),
            Player::X,
            &[Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
        );
        let state = state.with_sub_game(sub_game);
        assert!(!SettledStatusInvariant::holds(&state));
    }

    #[test]
    fn test_recorded_line_holds() {
        let state = GameState::new();
        let sub_game = fill(
            state.sub_game(Position::CENTER),
            Player::X,
            &[Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
        );
        let state = settle(&state.with_sub_game(sub_game), Position::CENTER, GameStatus::Won(Player::X));
        assert!(SettledStatusInvariant::holds(&state));
    }
}
