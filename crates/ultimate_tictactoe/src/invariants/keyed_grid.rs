//! Keyed grid invariant: every array slot holds the entry for its own position.

use super::super::{GameState, Position};
use super::Invariant;

/// Invariant: sub-games and cells sit at the index of their position.
///
/// Lookups index arrays by position, so a misplaced entry would make
/// them silently answer for the wrong coordinate.
pub struct KeyedGridInvariant;

impl Invariant<GameState> for KeyedGridInvariant {
    fn holds(state: &GameState) -> bool {
        state.sub_games().iter().zip(Position::ALL).all(|(sub_game, pos)| {
            sub_game.position() == pos
                && sub_game
                    .cells()
                    .iter()
                    .zip(Position::ALL)
                    .all(|(cell, cell_pos)| cell.position() == cell_pos)
        })
    }

    fn description() -> &'static str {
        "Every sub-game and cell is stored at its own position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::{cells_mut, sub_games_mut};

    #[test]
    fn test_new_game_holds() {
        assert!(KeyedGridInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_swapped_sub_games_violate() {
        let mut state = GameState::new();
        sub_games_mut(&mut state).swap(2, 6);
        assert!(!KeyedGridInvariant::holds(&state));
    }

    #[test]
    fn test_swapped_cells_violate() {
        let mut state = GameState::new();
        cells_mut(&mut sub_games_mut(&mut state)[8]).swap(0, 3);
        assert!(!KeyedGridInvariant::holds(&state));
    }
}
