//! Alternating turn invariant: X moves first, then players alternate.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the mark counts match whose turn it is.
///
/// X moves first, so X has played exactly as often as O when X is to
/// move, and exactly once more when O is to move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let count = |player: Player| -> usize {
            state
                .sub_games()
                .iter()
                .map(|sg| sg.cells_played_by(player).len())
                .sum()
        };
        let (x, o) = (count(Player::X), count(Player::O));

        match state.player() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
