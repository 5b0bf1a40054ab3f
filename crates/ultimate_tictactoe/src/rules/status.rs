//! Status calculation shared by sub-games and the match.

use super::super::{GameStatus, Player};
use tracing::instrument;

/// With this many or more entities unclaimed, fewer than 3 have been
/// claimed and no line can be complete yet.
const UNDECIDABLE_FROM: usize = 7;

/// Evaluates a status after `mover` has claimed something.
///
/// `unclaimed` counts empty cells (sub-game) or in-process sub-games
/// (match). `has_won` reports whether a player owns a complete line.
/// Only the mover is asked: nobody else could have just completed a line.
#[instrument(skip(has_won))]
pub fn evaluate_status(mover: Player, unclaimed: usize, has_won: impl Fn(Player) -> bool) -> GameStatus {
    if unclaimed >= UNDECIDABLE_FROM {
        GameStatus::InProcess
    } else if has_won(mover) {
        GameStatus::Won(mover)
    } else if unclaimed == 0 {
        GameStatus::Tie
    } else {
        GameStatus::InProcess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_circuit_skips_win_check() {
        for unclaimed in UNDECIDABLE_FROM..=9 {
            let status = evaluate_status(Player::X, unclaimed, |_| panic!("win check must be skipped"));
            assert_eq!(status, GameStatus::InProcess);
        }
    }

    #[test]
    fn test_short_circuit_agrees_with_full_evaluation() {
        // Fewer than 3 claims can never hold a line, so asking anyway changes nothing
        let status = evaluate_status(Player::O, UNDECIDABLE_FROM, |_| false);
        assert_eq!(status, GameStatus::InProcess);
    }

    #[test]
    fn test_win_for_mover() {
        assert_eq!(evaluate_status(Player::O, 4, |p| p == Player::O), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_only_mover_is_asked() {
        assert_eq!(evaluate_status(Player::X, 3, |p| p == Player::O), GameStatus::InProcess);
    }

    #[test]
    fn test_win_beats_tie_on_last_claim() {
        assert_eq!(evaluate_status(Player::X, 0, |_| true), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_tie_when_nothing_left() {
        assert_eq!(evaluate_status(Player::X, 0, |_| false), GameStatus::Tie);
    }

    #[test]
    fn test_in_process_otherwise() {
        for unclaimed in 1..UNDECIDABLE_FROM {
            assert_eq!(evaluate_status(Player::X, unclaimed, |_| false), GameStatus::InProcess);
        }
    }
}
