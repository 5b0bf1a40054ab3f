//! Win detection at both levels of play.

use super::super::geometry::has_winning_line;
use super::super::{GameState, GameStatus, Player, SubGame};
use super::status::evaluate_status;
use tracing::instrument;

/// Checks if `player`'s cells in this sub-game contain a winning line.
#[instrument(skip(sub_game), fields(sub_game = %sub_game.position()))]
pub fn sub_game_won_by(sub_game: &SubGame, player: Player) -> bool {
    has_winning_line(sub_game.cells_played_by(player))
}

/// Checks if the sub-games won by `player` contain a winning line.
#[instrument(skip(state))]
pub fn match_won_by(state: &GameState, player: Player) -> bool {
    has_winning_line(state.sub_games_won_by(player))
}

/// Status of a sub-game right after `mover` played into it.
#[instrument(skip(sub_game), fields(sub_game = %sub_game.position()))]
pub fn sub_game_status(sub_game: &SubGame, mover: Player) -> GameStatus {
    evaluate_status(mover, sub_game.empty_count(), |p| sub_game_won_by(sub_game, p))
}

/// Status of the match right after `mover` moved.
///
/// `state` must already hold the post-move sub-games; the result is
/// attributed to `mover`, not to `state.player()`.
#[instrument(skip(state))]
pub fn match_status(state: &GameState, mover: Player) -> GameStatus {
    evaluate_status(mover, state.in_process_count(), |p| match_won_by(state, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use crate::types::fixtures::{fill, settle};

    #[test]
    fn test_no_winner_empty_sub_game() {
        let sub_game = SubGame::new(Position::CENTER);
        assert!(!sub_game_won_by(&sub_game, Player::X));
        assert_eq!(sub_game_status(&sub_game, Player::X), GameStatus::InProcess);
    }

    #[test]
    fn test_winner_top_row() {
        let sub_game = fill(
            &SubGame::new(Position::CENTER),
            Player::X,
            &[Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
        );
        assert!(sub_game_won_by(&sub_game, Player::X));
        assert!(!sub_game_won_by(&sub_game, Player::O));
        assert_eq!(sub_game_status(&sub_game, Player::X), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_winner_needs_own_cells() {
        let sub_game = fill(
            &SubGame::new(Position::CENTER),
            Player::X,
            &[Position::TOP_LEFT, Position::TOP_CENTER],
        );
        let sub_game = fill(&sub_game, Player::O, &[Position::TOP_RIGHT]);
        assert!(!sub_game_won_by(&sub_game, Player::X));
        assert_eq!(sub_game_status(&sub_game, Player::O), GameStatus::InProcess);
    }

    #[test]
    fn test_full_sub_game_without_line_ties() {
        // X O X / O X X / O X O
        let sub_game = fill(
            &SubGame::new(Position::TOP_LEFT),
            Player::X,
            &[
                Position::TOP_LEFT,
                Position::TOP_RIGHT,
                Position::CENTER,
                Position::CENTER_RIGHT,
                Position::BOTTOM_CENTER,
            ],
        );
        let sub_game = fill(
            &sub_game,
            Player::O,
            &[
                Position::TOP_CENTER,
                Position::CENTER_LEFT,
                Position::BOTTOM_LEFT,
                Position::BOTTOM_RIGHT,
            ],
        );
        assert_eq!(sub_game.empty_count(), 0);
        assert_eq!(sub_game_status(&sub_game, Player::X), GameStatus::Tie);
        assert_eq!(sub_game_status(&sub_game, Player::O), GameStatus::Tie);
    }

    #[test]
    fn test_match_won_by_line_of_sub_games() {
        let state = GameState::new();
        let state = settle(&state, Position::TOP_RIGHT, GameStatus::Won(Player::O));
        let state = settle(&state, Position::CENTER, GameStatus::Won(Player::O));
        assert!(!match_won_by(&state, Player::O));

        let state = settle(&state, Position::BOTTOM_LEFT, GameStatus::Won(Player::O));
        assert!(match_won_by(&state, Player::O));
        assert_eq!(match_status(&state, Player::O), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_tied_sub_games_count_for_nobody() {
        let state = GameState::new();
        let state = settle(&state, Position::TOP_LEFT, GameStatus::Won(Player::X));
        let state = settle(&state, Position::TOP_CENTER, GameStatus::Tie);
        let state = settle(&state, Position::TOP_RIGHT, GameStatus::Won(Player::X));
        assert!(!match_won_by(&state, Player::X));
        assert_eq!(match_status(&state, Player::X), GameStatus::InProcess);
    }

    #[test]
    fn test_match_tie_when_every_sub_game_is_settled() {
        // X X O / O O X / X O X at sub-game level, no line for anyone
        let results = [
            (Position::TOP_LEFT, GameStatus::Won(Player::X)),
            (Position::TOP_CENTER, GameStatus::Won(Player::X)),
            (Position::TOP_RIGHT, GameStatus::Won(Player::O)),
            (Position::CENTER_LEFT, GameStatus::Won(Player::O)),
            (Position::CENTER, GameStatus::Won(Player::O)),
            (Position::CENTER_RIGHT, GameStatus::Won(Player::X)),
            (Position::BOTTOM_LEFT, GameStatus::Won(Player::X)),
            (Position::BOTTOM_CENTER, GameStatus::Tie),
            (Position::BOTTOM_RIGHT, GameStatus::Won(Player::X)),
        ];
        let state = results
            .iter()
            .fold(GameState::new(), |state, (pos, status)| settle(&state, *pos, *status));
        assert_eq!(match_status(&state, Player::X), GameStatus::Tie);
        assert_eq!(match_status(&state, Player::O), GameStatus::Tie);
    }

    #[test]
    fn test_match_result_is_attributed_to_mover_only() {
        let state = GameState::new();
        let state = settle(&state, Position::TOP_LEFT, GameStatus::Won(Player::X));
        let state = settle(&state, Position::CENTER_LEFT, GameStatus::Won(Player::X));
        let state = settle(&state, Position::BOTTOM_LEFT, GameStatus::Won(Player::X));
        assert_eq!(match_status(&state, Player::O), GameStatus::InProcess);
    }
}
