//! Tests for the initial match state and the lookup facade.

use ultimate_tictactoe::{
    CellState, GameState, GameStatus, Player, Position, get_cell, get_sub_game, new_game,
};

#[test]
fn test_new_game_every_cell_empty() {
    let state = new_game();
    for sub_game in Position::ALL {
        for cell in Position::ALL {
            let found = get_cell(sub_game, cell, &state);
            assert_eq!(found.status(), CellState::Empty);
            assert_eq!(found.position(), cell);
        }
    }
}

#[test]
fn test_new_game_every_sub_game_in_process() {
    let state = new_game();
    for pos in Position::ALL {
        let sub_game = get_sub_game(pos, &state);
        assert_eq!(sub_game.status(), GameStatus::InProcess);
        assert_eq!(sub_game.position(), pos);
        assert_eq!(sub_game.empty_count(), 9);
    }
}

#[test]
fn test_new_game_free_choice_for_x() {
    let state = new_game();
    assert_eq!(state.current_sub_game(), None);
    assert_eq!(state.player(), Player::X);
    assert_eq!(state.status(), GameStatus::InProcess);
    assert_eq!(state.legal_moves().len(), 81);
}

#[test]
fn test_new_game_matches_default() {
    assert_eq!(new_game(), GameState::default());
}
