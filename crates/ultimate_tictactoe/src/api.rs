//! The four entry points callers build on.

use super::action::Move;
use super::engine::{self, MoveResult};
use super::geometry::Position;
use super::types::{Cell, GameState, SubGame};
use tracing::instrument;

/// Starts a match: all cells empty, free choice, X to move.
#[instrument]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Plays `cell` inside the sub-game at `sub_game` for the player to move.
#[instrument(skip(state))]
pub fn player_move(sub_game: Position, cell: Position, state: &GameState) -> MoveResult {
    engine::play(state, Move::new(sub_game, cell))
}

/// Looks up a cell by sub-game and cell coordinate.
#[instrument(skip(state))]
pub fn get_cell(sub_game: Position, cell: Position, state: &GameState) -> Cell {
    *state.cell(sub_game, cell)
}

/// Looks up a sub-game by coordinate.
#[instrument(skip(state))]
pub fn get_sub_game(sub_game: Position, state: &GameState) -> &SubGame {
    state.sub_game(sub_game)
}
