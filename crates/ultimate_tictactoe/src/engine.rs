//! The state transition: validate a move, apply it, route the next turn.
//!
//! States are plain [`GameState`] values and [`play`] is the only
//! transition. The input state is never modified; a rejected move hands
//! back an equal copy inside [`MoveResult::InvalidMove`].

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::geometry::Position;
use super::rules;
use super::types::{Cell, GameState, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of attempting a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move broke a rule; carries the unchanged state.
    InvalidMove(GameState),
    /// The move was applied and the match goes on.
    State(GameState),
    /// The move was applied and won the match for the given player.
    GameWon(GameState, Player),
    /// The move was applied and the match is tied.
    TieGame(GameState),
}

impl MoveResult {
    /// Returns the carried state.
    pub fn state(&self) -> &GameState {
        match self {
            MoveResult::InvalidMove(state)
            | MoveResult::State(state)
            | MoveResult::GameWon(state, _)
            | MoveResult::TieGame(state) => state,
        }
    }

    /// Consumes the result, returning the carried state.
    pub fn into_state(self) -> GameState {
        match self {
            MoveResult::InvalidMove(state)
            | MoveResult::State(state)
            | MoveResult::GameWon(state, _)
            | MoveResult::TieGame(state) => state,
        }
    }

    /// Returns the match winner if this move won it.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MoveResult::GameWon(_, player) => Some(*player),
            MoveResult::InvalidMove(_) | MoveResult::State(_) | MoveResult::TieGame(_) => None,
        }
    }

    /// Checks if the move was applied.
    pub fn is_valid(&self) -> bool {
        !matches!(self, MoveResult::InvalidMove(_))
    }

    /// Checks if the match is over; callers should stop issuing moves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::GameWon(..) | MoveResult::TieGame(_))
    }
}

/// Checks a move against the rules without applying it.
///
/// # Errors
///
/// Returns the first broken rule: finished sub-game, wrong sub-game, or
/// occupied cell.
#[instrument(skip(state), fields(player = %state.player()))]
pub fn check_move(state: &GameState, mv: Move) -> Result<(), MoveError> {
    MoveContract::pre(state, &mv)
}

/// Attempts a move for the player whose turn it is.
///
/// Does not refuse to continue a decided match: callers must treat
/// [`MoveResult::GameWon`] and [`MoveResult::TieGame`] as terminal.
#[instrument(skip(state), fields(player = %state.player(), forced = ?state.current_sub_game()))]
pub fn play(state: &GameState, mv: Move) -> MoveResult {
    match check_move(state, mv) {
        Ok(()) => apply(state, mv),
        Err(error) => {
            debug!(%error, "Rejected move");
            MoveResult::InvalidMove(state.clone())
        }
    }
}

/// Applies a validated move.
fn apply(state: &GameState, mv: Move) -> MoveResult {
    let mover = state.player();

    let sub_game = state.sub_game(mv.sub_game).with_cell(Cell::played(mv.cell, mover));
    let status = rules::sub_game_status(&sub_game, mover);
    if status.is_finished() {
        debug!(sub_game = %mv.sub_game, %status, "Sub-game settled");
    }

    let next = state.with_sub_game(sub_game.with_status(status));
    let routed = route(&next, mv.cell);
    let next = next.with_turn(routed, mover.opponent());

    #[cfg(debug_assertions)]
    super::contracts::assert_postconditions(state, &mv, &next);

    match rules::match_status(&next, mover) {
        GameStatus::InProcess => {
            debug!(next = ?routed, "Move applied");
            MoveResult::State(next)
        }
        GameStatus::Won(winner) => {
            info!(%winner, "Match won");
            MoveResult::GameWon(next, winner)
        }
        GameStatus::Tie => {
            info!("Match tied");
            MoveResult::TieGame(next)
        }
    }
}

/// The played cell's coordinate picks the next sub-game, unless that
/// sub-game is already finished, in which case the next player is free.
fn route(state: &GameState, cell: Position) -> Option<Position> {
    state.sub_game(cell).is_in_process().then_some(cell)
}
