//! Ultimate tic-tac-toe rules engine.
//!
//! Nine tic-tac-toe sub-games arranged in a 3x3 grid. Winning three
//! sub-games in a line wins the match, and the cell you play picks the
//! sub-game your opponent must play in next.
//!
//! # Architecture
//!
//! - **Geometry**: positions, position sets, the 8 winning lines
//! - **Types**: cells, sub-games, the match state
//! - **Rules**: the status rule shared by sub-games and the match
//! - **Engine**: validation, move application, routing
//! - **Invariants / Contracts**: properties re-checked after every move in debug builds
//!
//! The engine is pure: every operation takes a state by reference and
//! returns a new one. Rendering, input and persistence belong to callers.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{MoveResult, Player, Position, new_game, player_move};
//!
//! let state = new_game();
//! let result = player_move(Position::CENTER, Position::TOP_LEFT, &state);
//!
//! let MoveResult::State(next) = result else { unreachable!() };
//! assert_eq!(next.player(), Player::O);
//! assert_eq!(next.current_sub_game(), Some(Position::TOP_LEFT));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod api;
mod contracts;
mod engine;
mod geometry;
mod query;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Facade
pub use api::{get_cell, get_sub_game, new_game, player_move};

// Crate-level exports - Geometry
pub use geometry::{
    Horizontal, Position, PositionParseError, PositionSet, Vertical, WINNING_LINES,
    has_winning_line, winning_line,
};

// Crate-level exports - Data model
pub use types::{Cell, CellState, GameState, GameStatus, Player, SubGame};

// Crate-level exports - Moves and transitions
pub use action::{Move, MoveError, MoveParseError};
pub use contracts::{
    CellIsEmpty, Contract, LegalMove, MoveContract, RoutedSubGame, SingleCellPlayed,
    SubGameInProcess,
};
pub use engine::{MoveResult, check_move, play};
