//! First-class move types for ultimate tic-tac-toe.
//!
//! A move names a sub-game and a cell inside it. The player is implied by
//! the state the move is applied to, so a move can be validated or parsed
//! independently of who makes it.

use super::geometry::{Position, PositionParseError};
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A move: play `cell` inside the sub-game at `sub_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Sub-game being played into.
    pub sub_game: Position,
    /// Cell within that sub-game.
    pub cell: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.sub_game, self.cell)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target sub-game already has a result.
    #[display("Sub-game {} is already finished", _0)]
    SubGameFinished(Position),

    /// Routing forces a different sub-game.
    #[display("Must play in sub-game {}, not {}", required, attempted)]
    WrongSubGame {
        /// Sub-game the player is sent to.
        required: Position,
        /// Sub-game the move targeted.
        attempted: Position,
    },

    /// The target cell is already claimed.
    #[display("Cell {} of sub-game {} is already taken by {}", cell, sub_game, owner)]
    CellOccupied {
        /// Sub-game of the cell.
        sub_game: Position,
        /// The claimed cell.
        cell: Position,
        /// Who claimed it.
        owner: Player,
    },
}

impl std::error::Error for MoveError {}

/// Text that does not describe a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveParseError {
    /// Expected exactly two position tokens.
    #[display("Expected `<sub-game> <cell>`, got {} token(s)", _0)]
    TokenCount(usize),

    /// One of the tokens is not a position.
    #[display("{}", _0)]
    Position(PositionParseError),
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::TokenCount(_) => None,
            MoveParseError::Position(err) => Some(err),
        }
    }
}

impl From<PositionParseError> for MoveParseError {
    fn from(err: PositionParseError) -> Self {
        MoveParseError::Position(err)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses two whitespace- or slash-separated positions, e.g. `c tl` or `5/1`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '/' || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [sub_game, cell] => Ok(Move::new(sub_game.parse()?, cell.parse()?)),
            other => Err(MoveParseError::TokenCount(other.len())),
        }
    }
}
