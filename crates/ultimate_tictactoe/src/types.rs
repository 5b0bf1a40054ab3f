//! Core domain types for ultimate tic-tac-toe.
//!
//! Collections keyed by [`Position`] are fixed-length arrays indexed by
//! [`Position::index`], so "exactly 9 entries, one per position" holds by
//! construction. Updates never mutate a value that a caller can see: the
//! `with_*` helpers return a fresh copy with one keyed entry replaced.

use super::geometry::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Nobody has played here yet.
    Empty,
    /// Claimed by a player; never changes again.
    Played(Player),
}

/// A cell of a sub-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    status: CellState,
    position: Position,
}

impl Cell {
    /// Creates an empty cell at `position`.
    pub const fn empty(position: Position) -> Self {
        Self {
            status: CellState::Empty,
            position,
        }
    }

    pub(crate) const fn played(position: Position, player: Player) -> Self {
        Self {
            status: CellState::Played(player),
            position,
        }
    }

    /// Returns what the cell holds.
    pub fn status(&self) -> CellState {
        self.status
    }

    /// Returns the cell's coordinate within its sub-game.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Status of a sub-game or of the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still being played.
    InProcess,
    /// A player completed a line.
    Won(Player),
    /// Nothing left to claim and nobody completed a line.
    Tie,
}

impl GameStatus {
    /// Checks if play can continue.
    pub fn is_in_process(self) -> bool {
        matches!(self, GameStatus::InProcess)
    }

    /// Checks if the status is terminal (won or tied).
    pub fn is_finished(self) -> bool {
        !self.is_in_process()
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProcess | GameStatus::Tie => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProcess => write!(f, "in process"),
            GameStatus::Won(player) => write!(f, "won by {}", player),
            GameStatus::Tie => write!(f, "tie"),
        }
    }
}

/// One of the nine ordinary 3x3 boards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubGame {
    status: GameStatus,
    position: Position,
    cells: [Cell; 9],
}

impl SubGame {
    /// Creates an empty, in-process sub-game located at `position` in the match.
    pub fn new(position: Position) -> Self {
        Self {
            status: GameStatus::InProcess,
            position,
            cells: Position::ALL.map(Cell::empty),
        }
    }

    /// Returns the sub-game's status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the sub-game's coordinate within the match.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns all 9 cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy with the cell at `cell.position()` replaced.
    pub(crate) fn with_cell(&self, cell: Cell) -> Self {
        let mut next = self.clone();
        next.cells[cell.position().index()] = cell;
        next
    }

    /// Returns this sub-game with its status replaced.
    pub(crate) fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }
}

/// Complete match state.
///
/// Created by [`GameState::new`] and thereafter only replaced by the
/// result of a move. The match status is derived, see [`GameState::status`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    sub_games: [SubGame; 9],
    current_sub_game: Option<Position>,
    player: Player,
}

impl GameState {
    /// Creates the initial state: every cell empty, free choice, X to move.
    pub fn new() -> Self {
        Self {
            sub_games: Position::ALL.map(SubGame::new),
            current_sub_game: None,
            player: Player::X,
        }
    }

    /// Returns all 9 sub-games in row-major order.
    pub fn sub_games(&self) -> &[SubGame; 9] {
        &self.sub_games
    }

    /// Sub-game the next move is forced into, or `None` for free choice.
    pub fn current_sub_game(&self) -> Option<Position> {
        self.current_sub_game
    }

    /// Player whose turn is next.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns a copy with the sub-game at `sub_game.position()` replaced.
    pub(crate) fn with_sub_game(&self, sub_game: SubGame) -> Self {
        let mut next = self.clone();
        let idx = sub_game.position().index();
        next.sub_games[idx] = sub_game;
        next
    }

    /// Returns this state with routing and turn replaced.
    pub(crate) fn with_turn(mut self, current_sub_game: Option<Position>, player: Player) -> Self {
        self.current_sub_game = current_sub_game;
        self.player = player;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_new_sub_game_is_empty_and_keyed() {
        let sub_game = SubGame::new(Position::TOP_RIGHT);
        assert_eq!(sub_game.status(), GameStatus::InProcess);
        assert_eq!(sub_game.position(), Position::TOP_RIGHT);
        for (idx, cell) in sub_game.cells().iter().enumerate() {
            assert_eq!(cell.position(), Position::ALL[idx]);
            assert_eq!(cell.status(), CellState::Empty);
        }
    }

    #[test]
    fn test_with_cell_replaces_not_appends() {
        let before = SubGame::new(Position::CENTER);
        let after = before.with_cell(Cell::played(Position::BOTTOM_LEFT, Player::O));

        assert_eq!(after.cells().len(), 9);
        assert_eq!(
            after.cells()[Position::BOTTOM_LEFT.index()].status(),
            CellState::Played(Player::O)
        );
        // The original is untouched
        assert_eq!(
            before.cells()[Position::BOTTOM_LEFT.index()].status(),
            CellState::Empty
        );
    }

    #[test]
    fn test_status_helpers() {
        assert!(GameStatus::InProcess.is_in_process());
        assert!(GameStatus::Tie.is_finished());
        assert_eq!(GameStatus::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(GameStatus::Tie.winner(), None);
        assert_eq!(GameStatus::Won(Player::X).to_string(), "won by X");
    }
}
