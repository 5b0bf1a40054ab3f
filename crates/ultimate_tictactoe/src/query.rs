//! Read-only queries over the data model.
//!
//! Lookups by [`Position`] are total: collections are arrays indexed by
//! [`Position::index`], so there is no "missing entry" case to handle.

use super::action::Move;
use super::geometry::{Position, PositionSet};
use super::rules;
use super::types::{Cell, CellState, GameState, GameStatus, Player, SubGame};
use tracing::instrument;

impl Cell {
    /// Checks if nobody has played here.
    pub fn is_empty(&self) -> bool {
        matches!(self.status(), CellState::Empty)
    }

    /// Checks if `player` has played here.
    pub fn is_played_by(&self, player: Player) -> bool {
        self.status() == CellState::Played(player)
    }
}

impl SubGame {
    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells()[pos.index()]
    }

    /// Checks if moves may still be played here.
    pub fn is_in_process(&self) -> bool {
        self.status().is_in_process()
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells().iter().filter(|cell| cell.is_empty())
    }

    /// Iterates the cells played by `player`.
    pub fn played_cells(&self, player: Player) -> impl Iterator<Item = &Cell> {
        self.cells().iter().filter(move |cell| cell.is_played_by(player))
    }

    /// Positions of the cells played by `player`.
    pub fn cells_played_by(&self, player: Player) -> PositionSet {
        self.played_cells(player).map(Cell::position).collect()
    }

    /// Positions of the empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.empty_cells().map(Cell::position).collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }
}

impl GameState {
    /// Returns the sub-game at `pos`.
    pub fn sub_game(&self, pos: Position) -> &SubGame {
        &self.sub_games()[pos.index()]
    }

    /// Returns a cell by sub-game and cell coordinate.
    pub fn cell(&self, sub_game: Position, cell: Position) -> &Cell {
        self.sub_game(sub_game).cell(cell)
    }

    /// Iterates sub-games still being played.
    pub fn in_process_sub_games(&self) -> impl Iterator<Item = &SubGame> {
        self.sub_games().iter().filter(|sg| sg.is_in_process())
    }

    /// Iterates sub-games that are won or tied.
    pub fn finished_sub_games(&self) -> impl Iterator<Item = &SubGame> {
        self.sub_games().iter().filter(|sg| !sg.is_in_process())
    }

    /// Number of sub-games still being played.
    pub fn in_process_count(&self) -> usize {
        self.in_process_sub_games().count()
    }

    /// Positions of the sub-games won by `player`.
    pub fn sub_games_won_by(&self, player: Player) -> PositionSet {
        self.sub_games()
            .iter()
            .filter(|sg| sg.status() == GameStatus::Won(player))
            .map(SubGame::position)
            .collect()
    }

    /// Sub-games the player to move may target.
    ///
    /// With routing in force this is just the forced sub-game; otherwise
    /// every in-process sub-game.
    #[instrument(skip(self))]
    pub fn playable_sub_games(&self) -> Vec<Position> {
        match self.current_sub_game() {
            Some(forced) => vec![forced],
            None => self.in_process_sub_games().map(SubGame::position).collect(),
        }
    }

    /// Every move the player to move may legally make, in row-major order.
    ///
    /// Empty once the match is decided or nothing is left to play.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status().is_finished() {
            return Vec::new();
        }

        self.playable_sub_games()
            .into_iter()
            .map(|pos| self.sub_game(pos))
            .filter(|sg| sg.is_in_process())
            .flat_map(|sg| {
                sg.empty_cells()
                    .map(move |cell| Move::new(sg.position(), cell.position()))
            })
            .collect()
    }

    /// Match status, derived from the sub-games.
    ///
    /// Evaluated for the player who made the last move, the same way the
    /// engine evaluates it when that move is applied.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        rules::match_status(self, self.player().opponent())
    }
}
