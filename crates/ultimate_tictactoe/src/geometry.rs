//! Coordinate space shared by both levels of play.
//!
//! A [`Position`] names one square of a 3x3 grid. The same coordinate
//! addresses a cell inside a sub-game and a sub-game inside the match,
//! which is what lets the cell just played pick the opponent's next
//! sub-game. Win detection at either level reduces to asking whether a
//! [`PositionSet`] contains one of the eight [`WINNING_LINES`].

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;
use tracing::instrument;

/// Column of a 3x3 grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Horizontal {
    /// Left column.
    #[display("left")]
    Left,
    /// Middle column.
    #[display("center")]
    Center,
    /// Right column.
    #[display("right")]
    Right,
}

impl Horizontal {
    /// Zero-based column number.
    pub const fn column(self) -> usize {
        match self {
            Horizontal::Left => 0,
            Horizontal::Center => 1,
            Horizontal::Right => 2,
        }
    }
}

/// Row of a 3x3 grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Vertical {
    /// Top row.
    #[display("top")]
    Top,
    /// Middle row.
    #[display("center")]
    Center,
    /// Bottom row.
    #[display("bottom")]
    Bottom,
}

impl Vertical {
    /// Zero-based row number.
    pub const fn row(self) -> usize {
        match self {
            Vertical::Top => 0,
            Vertical::Center => 1,
            Vertical::Bottom => 2,
        }
    }
}

/// A square of a 3x3 grid: a column paired with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    horizontal: Horizontal,
    vertical: Vertical,
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position::new(Horizontal::Left, Vertical::Top);
    /// Top edge.
    pub const TOP_CENTER: Position = Position::new(Horizontal::Center, Vertical::Top);
    /// Top-right corner.
    pub const TOP_RIGHT: Position = Position::new(Horizontal::Right, Vertical::Top);
    /// Left edge.
    pub const CENTER_LEFT: Position = Position::new(Horizontal::Left, Vertical::Center);
    /// Middle square.
    pub const CENTER: Position = Position::new(Horizontal::Center, Vertical::Center);
    /// Right edge.
    pub const CENTER_RIGHT: Position = Position::new(Horizontal::Right, Vertical::Center);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Position = Position::new(Horizontal::Left, Vertical::Bottom);
    /// Bottom edge.
    pub const BOTTOM_CENTER: Position = Position::new(Horizontal::Center, Vertical::Bottom);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position::new(Horizontal::Right, Vertical::Bottom);

    /// All 9 positions in row-major order. `ALL[p.index()] == p`.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::CENTER_LEFT,
        Position::CENTER,
        Position::CENTER_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    /// Creates a position from its column and row.
    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the column.
    pub const fn horizontal(self) -> Horizontal {
        self.horizontal
    }

    /// Returns the row.
    pub const fn vertical(self) -> Vertical {
        self.vertical
    }

    /// Row-major index (0-8) into [`Position::ALL`].
    pub const fn index(self) -> usize {
        self.vertical.row() * 3 + self.horizontal.column()
    }

    /// Creates a position from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label, e.g. `top-left` or `center`.
    pub fn label(self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (Vertical::Top, Horizontal::Left) => "top-left",
            (Vertical::Top, Horizontal::Center) => "top-center",
            (Vertical::Top, Horizontal::Right) => "top-right",
            (Vertical::Center, Horizontal::Left) => "center-left",
            (Vertical::Center, Horizontal::Center) => "center",
            (Vertical::Center, Horizontal::Right) => "center-right",
            (Vertical::Bottom, Horizontal::Left) => "bottom-left",
            (Vertical::Bottom, Horizontal::Center) => "bottom-center",
            (Vertical::Bottom, Horizontal::Right) => "bottom-right",
        }
    }

    /// Two-letter abbreviation, e.g. `tl`; the middle square is `c`.
    pub fn short_label(self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (Vertical::Top, Horizontal::Left) => "tl",
            (Vertical::Top, Horizontal::Center) => "tc",
            (Vertical::Top, Horizontal::Right) => "tr",
            (Vertical::Center, Horizontal::Left) => "cl",
            (Vertical::Center, Horizontal::Center) => "c",
            (Vertical::Center, Horizontal::Right) => "cr",
            (Vertical::Bottom, Horizontal::Left) => "bl",
            (Vertical::Bottom, Horizontal::Center) => "bc",
            (Vertical::Bottom, Horizontal::Right) => "br",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Input that names no position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised position {:?} (try a label like top-left, a short form like tl, or 1-9)", input)]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parses a full label, a short label, or a keypad number 1-9 in row-major order.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();

        if let Ok(num) = token.parse::<usize>() {
            return num
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| PositionParseError { input: s.to_string() });
        }

        if token == "cc" || token == "center-center" {
            return Ok(Position::CENTER);
        }

        Self::ALL
            .into_iter()
            .find(|pos| pos.label() == token || pos.short_label() == token)
            .ok_or_else(|| PositionParseError { input: s.to_string() })
    }
}

/// A set of positions packed into the low 9 bits of a `u16`.
///
/// Used for "cells played by a player" and "sub-games won by a player".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PositionSet {
    bits: u16,
}

impl PositionSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns this set with `pos` added.
    pub const fn with(self, pos: Position) -> Self {
        Self {
            bits: self.bits | (1 << pos.index()),
        }
    }

    /// Adds `pos` to the set.
    pub fn insert(&mut self, pos: Position) {
        *self = self.with(pos);
    }

    /// Checks membership.
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & (1 << pos.index()) != 0
    }

    /// Number of positions in the set.
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Positions present in both sets.
    pub const fn intersection(self, other: PositionSet) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Iterates members in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.contains(*pos))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), PositionSet::with)
    }
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::CENTER_LEFT, Position::CENTER, Position::CENTER_RIGHT],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    // Columns
    [Position::TOP_LEFT, Position::CENTER_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::TOP_RIGHT, Position::CENTER_RIGHT, Position::BOTTOM_RIGHT],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

const LINE_SETS: [PositionSet; 8] = line_sets();

const fn line_sets() -> [PositionSet; 8] {
    let mut sets = [PositionSet::empty(); 8];
    let mut i = 0;
    while i < WINNING_LINES.len() {
        let [a, b, c] = WINNING_LINES[i];
        sets[i] = PositionSet::empty().with(a).with(b).with(c);
        i += 1;
    }
    sets
}

/// Returns the first winning line fully contained in `owned`.
#[instrument(level = "trace")]
pub fn winning_line(owned: PositionSet) -> Option<[Position; 3]> {
    WINNING_LINES
        .iter()
        .zip(LINE_SETS)
        .find(|(_, line)| line.intersection(owned).len() == 3)
        .map(|(positions, _)| *positions)
}

/// Checks whether `owned` contains any winning line.
#[instrument(level = "trace")]
pub fn has_winning_line(owned: PositionSet) -> bool {
    winning_line(owned).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_is_indexed_row_major() {
        for (idx, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), idx);
            assert_eq!(Position::from_index(idx), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_all_covers_every_coordinate() {
        for h in Horizontal::iter() {
            for v in Vertical::iter() {
                assert!(Position::ALL.contains(&Position::new(h, v)));
            }
        }
    }

    #[test]
    fn test_lines_are_distinct_triples() {
        for line in WINNING_LINES {
            let set: PositionSet = line.into_iter().collect();
            assert_eq!(set.len(), 3);
        }
        for (i, a) in LINE_SETS.iter().enumerate() {
            for b in &LINE_SETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_line_membership_counts() {
        let count = |pos: Position| WINNING_LINES.iter().filter(|l| l.contains(&pos)).count();
        assert_eq!(count(Position::CENTER), 4);
        assert_eq!(count(Position::TOP_LEFT), 3);
        assert_eq!(count(Position::BOTTOM_RIGHT), 3);
        assert_eq!(count(Position::TOP_CENTER), 2);
        assert_eq!(count(Position::CENTER_RIGHT), 2);
    }

    #[test]
    fn test_winning_line_detects_diagonal() {
        let owned: PositionSet = [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT, Position::TOP_LEFT]
            .into_iter()
            .collect();
        assert!(has_winning_line(owned));
        assert_eq!(
            winning_line(owned),
            Some([Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT])
        );
    }

    #[test]
    fn test_no_line_in_scattered_set() {
        let owned: PositionSet = [
            Position::TOP_LEFT,
            Position::TOP_CENTER,
            Position::CENTER_RIGHT,
            Position::BOTTOM_LEFT,
            Position::BOTTOM_CENTER,
        ]
        .into_iter()
        .collect();
        assert!(!has_winning_line(owned));
        assert!(!has_winning_line(PositionSet::empty()));
    }

    #[test]
    fn test_set_operations() {
        let mut set = PositionSet::empty();
        assert!(set.is_empty());
        set.insert(Position::CENTER);
        set.insert(Position::CENTER);
        set.insert(Position::BOTTOM_RIGHT);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Position::CENTER));
        assert!(!set.contains(Position::TOP_LEFT));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Position::CENTER, Position::BOTTOM_RIGHT]
        );
        let other = PositionSet::empty().with(Position::CENTER);
        assert_eq!(set.intersection(other), other);
    }

    #[test]
    fn test_parse_labels_short_forms_and_numbers() {
        assert_eq!("top-left".parse(), Ok(Position::TOP_LEFT));
        assert_eq!(" BR ".parse(), Ok(Position::BOTTOM_RIGHT));
        assert_eq!("c".parse(), Ok(Position::CENTER));
        assert_eq!("cc".parse(), Ok(Position::CENTER));
        assert_eq!("1".parse(), Ok(Position::TOP_LEFT));
        assert_eq!("9".parse(), Ok(Position::BOTTOM_RIGHT));
        assert!("0".parse::<Position>().is_err());
        assert!("10".parse::<Position>().is_err());
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse(), Ok(pos));
        }
    }
}
