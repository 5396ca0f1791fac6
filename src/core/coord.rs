//! Board coordinates, orthogonal directions and rectangular regions.
//!
//! Coordinates are `(row, col)` with row 0 at the top and col 0 at the left.
//! A `Coord` may lie off the board; queries on such coordinates simply
//! yield nothing.

use serde::{Deserialize, Serialize};

/// Board side length.
pub const BOARD_SIZE: i8 = 8;

/// A square on (or off) the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Is this coordinate inside the 8x8 board?
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// The coordinate `steps` squares away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction, steps: i8) -> Self {
        let (drow, dcol) = direction.delta();
        Self::new(
            self.row.saturating_add(drow.saturating_mul(steps)),
            self.col.saturating_add(dcol.saturating_mul(steps)),
        )
    }

    /// `(drow, dcol)` from `self` to `other`, widened so any two `i8`
    /// coordinates have an exact difference.
    #[must_use]
    pub const fn delta_to(self, other: Coord) -> (i16, i16) {
        (
            other.row as i16 - self.row as i16,
            other.col as i16 - self.col as i16,
        )
    }

    /// The square halfway between two coordinates (rounded toward negative
    /// infinity).
    #[must_use]
    pub const fn midpoint(self, other: Coord) -> Coord {
        // The mean of two i8 values always fits back into an i8.
        Coord::new(
            (self.row as i16 + other.row as i16).div_euclid(2) as i8,
            (self.col as i16 + other.col as i16).div_euclid(2) as i8,
        )
    }

    /// Iterate over all 64 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal directions.
///
/// Both players may move in every direction; which of them count as
/// backward is decided by the rules, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    /// `(drow, dcol)` unit vector.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Inclusive rectangle of board squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub top: i8,
    pub left: i8,
    pub bottom: i8,
    pub right: i8,
}

impl Region {
    #[must_use]
    pub const fn new(top: i8, left: i8, bottom: i8, right: i8) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= self.top
            && coord.row <= self.bottom
            && coord.col >= self.left
            && coord.col <= self.right
    }

    /// Number of squares in the region. Zero for an inverted region.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let rows = (self.bottom as i16 - self.top as i16 + 1) as usize;
        let cols = (self.right as i16 - self.left as i16 + 1) as usize;
        rows * cols
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bottom < self.top || self.right < self.left
    }

    /// Iterate over the region's squares in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        (self.top..=self.bottom)
            .flat_map(move |row| (self.left..=self.right).map(move |col| Coord::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board() {
        assert!(Coord::new(0, 0).is_on_board());
        assert!(Coord::new(7, 7).is_on_board());
        assert!(!Coord::new(-1, 3).is_on_board());
        assert!(!Coord::new(3, 8).is_on_board());
    }

    #[test]
    fn test_step_and_midpoint() {
        let origin = Coord::new(3, 3);
        assert_eq!(origin.step(Direction::Up, 1), Coord::new(2, 3));
        assert_eq!(origin.step(Direction::Right, 2), Coord::new(3, 5));

        let landing = origin.step(Direction::Left, 2);
        assert_eq!(origin.midpoint(landing), Coord::new(3, 2));
        assert_eq!(origin.delta_to(landing), (0, -2));
    }

    #[test]
    fn test_extreme_coordinates() {
        let low = Coord::new(i8::MIN, -100);
        let high = Coord::new(i8::MAX, 100);
        assert_eq!(low.delta_to(high), (255, 200));
        assert_eq!(high.delta_to(low), (-255, -200));
        assert_eq!(low.midpoint(high), Coord::new(-1, 0));
        assert_eq!(high.midpoint(high), high);
        assert_eq!(low.midpoint(low), low);

        assert_eq!(Coord::new(100, 0).midpoint(Coord::new(102, 0)), Coord::new(101, 0));
        assert_eq!(Coord::new(-3, 0).midpoint(Coord::new(-2, 0)), Coord::new(-3, 0));
    }

    #[test]
    fn test_all_coords() {
        let coords: Vec<_> = Coord::all().collect();
        assert_eq!(coords.len(), 64);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[63], Coord::new(7, 7));
    }

    #[test]
    fn test_region() {
        let region = Region::new(0, 5, 2, 7);
        assert_eq!(region.len(), 9);
        assert!(region.contains(Coord::new(1, 6)));
        assert!(!region.contains(Coord::new(3, 6)));
        assert_eq!(region.cells().count(), 9);
        assert!(region.cells().all(|c| region.contains(c)));
    }

    #[test]
    fn test_inverted_region_is_empty() {
        let inverted = Region::new(5, 0, 2, 0);
        assert!(inverted.is_empty());
        assert_eq!(inverted.len(), 0);
        assert_eq!(inverted.cells().count(), 0);

        let sideways = Region::new(0, 7, 0, 5);
        assert!(sideways.is_empty());
        assert_eq!(sideways.len(), 0);

        let whole = Region::new(i8::MIN, i8::MIN, i8::MAX, i8::MAX);
        assert_eq!(whole.len(), 256 * 256);
    }
}
