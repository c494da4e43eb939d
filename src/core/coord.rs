//! Grid coordinates and the four jump directions.
//!
//! Coordinates are signed so that offset arithmetic near the board edge
//! produces an out-of-bounds `Coord` rather than an underflow. Lookups
//! with such a coordinate simply report "absent".

use serde::{Deserialize, Serialize};

/// A `(row, column)` position on the grid.
///
/// Row 0 is the top, column 0 is the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells in `direction`.
    #[must_use]
    pub const fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }

    /// The cell strictly between `self` and `other`.
    ///
    /// Defined only when `other - self` is an axis vector of length exactly 2.
    ///
    /// ```
    /// use peg_solitaire::core::Coord;
    ///
    /// assert_eq!(Coord::new(1, 3).midpoint(Coord::new(3, 3)), Some(Coord::new(2, 3)));
    /// assert_eq!(Coord::new(1, 3).midpoint(Coord::new(3, 5)), None);
    /// assert_eq!(Coord::new(1, 3).midpoint(Coord::new(1, 4)), None);
    /// ```
    #[must_use]
    pub fn midpoint(self, other: Coord) -> Option<Coord> {
        let dr = other.row - self.row;
        let dc = other.col - self.col;
        match (dr.abs(), dc.abs()) {
            (2, 0) | (0, 2) => Some(Coord::new(self.row + dr / 2, self.col + dc / 2)),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal jump direction. Diagonal jumps are not part of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// All directions, in the order targets are reported.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Right, Direction::Left];

    /// `(row, col)` unit step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}
