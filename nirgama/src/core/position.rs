//! Position type: one node of the multi-floor search graph.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Floor index (small non-negative integer)
pub type FloorId = usize;

/// A cell on a specific floor.
///
/// Ordering is lexicographic over (floor, row, col).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Floor index
    pub floor: FloorId,
    /// Row index (0 = top row of the snapshot)
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(floor: FloorId, row: usize, col: usize) -> Self {
        Self { floor, row, col }
    }

    /// The (row, col) pair, ignoring the floor
    #[inline]
    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Same (row, col) on another floor
    #[inline]
    pub fn on_floor(&self, floor: FloorId) -> Self {
        Self { floor, ..*self }
    }

    /// Planar Manhattan distance in (row, col). The floor is ignored.
    #[inline]
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The up-to-4 orthogonal neighbors on the same floor, in the order
    /// up, down, left, right. Cells that would underflow are skipped; the
    /// upper bound is the grid's concern.
    pub fn neighbors_4(self) -> impl Iterator<Item = Position> {
        const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        STEPS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Some(Position::new(self.floor, row, col))
        })
    }

    /// Are the two positions joined by a single edge of the graph shape?
    ///
    /// True for orthogonal neighbors on one floor and for the same (row,
    /// col) on different floors. Labels are not consulted.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        if self.floor == other.floor {
            self.manhattan_distance(other) == 1
        } else {
            self.coord() == other.coord()
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.floor, self.row, self.col)
    }
}

/// Error parsing a `floor,row,col` triple
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected `floor,row,col`, got `{0}`")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [floor, row, col] = parts[..] else {
            return Err(ParsePositionError(s.to_string()));
        };
        let parse = |v: &str| {
            v.parse::<usize>()
                .map_err(|_| ParsePositionError(s.to_string()))
        };
        Ok(Position::new(parse(floor)?, parse(row)?, parse(col)?))
    }
}
