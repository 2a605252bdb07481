// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// The coordinates of a cell on the board. Coordinates are zero-based and signed, so
/// that positions off the edge of the board (such as a player typing `0 0`) can be
/// represented and rejected by bounds checks instead of by arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Row of the cell, counted from the top.
    pub row: isize,
    /// Column of the cell, counted from the left.
    pub col: isize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Get the coordinate offset from this one by the given number of rows and columns.
    pub fn offset(self, rows: isize, cols: isize) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }

    /// Chebyshev distance between two coordinates: the number of king moves between
    /// them.
    pub fn distance(self, other: Coordinate) -> usize {
        let dr = (self.row - other.row).abs() as usize;
        let dc = (self.col - other.col).abs() as usize;
        dr.max(dc)
    }
}

impl From<(isize, isize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    /// Shows the coordinate the way players type it: one-based, row first.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_compares_both_fields() {
        assert_eq!(Coordinate::new(2, 3), Coordinate::from((2, 3)));
        assert_ne!(Coordinate::new(2, 3), Coordinate::new(3, 2));
    }

    #[test]
    fn displays_one_based() {
        assert_eq!(Coordinate::new(0, 4).to_string(), "1 5");
    }

    #[test]
    fn distance_counts_diagonals_as_one() {
        let c = Coordinate::new(2, 2);
        assert_eq!(c.distance(Coordinate::new(3, 3)), 1);
        assert_eq!(c.distance(Coordinate::new(2, 4)), 2);
        assert_eq!(c.distance(c), 0);
    }
}
