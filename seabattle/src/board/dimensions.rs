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

//! Extent of a square board.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Offsets of every cell within one king move of a cell, including the cell itself.
const NEIGHBORHOOD: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Dimensions of a square board of `size` x `size` cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified side length.
    /// Panics if `size` is 0 or if `size * size` exceeds `isize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("Dimensions must be nonzero, got {}", size),
            None => panic!(
                "Dimensions too large: {} * {} > {}",
                size,
                size,
                isize::max_value()
            ),
        }
    }

    /// Create new [`Dimensions`] with the specified side length. Returns `None` if `size`
    /// is 0 or if `size * size` exceeds `isize::max_value()`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }
        size.checked_mul(size)
            .filter(|&total| total <= isize::max_value() as usize)
            .map(|_| Self { size })
    }

    /// Length of one side of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Check whether the given [`Coordinate`] lies on the board.
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        let size = self.size as isize;
        (0..size).contains(&c.row) && (0..size).contains(&c.col)
    }

    /// Check whether the given [`Coordinate`] lies outside the board.
    pub fn is_out_of_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        !self.contains(coord)
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize<B: Borrow<Coordinate>>(&self, coord: B) -> Option<usize> {
        let c = coord.borrow();
        if self.contains(c) {
            Some(c.row as usize * self.size + c.col as usize)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size as isize;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// Iterate the in-bounds cells within one king move of `coord`, including `coord`
    /// itself when it is on the board.
    pub fn neighborhood(self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        NEIGHBORHOOD
            .iter()
            .map(move |&(dr, dc)| coord.offset(dr, dc))
            .filter(move |c| self.contains(c))
    }
}

impl Default for Dimensions {
    /// The classic 6x6 board.
    fn default() -> Self {
        Self { size: 6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let dim = Dimensions::new(6);
        assert!(dim.contains(Coordinate::new(0, 0)));
        assert!(dim.contains(Coordinate::new(5, 5)));
        assert!(dim.is_out_of_bounds(Coordinate::new(6, 0)));
        assert!(dim.is_out_of_bounds(Coordinate::new(0, 6)));
        assert!(dim.is_out_of_bounds(Coordinate::new(-1, 3)));
    }

    #[test]
    fn linearizes_row_major() {
        let dim = Dimensions::new(6);
        assert_eq!(dim.try_linearize(Coordinate::new(4, 1)), Some(25));
        assert_eq!(dim.try_linearize(Coordinate::new(-1, 0)), None);
    }

    #[test]
    fn neighborhood_clips_at_corner() {
        let dim = Dimensions::new(6);
        let mut cells: Vec<_> = dim.neighborhood(Coordinate::new(0, 0)).collect();
        cells.sort_by_key(|c| (c.row, c.col));
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
        assert_eq!(dim.neighborhood(Coordinate::new(3, 3)).count(), 9);
    }

    #[test]
    fn zero_size_rejected() {
        assert!(Dimensions::try_new(0).is_none());
    }
}
