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

//! Ships and their placement on the board.
#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Direction a ship extends in from its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Extends to the right, along the columns of its bow's row.
    Horizontal,
    /// Extends downward, along the rows of its bow's column.
    Vertical,
}

impl Orientation {
    /// Row and column step between consecutive cells of a ship.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship of a given length, along with how many of its cells are still
/// intact.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    bow: Coordinate,
    len: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Construct an undamaged ship starting at `bow`. Panics if len is 0.
    pub fn new(bow: Coordinate, len: usize, orientation: Orientation) -> Self {
        assert!(len > 0);
        Self {
            bow,
            len,
            orientation,
            lives: len,
        }
    }

    /// The cell the rest of the ship extends from.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells of this ship that have not been hit yet.
    pub fn remaining(&self) -> usize {
        self.lives
    }

    /// Whether every cell of this ship has been hit.
    pub fn sunk(&self) -> bool {
        self.lives == 0
    }

    /// Iterate the cells covered by this ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let bow = self.bow;
        let (dr, dc) = self.orientation.step();
        (0..self.len as isize).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Returns true if this ship covers the given cell.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record one hit. The board only calls this for distinct cells of the ship, so
    /// lives never go below zero.
    pub(crate) fn take_hit(&mut self) {
        debug_assert!(self.lives > 0);
        self.lives = self.lives.saturating_sub(1);
    }
}
