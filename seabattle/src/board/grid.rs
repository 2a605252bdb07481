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

//! Defines the types that make up the grid. These are shared between the board's setup
//! and playing versions.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, Dimensions};

/// Visible state of a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Open water that nobody has fired at.
    Empty,
    /// Part of a ship that has not been hit.
    Ship,
    /// Part of a ship that has been hit.
    Hit,
    /// Open water that was fired at.
    Miss,
    /// Open water next to a destroyed ship, revealed when the ship went down.
    BufferMarked,
}

impl CellState {
    /// Symbol used when rendering the cell. Hidden boards show unhit ships as water.
    pub fn symbol(self, hidden: bool) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Ship if hidden => 'O',
            CellState::Ship => '■',
            CellState::Hit => 'X',
            CellState::Miss | CellState::BufferMarked => '.',
        }
    }
}

/// A single cell in the player's grid.
#[derive(Debug, Copy, Clone)]
pub(super) struct GridCell {
    /// Index of the ship occupying this cell, if any.
    pub(super) ship: Option<usize>,

    /// What the cell currently shows.
    pub(super) state: CellState,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            ship: None,
            state: CellState::Empty,
        }
    }
}

/// Grid structure shared between [`BoardSetup`] and [`Board`].
#[derive(Debug)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&GridCell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
