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

//! Implements the setup phase of the board.
use std::collections::HashSet;

use crate::{
    board::{
        Board, CannotPlaceReason, CellState, Coordinate, Dimensions, Grid, PlaceError,
    },
    config::BufferReveal,
    ships::Ship,
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow shooting.
///
/// Every placed ship reserves the cells around it, so no two ships ever touch, not
/// even at the corners.
#[derive(Debug)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Cells covered by a ship or by the reserved area around one.
    occupied: HashSet<Coordinate>,

    /// Ships placed so far, in order.
    ships: Vec<Ship>,

    /// Reveal policy handed on to the [`Board`] when the game starts.
    buffer_reveal: BufferReveal,
}

impl BoardSetup {
    /// Begin game setup by constructing a new board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            occupied: HashSet::new(),
            ships: Vec::new(),
            buffer_reveal: BufferReveal::default(),
        }
    }

    /// Choose what the started board does with the water around destroyed ships.
    pub fn with_buffer_reveal(mut self, buffer_reveal: BufferReveal) -> Self {
        self.buffer_reveal = buffer_reveal;
        self
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Returns true if the coordinate is not on this board.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.grid.dim.is_out_of_bounds(coord)
    }

    /// Returns true if the cell is covered by a ship or lies next to one.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.occupied.contains(&coord)
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Checks if this board is ready to start. Returns `true` once at least one ship
    /// has been placed.
    pub fn ready(&self) -> bool {
        !self.ships.is_empty()
    }

    /// Check whether the ship could be placed, without placing it.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), CannotPlaceReason> {
        let mut too_close = false;
        for coord in ship.cells() {
            match self.grid.get(coord) {
                None => return Err(CannotPlaceReason::OutOfBounds),
                Some(cell) if cell.ship.is_some() => return Err(CannotPlaceReason::Overlaps),
                Some(_) => too_close |= self.occupied.contains(&coord),
            }
        }
        if too_close {
            Err(CannotPlaceReason::TooClose)
        } else {
            Ok(())
        }
    }

    /// Attempts to place the ship. If any of its cells is off the board, covered by
    /// another ship or next to another ship, returns `Err` with the ship and the reason
    /// placement failed.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if let Err(reason) = self.check_placement(&ship) {
            return Err(PlaceError::new(reason, ship));
        }
        let idx = self.ships.len();
        // Already ensured that every position is valid and not occupied.
        for coord in ship.cells() {
            let cell = &mut self.grid[coord];
            cell.ship = Some(idx);
            cell.state = CellState::Ship;
            self.occupied.insert(coord);
        }
        let dim = self.grid.dim;
        self.occupied
            .extend(ship.cells().flat_map(|c| dim.neighborhood(c)));
        self.ships.push(ship);
        Ok(())
    }

    /// Tries to start the game. If at least one ship is placed, returns a [`Board`]
    /// with the current placements and returns `self` otherwise.
    ///
    /// The reserved cells only matter while placing, so the started board forgets them
    /// and every cell can be fired at. Ship cells stay recorded in the grid.
    pub fn start(self) -> Result<Board, Self> {
        if !self.ready() {
            return Err(self);
        }
        Ok(Board {
            grid: self.grid,
            occupied: HashSet::new(),
            ships: self.ships,
            destroyed: 0,
            hidden: false,
            buffer_reveal: self.buffer_reveal,
        })
    }
}
