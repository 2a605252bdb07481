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

//! Types that make up the game board.

use std::{collections::HashSet, fmt};

use tracing::trace;

use crate::{config::BufferReveal, ships::Ship};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    grid::CellState,
    setup::BoardSetup,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
#[cfg(feature = "rng_gen")]
pub mod random;
pub mod setup;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not sink it.
    Hit,
    /// The shot hit the last intact cell of a ship.
    Destroyed,
}

/// Represents a single player's board during play, including their ships and their
/// side of the ocean.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Cells that can no longer be fired at.
    occupied: HashSet<Coordinate>,

    /// Ships in the order they were placed. Grid cells refer to ships by index here.
    ships: Vec<Ship>,

    /// Number of ships that have been sunk.
    destroyed: usize,

    /// Whether unhit ships are drawn as open water.
    hidden: bool,

    buffer_reveal: BufferReveal,
}

impl Board {
    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Returns true if the coordinate is not on this board.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.grid.dim.is_out_of_bounds(coord)
    }

    /// Returns true if firing at the coordinate would be rejected as already shot.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.occupied.contains(&coord)
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord).map(|cell| cell.state)
    }

    /// All ships on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Returns true if all of this player's ships have been sunk.
    pub fn defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Set whether unhit ships are concealed when the board is displayed.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn buffer_reveal(&self) -> BufferReveal {
        self.buffer_reveal
    }

    /// Fire a shot at this board, returning a result indicating why the shot was
    /// rejected or what it hit.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if !self.occupied.insert(coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyShot, coord));
        }
        let cell = &mut self.grid[coord];
        let idx = match cell.ship {
            None => {
                cell.state = CellState::Miss;
                return Ok(ShotOutcome::Miss);
            }
            Some(idx) => {
                cell.state = CellState::Hit;
                idx
            }
        };
        let ship = &mut self.ships[idx];
        ship.take_hit();
        if ship.sunk() {
            self.destroyed += 1;
            self.reveal_buffer(idx);
            Ok(ShotOutcome::Destroyed)
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// Mark the untouched water around a sunk ship as known to be empty.
    fn reveal_buffer(&mut self, idx: usize) {
        let dim = self.grid.dim;
        let around: Vec<Coordinate> = self.ships[idx]
            .cells()
            .flat_map(|c| dim.neighborhood(c))
            .collect();
        for coord in around {
            if self.occupied.contains(&coord) {
                continue;
            }
            let cell = &mut self.grid[coord];
            // Placement keeps every other ship out of this area.
            if cell.ship.is_some() {
                continue;
            }
            cell.state = CellState::BufferMarked;
            if self.buffer_reveal == BufferReveal::Blocking {
                self.occupied.insert(coord);
            }
            trace!(%coord, "revealed buffer cell");
        }
    }
}

impl fmt::Display for Board {
    /// Draws the board as a table with one-based row and column numbers.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  |")?;
        for col in 1..=self.grid.dim.size() {
            write!(f, " {} |", col)?;
        }
        for (i, row) in self.grid.dim.iter_coordinates().enumerate() {
            write!(f, "\n{} |", i + 1)?;
            for coord in row {
                write!(f, " {} |", self.grid[coord].state.symbol(self.hidden))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn board_with(ships: Vec<Ship>, reveal: BufferReveal) -> Board {
        let mut setup = BoardSetup::new(Dimensions::new(6)).with_buffer_reveal(reveal);
        for ship in ships {
            setup.place_ship(ship).unwrap();
        }
        setup.start().unwrap()
    }

    fn cruiser() -> Ship {
        Ship::new(Coordinate::new(0, 0), 3, Orientation::Horizontal)
    }

    #[test]
    fn cruiser_takes_three_hits() {
        let mut board = board_with(vec![cruiser()], BufferReveal::Blocking);
        assert_eq!(board.shoot(Coordinate::new(0, 3)), Ok(ShotOutcome::Miss));
        assert_eq!(board.shoot(Coordinate::new(0, 0)), Ok(ShotOutcome::Hit));
        assert_eq!(board.shoot(Coordinate::new(0, 1)), Ok(ShotOutcome::Hit));
        assert_eq!(board.shoot(Coordinate::new(0, 2)), Ok(ShotOutcome::Destroyed));
        assert_eq!(board.destroyed(), 1);
        assert!(board.defeated());
    }

    #[test]
    fn second_shot_at_same_cell_rejected() {
        let mut board = board_with(vec![cruiser()], BufferReveal::Blocking);
        board.shoot(Coordinate::new(4, 4)).unwrap();
        let err = board.shoot(Coordinate::new(4, 4)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        assert_eq!(err.coord(), Coordinate::new(4, 4));

        board.shoot(Coordinate::new(0, 1)).unwrap();
        let err = board.shoot(Coordinate::new(0, 1)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        assert_eq!(board.ships()[0].remaining(), 2);
    }

    #[test]
    fn off_board_shots_rejected_in_any_state() {
        let mut board = board_with(vec![cruiser()], BufferReveal::Blocking);
        let outside = [
            Coordinate::new(-1, 0),
            Coordinate::new(0, -1),
            Coordinate::new(6, 0),
            Coordinate::new(0, 6),
            Coordinate::new(100, 100),
        ];
        for &coord in outside.iter() {
            assert_eq!(
                board.shoot(coord).unwrap_err().reason(),
                CannotShootReason::OutOfBounds
            );
        }
        for col in 0..3 {
            board.shoot(Coordinate::new(0, col)).unwrap();
        }
        for &coord in outside.iter() {
            assert_eq!(
                board.shoot(coord).unwrap_err().reason(),
                CannotShootReason::OutOfBounds
            );
        }
    }

    #[test]
    fn placement_buffer_is_shootable_during_play() {
        let mut board = board_with(vec![cruiser()], BufferReveal::Blocking);
        assert!(!board.is_occupied(Coordinate::new(1, 1)));
        assert_eq!(board.shoot(Coordinate::new(1, 1)), Ok(ShotOutcome::Miss));
        assert_eq!(board.cell(Coordinate::new(1, 1)), Some(CellState::Miss));
    }

    #[test]
    fn blocking_reveal_marks_and_blocks_surroundings() {
        let ship = Ship::new(Coordinate::new(2, 2), 1, Orientation::Vertical);
        let mut board = board_with(vec![ship], BufferReveal::Blocking);
        assert_eq!(board.shoot(Coordinate::new(2, 2)), Ok(ShotOutcome::Destroyed));
        for coord in board.dimensions().neighborhood(Coordinate::new(2, 2)) {
            if coord == Coordinate::new(2, 2) {
                assert_eq!(board.cell(coord), Some(CellState::Hit));
            } else {
                assert_eq!(board.cell(coord), Some(CellState::BufferMarked));
                assert!(board.is_occupied(coord));
            }
        }
        let err = board.shoot(Coordinate::new(1, 1)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
    }

    #[test]
    fn cosmetic_reveal_leaves_surroundings_shootable() {
        let ship = Ship::new(Coordinate::new(2, 2), 1, Orientation::Vertical);
        let mut board = board_with(vec![ship], BufferReveal::Cosmetic);
        board.shoot(Coordinate::new(2, 2)).unwrap();
        assert_eq!(board.cell(Coordinate::new(3, 3)), Some(CellState::BufferMarked));
        assert!(!board.is_occupied(Coordinate::new(3, 3)));
        assert_eq!(board.shoot(Coordinate::new(3, 3)), Ok(ShotOutcome::Miss));
        assert_eq!(board.cell(Coordinate::new(3, 3)), Some(CellState::Miss));
    }

    #[test]
    fn reveal_keeps_earlier_misses() {
        let ship = Ship::new(Coordinate::new(0, 5), 2, Orientation::Vertical);
        let mut board = board_with(vec![ship], BufferReveal::Blocking);
        board.shoot(Coordinate::new(0, 4)).unwrap();
        board.shoot(Coordinate::new(0, 5)).unwrap();
        assert_eq!(board.shoot(Coordinate::new(1, 5)), Ok(ShotOutcome::Destroyed));
        assert_eq!(board.cell(Coordinate::new(0, 4)), Some(CellState::Miss));
        assert_eq!(board.cell(Coordinate::new(2, 4)), Some(CellState::BufferMarked));
        assert_eq!(board.cell(Coordinate::new(3, 5)), Some(CellState::Empty));
    }

    #[test]
    fn renders_revealed_and_hidden() {
        let ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal);
        let mut setup = BoardSetup::new(Dimensions::new(3));
        setup.place_ship(ship).unwrap();
        let mut board = setup.start().unwrap();
        board.shoot(Coordinate::new(0, 0)).unwrap();
        board.shoot(Coordinate::new(2, 2)).unwrap();
        assert_eq!(
            board.to_string(),
            "  | 1 | 2 | 3 |\n\
             1 | X | ■ | O |\n\
             2 | O | O | O |\n\
             3 | O | O | . |"
        );
        board.set_hidden(true);
        assert_eq!(
            board.to_string(),
            "  | 1 | 2 | 3 |\n\
             1 | X | O | O |\n\
             2 | O | O | O |\n\
             3 | O | O | . |"
        );
    }
}
