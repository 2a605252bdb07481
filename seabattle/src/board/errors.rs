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

//! Errors used by the `Board` and `BoardSetup`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would hang off the edge of the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// The ship would share a cell with a ship that was already placed.
    #[error("the ship overlaps another ship")]
    Overlaps,
    /// The ship would touch another ship, possibly only diagonally.
    #[error("the ship is too close to another ship")]
    TooClose,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place ship at {}: {reason}", .ship.bow())]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship whose placement was attempted.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("that shot is off the board")]
    OutOfBounds,

    /// A shot has already been fired at that cell, or the cell is known to be empty.
    #[error("that cell was already shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot shoot {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
