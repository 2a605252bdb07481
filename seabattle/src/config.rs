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

//! Game settings.
use thiserror::Error;

use crate::game::Player;

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 6;

/// Ship lengths of the classic fleet: one of three cells, two of two, four of one.
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed across the whole fleet before a board is thrown away
/// and generated again from scratch.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// What happens to the water around a ship once it is destroyed.
///
/// Defaults to [`BufferReveal::Blocking`], as in the classic game. Use
/// [`BufferReveal::Cosmetic`] to keep the reveal purely presentational.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferReveal {
    /// The surrounding cells are shown as empty and can no longer be fired at.
    Blocking,
    /// The surrounding cells are only drawn as empty. They never block a shot; firing
    /// at one resolves as a miss.
    Cosmetic,
}

impl Default for BufferReveal {
    fn default() -> Self {
        BufferReveal::Blocking
    }
}

/// Reason a [`GameConfig`] was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroSize,
    #[error("the fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship of length {len} does not fit on a board of size {size}")]
    ShipTooLong { len: usize, size: usize },
    #[error("a fleet of {ships} ships cannot be spaced out on a board of size {size}")]
    FleetTooLarge { ships: usize, size: usize },
    #[error("at least one placement attempt is required")]
    ZeroAttempts,
}

/// Settings for a single match.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length of both boards.
    pub size: usize,
    /// Lengths of the ships each player gets, placed in this order.
    pub fleet: Vec<usize>,
    /// Attempt limit for random placement of one board.
    pub max_placement_attempts: usize,
    pub buffer_reveal: BufferReveal,
    /// Player who fires the first shot.
    pub first_player: Player,
}

impl GameConfig {
    /// Number of ships each player has.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    /// Check that the settings describe a game that can be set up.
    ///
    /// The spacing check is necessary but not sufficient: each ship together with the
    /// row and column of buffer below and to the right of it covers a rectangle of the
    /// board grown by one cell, and those rectangles never overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&len) = self.fleet.iter().find(|&&len| len == 0 || len > self.size) {
            return Err(ConfigError::ShipTooLong {
                len,
                size: self.size,
            });
        }
        let footprint: usize = self.fleet.iter().map(|len| (len + 1) * 2).sum();
        if footprint > (self.size + 1) * (self.size + 1) {
            return Err(ConfigError::FleetTooLarge {
                ships: self.fleet.len(),
                size: self.size,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            buffer_reveal: BufferReveal::default(),
            first_player: Player::P1,
        }
    }
}
