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

//! Random fleet placement.
//!
//! Ships are dropped at random positions one after another. A ship that does not fit
//! is simply tried again elsewhere; earlier ships are never moved. If the fleet still
//! has not been placed after the configured number of attempts, the whole board is
//! discarded and placement starts over on an empty board.
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    board::{Board, BoardSetup, Coordinate, Dimensions},
    config::GameConfig,
    ships::Ship,
};

/// Make a single attempt at placing the configured fleet on an empty board. Returns
/// `None` if the attempt budget ran out first; the caller should start over.
pub fn try_random_board<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Option<Board> {
    let dim = Dimensions::new(config.size);
    let mut setup = BoardSetup::new(dim).with_buffer_reveal(config.buffer_reveal);
    let mut attempts = 0;
    for &len in config.fleet.iter() {
        loop {
            attempts += 1;
            if attempts > config.max_placement_attempts {
                return None;
            }
            let bow = random_coordinate(rng, &dim);
            let ship = Ship::new(bow, len, rng.gen());
            match setup.place_ship(ship) {
                Ok(()) => break,
                Err(err) => trace!(%err, attempts, "placement rejected"),
            }
        }
    }
    setup.start().ok()
}

/// Place the configured fleet at random, starting over as many times as needed.
///
/// The configuration should pass [`GameConfig::validate`]; a fleet that can never fit
/// makes this loop forever.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Board {
    let mut rounds = 1;
    loop {
        if let Some(board) = try_random_board(rng, config) {
            debug!(rounds, "generated board");
            return board;
        }
        debug!(rounds, "placement attempts exhausted, starting over");
        rounds += 1;
    }
}

/// Draw a uniformly random cell of the board.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, dim: &Dimensions) -> Coordinate {
    let size = dim.size() as isize;
    Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size))
}
