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

use std::io;

use tracing::debug;

use crate::board::{Board, Coordinate, Dimensions, ShotError, ShotOutcome};

/// A shot that the opponent's board accepted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Shot {
    /// Cell that was fired at.
    pub target: Coordinate,
    /// What the shot did.
    pub outcome: ShotOutcome,
}

impl Shot {
    /// Whether the shooter gets to fire again. Only a hit that leaves the ship afloat
    /// earns another shot.
    pub fn repeat(&self) -> bool {
        self.outcome == ShotOutcome::Hit
    }
}

/// Something that chooses where to fire.
pub trait Actor {
    /// Name used when announcing this actor's moves.
    fn name(&self) -> &str;

    /// Choose the next cell to fire at on a board of the given dimensions. The target
    /// may be off the board or already shot; the board rejects it and the actor is
    /// asked again.
    fn request_target(&mut self, dim: &Dimensions) -> io::Result<Coordinate>;

    /// Tell the actor its target was rejected.
    fn reject(&mut self, err: &ShotError) -> io::Result<()>;

    /// Keep requesting targets until one is accepted by the opponent's board.
    fn take_turn(&mut self, opponent: &mut Board) -> io::Result<Shot> {
        loop {
            let target = self.request_target(opponent.dimensions())?;
            match opponent.shoot(target) {
                Ok(outcome) => return Ok(Shot { target, outcome }),
                Err(err) => {
                    debug!(actor = self.name(), %err, "shot rejected");
                    self.reject(&err)?;
                }
            }
        }
    }
}
