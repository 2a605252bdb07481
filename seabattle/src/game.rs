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

//! Playing a match.
//!
//! [`Actor`] is anything that can pick where to fire: [`HumanActor`] reads coordinates
//! from a line-based input, [`ComputerActor`] fires at random. [`Game`] owns both
//! boards, lets the actors take turns against each other's board and decides the
//! winner.

pub use self::{
    actor::{Actor, Shot},
    controller::{Game, MatchState},
    human::{parse_target, HumanActor, MalformedInput},
};
#[cfg(feature = "rng_gen")]
pub use self::computer::ComputerActor;

mod actor;
#[cfg(feature = "rng_gen")]
mod computer;
mod controller;
mod human;

/// Seat in a two player game. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Position of this player's board and actor in a [`Game`].
    fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}
