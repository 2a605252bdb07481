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

use std::io::{self, Write};

use rand::Rng;

use crate::{
    board::{random::random_coordinate, Coordinate, Dimensions, ShotError},
    game::Actor,
};

/// An [`Actor`] that fires at uniformly random cells and announces each choice on
/// `out`. It keeps no memory of earlier shots; repeats are rejected by the board and
/// it simply draws again.
pub struct ComputerActor<R, W> {
    name: String,
    rng: R,
    out: W,
}

impl<R, W> ComputerActor<R, W> {
    pub fn new(name: impl Into<String>, rng: R, out: W) -> Self {
        Self {
            name: name.into(),
            rng,
            out,
        }
    }

    /// Get a reference to the output this actor announces its moves on.
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<R: Rng, W: Write> Actor for ComputerActor<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn request_target(&mut self, dim: &Dimensions) -> io::Result<Coordinate> {
        let target = random_coordinate(&mut self.rng, dim);
        writeln!(self.out, "{} fires at: {}", self.name, target)?;
        Ok(target)
    }

    fn reject(&mut self, err: &ShotError) -> io::Result<()> {
        writeln!(self.out, "Can't fire at {}: {}.", err.coord(), err.reason())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        board::{BoardSetup, ShotOutcome},
        ships::{Orientation, Ship},
    };

    #[test]
    fn announces_in_bounds_targets() {
        let mut computer = ComputerActor::new("Computer", StdRng::seed_from_u64(11), Vec::new());
        let dim = Dimensions::new(6);
        for _ in 0..100 {
            let target = computer.request_target(&dim).unwrap();
            assert!(dim.contains(target));
        }
        let out = String::from_utf8(computer.output().clone()).unwrap();
        assert_eq!(out.lines().count(), 100);
        assert!(out.lines().all(|line| line.starts_with("Computer fires at: ")));
    }

    #[test]
    fn eventually_clears_a_full_board() {
        let mut setup = BoardSetup::new(Dimensions::new(3));
        setup
            .place_ship(Ship::new(Coordinate::new(0, 0), 3, Orientation::Vertical))
            .unwrap();
        let mut board = setup.start().unwrap();
        let mut computer = ComputerActor::new("Computer", StdRng::seed_from_u64(5), io::sink());
        let mut destroyed = false;
        for _ in 0..9 {
            if board.defeated() {
                break;
            }
            let shot = computer.take_turn(&mut board).unwrap();
            destroyed |= shot.outcome == ShotOutcome::Destroyed;
        }
        assert!(destroyed);
        assert!(board.defeated());
    }
}
