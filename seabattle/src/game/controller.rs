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

//! Turn order and win detection.
use std::io::{self, Write};

use tracing::{debug, info};

use crate::{
    board::{Board, ShotOutcome},
    game::{Actor, Player},
};

const SEPARATOR: &str = "--------------------";

/// Where the match stands between shots.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchState {
    /// Waiting for the given player to fire.
    AwaitingTurn(Player),
    /// Every ship of the loser's board has been destroyed.
    GameOver { winner: Player },
}

/// Handles gameplay. Owns both boards and both actors; `P1`'s actor fires at `P2`'s
/// board and the other way around.
pub struct Game<'a, W> {
    /// Gameplay boards for the players, indexed by [`Player`].
    boards: [Board; 2],

    /// Actors choosing targets for the players, indexed by [`Player`].
    actors: [Box<dyn Actor + 'a>; 2],

    /// Player who fires on even turns.
    first: Player,

    /// Counter for the current turn. A shot that grants another shot does not advance
    /// it.
    turn: usize,

    state: MatchState,

    /// Where boards and announcements are written.
    out: W,
}

impl<'a, W: Write> Game<'a, W> {
    /// Set up a match where `P1` owns `boards[0]` and moves first.
    pub fn new(boards: [Board; 2], actors: [Box<dyn Actor + 'a>; 2], out: W) -> Self {
        Self {
            boards,
            actors,
            first: Player::P1,
            turn: 0,
            state: MatchState::AwaitingTurn(Player::P1),
            out,
        }
    }

    /// Choose which player fires the first shot. Only meaningful before the first step.
    pub fn with_first_player(mut self, first: Player) -> Self {
        self.first = first;
        self.state = MatchState::AwaitingTurn(first);
        self
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the winner once the match is over.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            MatchState::GameOver { winner } => Some(winner),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    /// Number of turns that have passed. Extra shots after a hit belong to the same turn.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Get the board owned by the given player.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Get the actor playing for the given player.
    pub fn actor(&self, player: Player) -> &dyn Actor {
        self.actors[player.index()].as_ref()
    }

    /// Get a reference to the output the match is written to.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Extract the output from the match.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Play one shot: show the boards, let the current player fire until the opponent's
    /// board accepts a target, then decide who goes next. Does nothing once the match
    /// is over.
    pub fn step(&mut self) -> io::Result<MatchState> {
        let current = match self.state {
            MatchState::AwaitingTurn(player) => player,
            over @ MatchState::GameOver { .. } => return Ok(over),
        };
        self.show_boards()?;
        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "{} to move!", self.actors[current.index()].name())?;

        let target = current.opponent();
        let shot = self.actors[current.index()].take_turn(&mut self.boards[target.index()])?;
        writeln!(self.out, "{}", describe(shot.outcome))?;
        debug!(player = ?current, target = %shot.target, outcome = ?shot.outcome, "shot resolved");

        if !shot.repeat() {
            self.turn += 1;
        }
        self.state = match self.loser() {
            Some(loser) => MatchState::GameOver {
                winner: loser.opponent(),
            },
            None => MatchState::AwaitingTurn(self.player_for_turn()),
        };
        if let MatchState::GameOver { winner } = self.state {
            info!(winner = ?winner, turns = self.turn, "match over");
            self.show_boards()?;
            writeln!(self.out, "{}", SEPARATOR)?;
            writeln!(self.out, "{} wins!", self.actors[winner.index()].name())?;
        }
        Ok(self.state)
    }

    /// Step until one fleet is destroyed and return the winner.
    pub fn run(&mut self) -> io::Result<Player> {
        info!(first = ?self.first, "match started");
        loop {
            if let MatchState::GameOver { winner } = self.step()? {
                return Ok(winner);
            }
        }
    }

    /// Player whose turn it is according to the turn counter.
    fn player_for_turn(&self) -> Player {
        if self.turn % 2 == 0 {
            self.first
        } else {
            self.first.opponent()
        }
    }

    /// The player whose whole fleet is destroyed, if any.
    fn loser(&self) -> Option<Player> {
        [Player::P1, Player::P2]
            .iter()
            .copied()
            .find(|player| self.boards[player.index()].defeated())
    }

    fn show_boards(&mut self) -> io::Result<()> {
        for &player in [Player::P1, Player::P2].iter() {
            writeln!(self.out, "{}", SEPARATOR)?;
            writeln!(self.out, "{}'s board:", self.actors[player.index()].name())?;
            writeln!(self.out, "{}", self.boards[player.index()])?;
        }
        Ok(())
    }
}

/// Announcement for the outcome of a shot.
fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Destroyed => "Ship destroyed!",
    }
}
