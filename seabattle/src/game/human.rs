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

//! A player typing coordinates.
use std::io::{self, BufRead, Write};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::{
    board::{Coordinate, Dimensions, ShotError},
    game::Actor,
};

/// Matches a coordinate token: plain ASCII digits, no sign.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Reason a line typed by the player is not a coordinate.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MalformedInput {
    /// The line did not contain exactly two tokens.
    #[error("enter 2 coordinates, got {0}")]
    TokenCount(usize),
    /// A token was not a whole number.
    #[error("enter numbers, {0:?} is not one")]
    NotANumber(String),
}

/// Parse a line of the form `x y`, where `x` is the one-based row and `y` the one-based
/// column, into a zero-based [`Coordinate`]. Row or column `0` parses fine and ends up
/// off the board.
pub fn parse_target(line: &str) -> Result<Coordinate, MalformedInput> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(MalformedInput::TokenCount(tokens.len()));
    }
    let row = parse_number(tokens[0])?;
    let col = parse_number(tokens[1])?;
    Ok(Coordinate::new(row - 1, col - 1))
}

fn parse_number(token: &str) -> Result<isize, MalformedInput> {
    if !NUMBER.is_match(token) {
        return Err(MalformedInput::NotANumber(token.to_owned()));
    }
    // Digits only, so this fails only on overflow.
    token
        .parse()
        .map_err(|_| MalformedInput::NotANumber(token.to_owned()))
}

/// An [`Actor`] that asks a person for each target.
///
/// Prompts are written to `out` and answers read line by line from `input`. Lines that
/// do not parse are answered with a hint and the prompt is repeated; they never leave
/// this type as errors. Running out of input is reported as
/// [`io::ErrorKind::UnexpectedEof`].
pub struct HumanActor<B, W> {
    name: String,
    input: B,
    out: W,
    buf: Vec<u8>,
}

impl<B, W> HumanActor<B, W> {
    pub fn new(name: impl Into<String>, input: B, out: W) -> Self {
        Self {
            name: name.into(),
            input,
            out,
            buf: Vec::new(),
        }
    }

    /// Get a reference to the output this actor writes prompts to.
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<B: BufRead, W: Write> HumanActor<B, W> {
    /// Helper to print the prompt and read a line. Bytes that are not UTF-8 are
    /// replaced, so they fail to parse instead of failing the read.
    fn read_line(&mut self) -> io::Result<String> {
        write!(self.out, "Your move: ")?;
        self.out.flush()?;
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            writeln!(self.out)?;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a move",
            ));
        }
        Ok(String::from_utf8_lossy(&self.buf).into_owned())
    }
}

impl<B: BufRead, W: Write> Actor for HumanActor<B, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn request_target(&mut self, _dim: &Dimensions) -> io::Result<Coordinate> {
        loop {
            let line = self.read_line()?;
            match parse_target(&line) {
                Ok(coord) => return Ok(coord),
                Err(err) => {
                    debug!(input = line.trim(), %err, "malformed move");
                    writeln!(self.out, " Invalid move: {}. ", err)?;
                }
            }
        }
    }

    fn reject(&mut self, err: &ShotError) -> io::Result<()> {
        writeln!(self.out, "Can't fire at {}: {}.", err.coord(), err.reason())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        board::{BoardSetup, CellState, ShotOutcome},
        ships::{Orientation, Ship},
    };

    #[test]
    fn parses_one_based_row_then_column() {
        assert_eq!(parse_target("3 5\n"), Ok(Coordinate::new(2, 4)));
        assert_eq!(parse_target("  1\t1  "), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_target("0 2"), Ok(Coordinate::new(-1, 1)));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_target("3"), Err(MalformedInput::TokenCount(1)));
        assert_eq!(parse_target(""), Err(MalformedInput::TokenCount(0)));
        assert_eq!(parse_target("1 2 3"), Err(MalformedInput::TokenCount(3)));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(
            parse_target("a 2"),
            Err(MalformedInput::NotANumber("a".to_owned()))
        );
        assert_eq!(
            parse_target("2 -1"),
            Err(MalformedInput::NotANumber("-1".to_owned()))
        );
        assert_eq!(
            parse_target("+2 1"),
            Err(MalformedInput::NotANumber("+2".to_owned()))
        );
        assert!(parse_target("99999999999999999999999 1").is_err());
    }

    #[test]
    fn reprompts_until_valid() {
        let input = Cursor::new("3\nx y\n2 3\n");
        let mut human = HumanActor::new("Player", input, Vec::new());
        let target = human.request_target(&Dimensions::new(6)).unwrap();
        assert_eq!(target, Coordinate::new(1, 2));
        let out = String::from_utf8(human.output().clone()).unwrap();
        assert_eq!(out.matches("Your move: ").count(), 3);
        assert!(out.contains("enter 2 coordinates, got 1"));
        assert!(out.contains("\"x\" is not one"));
    }

    #[test]
    fn reprompts_after_undecodable_line() {
        let input = Cursor::new(&b"\xff\xfe\n2 3\n"[..]);
        let mut human = HumanActor::new("Player", input, Vec::new());
        let target = human.request_target(&Dimensions::new(6)).unwrap();
        assert_eq!(target, Coordinate::new(1, 2));
        let out = String::from_utf8(human.output().clone()).unwrap();
        assert_eq!(out.matches("Your move: ").count(), 2);
        assert_eq!(out.matches("Invalid move").count(), 1);
    }

    #[test]
    fn single_token_leaves_board_untouched() {
        let mut setup = BoardSetup::new(Dimensions::new(6));
        setup
            .place_ship(Ship::new(Coordinate::new(2, 2), 1, Orientation::Vertical))
            .unwrap();
        let mut board = setup.start().unwrap();
        let mut human = HumanActor::new("Player", Cursor::new("3\n3 3\n"), Vec::new());
        let shot = human.take_turn(&mut board).unwrap();
        assert_eq!(shot.target, Coordinate::new(2, 2));
        assert_eq!(shot.outcome, ShotOutcome::Destroyed);
        let marked = board
            .dimensions()
            .iter_coordinates()
            .flatten()
            .filter(|&c| board.cell(c) == Some(CellState::Miss))
            .count();
        assert_eq!(marked, 0);
    }

    #[test]
    fn retries_after_rejected_shot() {
        let mut setup = BoardSetup::new(Dimensions::new(6));
        setup
            .place_ship(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal))
            .unwrap();
        let mut board = setup.start().unwrap();
        let input = Cursor::new("7 1\n1 1\n1 1\n1 2\n");
        let mut human = HumanActor::new("Player", input, Vec::new());
        let first = human.take_turn(&mut board).unwrap();
        assert_eq!(first.outcome, ShotOutcome::Hit);
        assert!(first.repeat());
        let second = human.take_turn(&mut board).unwrap();
        assert_eq!(second.target, Coordinate::new(0, 1));
        assert_eq!(second.outcome, ShotOutcome::Destroyed);
        assert!(!second.repeat());
        let out = String::from_utf8(human.output().clone()).unwrap();
        assert!(out.contains("Can't fire at 7 1: that shot is off the board."));
        assert!(out.contains("Can't fire at 1 1: that cell was already shot."));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut human = HumanActor::new("Player", Cursor::new("5\n"), Vec::new());
        let err = human.request_target(&Dimensions::new(6)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
