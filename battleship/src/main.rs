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

use std::{
    io::{self, BufReader},
    process,
};

use clap::{value_t, App, Arg, ArgMatches};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use seabattle::{
    board::random::random_board,
    config::{BufferReveal, GameConfig},
    game::{ComputerActor, Game, HumanActor, Player},
};

fn main() {
    // Logs go to stderr so they don't interleave with the boards. Run with
    // `RUST_LOG=seabattle=debug` to see them.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first-player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of both boards")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for ship placement and computer moves, for repeatable games")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("buffer_reveal")
                .long("buffer-reveal")
                .value_name("MODE")
                .help("whether water revealed around a destroyed ship can still be shot")
                .takes_value(true)
                .possible_values(&["blocking", "cosmetic"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .value_name("N")
                .help("placement attempts before a board is generated again from scratch")
                .takes_value(true),
        )
        .get_matches();

    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        StdRng::from_entropy()
    };

    let config = build_config(&matches, &mut rng);
    if let Err(err) = config.validate() {
        eprintln!("error: {}", err);
        process::exit(2);
    }

    greet();
    match play(&config, rng) {
        Ok(winner) => info!(?winner, "game finished"),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => info!("input closed, quitting"),
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}

/// Build the game settings from the command line, falling back to the classic game.
fn build_config(matches: &ArgMatches, rng: &mut impl Rng) -> GameConfig {
    let mut config = GameConfig::default();
    if matches.is_present("size") {
        config.size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    }
    if matches.is_present("max_attempts") {
        config.max_placement_attempts =
            value_t!(matches, "max_attempts", usize).unwrap_or_else(|e| e.exit());
    }
    if let Some(mode) = matches.value_of("buffer_reveal") {
        config.buffer_reveal = match mode.to_ascii_lowercase().as_str() {
            "cosmetic" => BufferReveal::Cosmetic,
            _ => BufferReveal::Blocking,
        };
    }
    config.first_player = choose_first(matches, rng);
    config
}

/// The human always plays `P1`; decide which seat fires first.
fn choose_first(matches: &ArgMatches, rng: &mut impl Rng) -> Player {
    match matches.value_of("first_player").map(str::to_ascii_lowercase) {
        None => Player::P1,
        Some(choice) => match choice.as_str() {
            "human" | "me" => Player::P1,
            "computer" | "bot" => Player::P2,
            "random" | "rand" => {
                if rng.gen() {
                    Player::P1
                } else {
                    Player::P2
                }
            }
            _ => unreachable!(),
        },
    }
}

fn greet() {
    println!("-------------------");
    println!("   Welcome to      ");
    println!("   sea battle!     ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}

/// Deal random fleets and play the human against the computer until someone wins.
fn play(config: &GameConfig, mut rng: StdRng) -> io::Result<Player> {
    let human_board = random_board(&mut rng, config);
    let mut computer_board = random_board(&mut rng, config);
    computer_board.set_hidden(true);

    let human = HumanActor::new("Player", BufReader::new(io::stdin()), io::stdout());
    let computer = ComputerActor::new("Computer", StdRng::seed_from_u64(rng.gen()), io::stdout());

    let mut game = Game::new(
        [human_board, computer_board],
        [Box::new(human), Box::new(computer)],
        io::stdout(),
    )
    .with_first_player(config.first_player);
    game.run()
}
