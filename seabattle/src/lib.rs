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

//! Sea battle on a small square grid.
//!
//! Ships are straight lines that may not touch, not even diagonally. Each player's
//! board goes through two phases: a [`BoardSetup`][board::BoardSetup] that accepts
//! placements, and a [`Board`][board::Board] that accepts shots. A
//! [`Game`][game::Game] pits two [`Actor`][game::Actor]s against each other's boards
//! until one fleet is destroyed.
//!
//! With the `rng_gen` feature (enabled by default), [`board::random`] can fill a board
//! with a random fleet and [`game::ComputerActor`] plays by firing at random cells.

pub mod board;
pub mod config;
pub mod game;
pub mod ships;
