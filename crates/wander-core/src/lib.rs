//! wander-core: Core game logic for World of Wander
//!
//! This crate contains all game logic with no terminal dependencies.
//! Locations live in a [`dungeon::LocationRegistry`] owned by the
//! [`GameState`]; commands go through [`GameLoop`] and come back as an
//! [`Outcome`] for whichever front end is driving the game.

pub mod action;
pub mod dungeon;
pub mod object;
pub mod world;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{GameLoop, GameState, Outcome};
pub use rng::GameRng;
