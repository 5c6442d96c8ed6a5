//! Board-agnostic game logic for the Mnemon memory game
//!
//! This crate contains everything that does not depend on a specific board:
//!
//! - Cooperative delays over the periodic tick
//! - Text rendering onto the fixed character row (words, phrases,
//!   scrolling, numbers)
//! - Sequence generation from timer jitter
//! - Round playback and input verification
//! - The game state machine and controller
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod game;
pub mod input;
pub mod playback;
pub mod render;
pub mod sequence;
pub mod timing;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, GameConfig, Timings, ROUNDS};
pub use game::{GameController, GameOutcome};
pub use sequence::Sequence;
