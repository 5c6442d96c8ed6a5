//! Mnemon Hardware Abstraction Layer
//!
//! This crate defines the hardware interfaces the game core consumes. Board
//! support code (and the host-side test doubles) implement them; the game
//! logic never touches a register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  mnemon-core (game logic)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mnemon-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ mnemon-drivers│       │ mnemon-       │
//! │ (embedded-hal)│       │ firmware      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`display::CharDisplay`] - Single-character writes into display slots
//! - [`gpio::ButtonInput`], [`gpio::IndicatorOutput`] - The two buttons and lights
//! - [`gpio::InputRegister`] - Raw input port exposing both buttons as bits
//! - [`timer::FreeRunningCounter`], [`timer::PeriodicTimer`] - The two counters

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use display::{CharDisplay, ADDRESSABLE_SLOTS, BLANK};
pub use gpio::{
    ActiveLevel, Button, ButtonInput, Indicator, IndicatorOutput, InputRegister, RegisterButtons,
};
pub use timer::{FreeRunningCounter, PeriodicTimer};
