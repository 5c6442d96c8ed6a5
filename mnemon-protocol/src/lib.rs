//! Mnemon LCD link protocol
//!
//! The game board drives a remote character LCD module over a UART. The
//! module only stores glyphs in slots; all layout happens on the board.
//!
//! Every message is one binary frame:
//! ```text
//! ┌───────┬──────┬────────┬─────────────┬──────────┐
//! │ START │ TYPE │ LENGTH │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B   │ 1B     │ 0–16B       │ 1B       │
//! └───────┴──────┴────────┴─────────────┴──────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{LcdMessage, LCD_SLOTS};
