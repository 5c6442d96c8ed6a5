//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in mnemon-hal:
//!
//! - Push-buttons and indicator lights on `embedded-hal` digital pins
//! - The character display as a remote LCD module behind an
//!   `embedded-io` serial writer

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod lcd;
pub mod panel;

pub use lcd::{LinkError, SerialLcd};
pub use panel::{PinButtons, PinIndicators};
