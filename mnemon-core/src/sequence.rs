//! Round sequence and its generation
//!
//! A sequence is a 16-bit pattern: bit `k` is the expected move for round
//! `k` (0 = button/indicator A, 1 = button/indicator B). It is sampled from
//! the free-running counter at the moment the player presses start, so the
//! player's reaction time is the entropy.

use core::num::NonZeroU16;

use mnemon_hal::{Button, ButtonInput, Indicator};

use crate::config::ROUNDS;
use crate::timing::EntropySource;

/// Target pattern for one game
///
/// Never zero; immutable for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence(NonZeroU16);

impl Sequence {
    /// Wrap a raw sample, rejecting zero
    pub fn new(raw: u16) -> Option<Self> {
        NonZeroU16::new(raw).map(Self)
    }

    /// Raw 16-bit pattern
    pub fn raw(self) -> u16 {
        self.0.get()
    }

    /// Bit for a step (0 or 1); steps past the last round wrap
    pub fn bit(self, step: u8) -> u8 {
        ((self.raw() >> (step % ROUNDS)) & 0x01) as u8
    }

    /// Button the player must press at a step
    pub fn expected(self, step: u8) -> Button {
        match self.bit(step) {
            0 => Button::A,
            _ => Button::B,
        }
    }

    /// Indicator flashed at a step during playback
    pub fn indicator(self, step: u8) -> Indicator {
        self.expected(step).indicator()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sequence {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Sequence({=u16:#06x})", self.raw());
    }
}

/// Produces a fresh sequence when the player presses start
#[derive(Debug, Clone, Copy)]
pub struct SequenceGenerator {
    start: Button,
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new(Button::A)
    }
}

impl SequenceGenerator {
    /// Create a generator gated on the given start button
    pub fn new(start: Button) -> Self {
        Self { start }
    }

    /// Block until start is held and the entropy sample is non-zero
    ///
    /// No debounce: any instantaneous read of the button satisfies the gate.
    /// A zero sample simply keeps the loop going.
    pub fn generate<B, E>(&self, buttons: &mut B, entropy: &E) -> Sequence
    where
        B: ButtonInput,
        E: EntropySource,
    {
        loop {
            if buttons.is_pressed(self.start) {
                if let Some(sequence) = Sequence::new(entropy.sample_entropy()) {
                    return sequence;
                }
            }
        }
    }
}
