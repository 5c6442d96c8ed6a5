//! Configuration type definitions
//!
//! Every pause is expressed in delay units: one unit is one period of the
//! periodic counter (about 10 ms on the reference board).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::render::ERROR_TEXT;

/// Rounds per game
pub const ROUNDS: u8 = 16;

/// Widest supported display
pub const MAX_DISPLAY_WIDTH: usize = 6;

/// Display width of the reference board
pub const DEFAULT_DISPLAY_WIDTH: usize = 6;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width cannot hold the error literal or exceeds the supported maximum
    InvalidDisplayWidth,
    /// Tick period of zero
    InvalidTickPeriod,
    /// A pause of zero units
    ZeroPause,
}

/// Pause lengths in delay units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timings {
    /// Page time for each word of a phrase
    pub word_pause: u16,
    /// Time per scroll step
    pub scroll_step: u16,
    /// Pauses in the per-round prelude
    pub round_pause: u16,
    /// Time "WATCH" is shown before each flash
    pub watch_pause: u16,
    /// Time an indicator stays lit during playback
    pub flash_duration: u16,
    /// Re-poll interval while a button is held
    pub debounce_poll: u16,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            word_pause: 40,     // 400ms
            scroll_step: 20,    // 200ms
            round_pause: 50,    // 500ms
            watch_pause: 25,    // 250ms
            flash_duration: 25, // 250ms
            debounce_poll: 3,   // 30ms
        }
    }
}

impl Timings {
    fn all(&self) -> [u16; 6] {
        [
            self.word_pause,
            self.scroll_step,
            self.round_pause,
            self.watch_pause,
            self.flash_duration,
            self.debounce_poll,
        ]
    }
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Number of visible display slots
    pub display_width: usize,
    /// Periodic counter period in milliseconds
    pub tick_period_ms: u16,
    /// Pause lengths
    pub timings: Timings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            tick_period_ms: 10,
            timings: Timings::default(),
        }
    }
}

impl GameConfig {
    /// Check the configuration for values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width < ERROR_TEXT.len() || self.display_width > MAX_DISPLAY_WIDTH {
            return Err(ConfigError::InvalidDisplayWidth);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        if self.timings.all().contains(&0) {
            return Err(ConfigError::ZeroPause);
        }
        Ok(())
    }

    /// Convert a duration in milliseconds to delay units, rounding up
    pub fn ms_to_units(&self, ms: u32) -> u16 {
        let period = u32::from(self.tick_period_ms.max(1));
        let units = ms.div_ceil(period);
        units.min(u32::from(u16::MAX)) as u16
    }
}
