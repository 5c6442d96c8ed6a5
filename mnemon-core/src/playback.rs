//! Round playback
//!
//! Each round replays the whole prefix of the sequence from step 0, one more
//! step than the previous round, the way the classic game does.

use mnemon_hal::{CharDisplay, IndicatorOutput};

use crate::config::Timings;
use crate::render::DisplayRenderer;
use crate::sequence::Sequence;
use crate::timing::Delay;

/// Word shown before each flash
pub const WATCH_TEXT: &str = "WATCH";

/// Replays sequence prefixes on the indicators
#[derive(Debug, Clone, Copy)]
pub struct PlaybackEngine {
    watch_pause: u16,
    flash_duration: u16,
}

impl PlaybackEngine {
    /// Create an engine with the given pause lengths
    pub fn new(timings: &Timings) -> Self {
        Self {
            watch_pause: timings.watch_pause,
            flash_duration: timings.flash_duration,
        }
    }

    /// Flash steps `0..=round` of the sequence
    ///
    /// For every step: show `WATCH`, pause, light the step's indicator with
    /// the other forced off, hold, then turn both off.
    pub fn play_round<D, L, T>(
        &self,
        sequence: Sequence,
        round: u8,
        renderer: &mut DisplayRenderer<D>,
        indicators: &mut L,
        delay: &mut T,
    ) where
        D: CharDisplay,
        L: IndicatorOutput,
        T: Delay,
    {
        for step in 0..=round {
            renderer.show_word(WATCH_TEXT);
            delay.wait(self.watch_pause);
            indicators.show_only(sequence.indicator(step));
            delay.wait(self.flash_duration);
            indicators.set_all(false);
        }
    }
}
