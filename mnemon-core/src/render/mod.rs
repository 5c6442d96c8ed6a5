//! Text rendering onto the character row
//!
//! Every render first clears the display and then fills a subset of the
//! slots. Nothing about earlier content is cached.
//!
//! Errors are presentational only: a word that does not fit or a number
//! with too many digits puts `ERROR` on the display and the call returns
//! normally.

pub mod layout;
pub mod number;

pub use layout::{layout_word, scroll_steps, scroll_window, terminated, words, Row, ERROR_TEXT};
pub use number::decimal_digits;

use mnemon_hal::{CharDisplay, ADDRESSABLE_SLOTS, BLANK};

use crate::config::{GameConfig, Timings, MAX_DISPLAY_WIDTH};
use crate::timing::Delay;

/// Rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Word longer than the display
    WordTooLong,
    /// Number with more digits than the display
    NumberOutOfRange,
}

/// Renderer for words, phrases, scrolling text, and numbers
pub struct DisplayRenderer<D> {
    display: D,
    width: usize,
    word_pause: u16,
    scroll_step: u16,
}

impl<D: CharDisplay> DisplayRenderer<D> {
    /// Create a renderer for a display `width` slots wide
    ///
    /// Widths past [`MAX_DISPLAY_WIDTH`] are clamped to it.
    pub fn new(display: D, width: usize, timings: &Timings) -> Self {
        Self {
            display,
            width: width.min(MAX_DISPLAY_WIDTH),
            word_pause: timings.word_pause,
            scroll_step: timings.scroll_step,
        }
    }

    /// Create a renderer from a game configuration
    pub fn from_config(display: D, config: &GameConfig) -> Self {
        Self::new(display, config.display_width, &config.timings)
    }

    /// Number of visible slots
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the underlying display mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Blank every addressable slot, including the hidden slot 0
    pub fn clear(&mut self) {
        for slot in 0..ADDRESSABLE_SLOTS {
            self.display.write_char(BLANK, slot);
        }
    }

    /// Show a single word from slot 1
    ///
    /// A word wider than the display shows `ERROR` instead. A null byte
    /// ends the word.
    pub fn show_word(&mut self, text: &str) {
        self.clear();
        self.draw_word(terminated(text.as_bytes()));
    }

    /// Show a phrase one word at a time
    ///
    /// Words are separated by runs of spaces. Each word is held for the
    /// word pause and then cleared. A word wider than the display shows
    /// `ERROR` for its page.
    pub fn show_phrase(&mut self, text: &str, delay: &mut impl Delay) {
        self.clear();
        let mut shown = 0usize;
        for word in words(terminated(text.as_bytes())) {
            self.draw_word(word);
            delay.wait(self.word_pause);
            self.clear();
            shown += 1;
        }
        if shown == 0 {
            delay.wait(self.word_pause);
            self.clear();
        }
    }

    /// Scroll text right to left across the display
    ///
    /// The sweep starts and ends with the text fully off screen. The display
    /// is cleared afterwards.
    pub fn scroll(&mut self, text: &str, delay: &mut impl Delay) {
        let bytes = terminated(text.as_bytes());
        self.clear();
        for offset in 0..scroll_steps(bytes.len(), self.width) {
            let row = scroll_window(bytes, offset, self.width);
            // Every slot is rewritten each step, blanks included
            for (i, &ch) in row.cells().iter().enumerate() {
                self.display.write_char(ch, (i + 1) as u8);
            }
            delay.wait(self.scroll_step);
        }
        self.clear();
    }

    /// Show a non-negative integer right-aligned
    ///
    /// A number with more digits than the display shows `ERROR` instead.
    pub fn show_number(&mut self, n: u32) {
        self.clear();
        match decimal_digits(n, self.width) {
            Ok(row) => self.draw(&row),
            Err(_) => self.draw(&Row::error(self.width)),
        }
    }

    fn draw_word(&mut self, word: &[u8]) {
        match layout_word(word, self.width) {
            Ok(row) => self.draw(&row),
            Err(_) => self.draw(&Row::error(self.width)),
        }
    }

    /// Write the non-blank cells of a row onto a cleared display
    fn draw(&mut self, row: &Row) {
        for (slot, ch) in row.glyphs() {
            self.display.write_char(ch, slot);
        }
    }
}
