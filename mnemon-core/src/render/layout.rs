//! Pure text layout for the character row
//!
//! These functions decide what each visible slot shows. They never touch the
//! display, so the renderer can stay a thin loop over their output.

use mnemon_hal::BLANK;

use super::RenderError;
use crate::config::MAX_DISPLAY_WIDTH;

/// Literal shown when a word or number cannot be rendered
pub const ERROR_TEXT: &[u8] = b"ERROR";

/// Content of the visible slots
///
/// Cell `i` is shown in slot `i + 1`. Cells past `width` are unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Row {
    cells: [u8; MAX_DISPLAY_WIDTH],
    width: usize,
}

impl Row {
    /// All-blank row
    pub fn blank(width: usize) -> Self {
        Self {
            cells: [BLANK; MAX_DISPLAY_WIDTH],
            width: width.min(MAX_DISPLAY_WIDTH),
        }
    }

    /// Row holding the error literal from slot 1
    pub fn error(width: usize) -> Self {
        let mut row = Self::blank(width);
        for (i, &ch) in ERROR_TEXT.iter().enumerate().take(row.width) {
            row.cells[i] = ch;
        }
        row
    }

    /// Visible cells, slot 1 first
    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.width]
    }

    /// Glyph shown in a 1-based slot, if the slot is visible
    pub fn slot(&self, slot: usize) -> Option<u8> {
        slot.checked_sub(1).and_then(|i| self.cells().get(i).copied())
    }

    /// Iterate `(slot, glyph)` pairs for every non-blank cell
    pub fn glyphs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.cells()
            .iter()
            .enumerate()
            .filter(|&(_, &ch)| ch != BLANK)
            .map(|(i, &ch)| ((i + 1) as u8, ch))
    }

    pub(super) fn set(&mut self, index: usize, ch: u8) {
        if index < self.width {
            self.cells[index] = ch;
        }
    }
}

/// Text up to, not including, the first null byte
pub fn terminated(text: &[u8]) -> &[u8] {
    match text.iter().position(|&b| b == 0) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Lay out a single word from slot 1
///
/// Fails with [`RenderError::WordTooLong`] when the word does not fit.
/// A null byte ends the word.
pub fn layout_word(text: &[u8], width: usize) -> Result<Row, RenderError> {
    let text = terminated(text);
    if text.len() > width {
        return Err(RenderError::WordTooLong);
    }
    let mut row = Row::blank(width);
    for (i, &ch) in text.iter().enumerate() {
        row.set(i, ch);
    }
    Ok(row)
}

/// Split a phrase into words on runs of spaces
pub fn words(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(|&b| b == b' ').filter(|word| !word.is_empty())
}

/// Number of scroll steps needed to sweep `len` characters across the row
///
/// The first step is all blank, the last shows the final character in slot 1.
/// The sweep stops one frame short of the all-blank frame at offset `len + width`.
pub fn scroll_steps(len: usize, width: usize) -> usize {
    len + width
}

/// Window onto the text padded with `width` blanks on either side
///
/// At `offset` the window shows padded positions `offset..offset + width`;
/// anything outside the real text renders blank. A null byte ends the text.
pub fn scroll_window(text: &[u8], offset: usize, width: usize) -> Row {
    let text = terminated(text);
    let mut row = Row::blank(width);
    for i in 0..row.width {
        let padded = offset + i;
        if let Some(&ch) = padded.checked_sub(row.width).and_then(|pos| text.get(pos)) {
            row.set(i, ch);
        }
    }
    row
}
