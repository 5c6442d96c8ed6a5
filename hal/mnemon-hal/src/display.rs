//! Character display abstraction
//!
//! The display is a single row of character slots. Slot 0 exists in the
//! driver's addressing but is not visible; slots `1..=width` are.

/// Number of slots the driver can address (slot 0 plus six visible slots)
pub const ADDRESSABLE_SLOTS: u8 = 7;

/// Glyph written to blank a slot
pub const BLANK: u8 = b' ';

/// Character display driver
///
/// Writes are assumed to always succeed. Implementations that talk to a
/// remote module over a fallible link must absorb the error themselves.
pub trait CharDisplay {
    /// Write one ASCII glyph into a slot (`0..ADDRESSABLE_SLOTS`)
    fn write_char(&mut self, ch: u8, slot: u8);
}

impl<T: CharDisplay + ?Sized> CharDisplay for &mut T {
    fn write_char(&mut self, ch: u8, slot: u8) {
        (**self).write_char(ch, slot);
    }
}
