//! Commands understood by the LCD module
//!
//! All traffic flows from the game board to the module. The module keeps a
//! 7-slot glyph buffer (slot 0 hidden) and shows slots 1 to 6.

use crate::frame::{Frame, FrameError};

// Message type IDs
pub const MSG_CLEAR: u8 = 0x10;
pub const MSG_GLYPH: u8 = 0x11;
pub const MSG_RESET: u8 = 0x1F;

/// Slots addressable on the module
pub const LCD_SLOTS: u8 = 7;

/// Messages from the game board to the LCD module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdMessage {
    /// Blank every slot
    Clear,
    /// Store one glyph in a slot
    Glyph { slot: u8, ch: u8 },
    /// Return the module to its power-on state
    Reset,
}

impl LcdMessage {
    /// Encode this message into a frame
    ///
    /// Fails with [`FrameError::InvalidSlot`] if a glyph would land past the
    /// last slot.
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match *self {
            LcdMessage::Clear => Ok(Frame::empty(MSG_CLEAR)),
            LcdMessage::Glyph { slot, ch } => {
                check_slot(slot)?;
                Frame::new(MSG_GLYPH, &[slot, ch])
            }
            LcdMessage::Reset => Ok(Frame::empty(MSG_RESET)),
        }
    }

    /// Decode a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let payload = frame.payload.as_slice();
        match frame.msg_type {
            MSG_CLEAR if payload.is_empty() => Ok(LcdMessage::Clear),
            MSG_RESET if payload.is_empty() => Ok(LcdMessage::Reset),
            MSG_GLYPH => match *payload {
                [slot, ch] => {
                    check_slot(slot)?;
                    Ok(LcdMessage::Glyph { slot, ch })
                }
                _ => Err(FrameError::InvalidFrame),
            },
            _ => Err(FrameError::InvalidFrame),
        }
    }
}

fn check_slot(slot: u8) -> Result<(), FrameError> {
    if slot >= LCD_SLOTS {
        return Err(FrameError::InvalidSlot);
    }
    Ok(())
}
