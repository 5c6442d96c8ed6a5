//! Remote LCD module on a serial link
//!
//! Each glyph write becomes one `Glyph` frame. The link is write-only, so a
//! failed or rejected frame cannot be retried; it is counted and dropped.

use embedded_io::Write;
use mnemon_hal::CharDisplay;
use mnemon_protocol::{FrameError, LcdMessage, MAX_FRAME_SIZE};

/// Error sending a message to the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Message could not be framed
    Frame(FrameError),
    /// Serial write failed
    Write,
}

/// Character display behind a serial writer
pub struct SerialLcd<W> {
    writer: W,
    dropped_frames: u32,
}

impl<W: Write> SerialLcd<W> {
    /// Wrap a serial writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            dropped_frames: 0,
        }
    }

    /// Reset the module and blank it
    pub fn init(&mut self) -> Result<(), LinkError> {
        self.send(&LcdMessage::Reset)?;
        self.send(&LcdMessage::Clear)
    }

    /// Frame and send one message
    pub fn send(&mut self, msg: &LcdMessage) -> Result<(), LinkError> {
        let frame = msg.to_frame().map_err(LinkError::Frame)?;
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(&mut buffer).map_err(LinkError::Frame)?;
        self.writer
            .write_all(&buffer[..len])
            .map_err(|_| LinkError::Write)?;
        self.writer.flush().map_err(|_| LinkError::Write)
    }

    /// Frames lost since the counter was last taken
    pub fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }

    /// Read and reset the dropped-frame counter
    pub fn take_dropped_frames(&mut self) -> u32 {
        core::mem::take(&mut self.dropped_frames)
    }

    /// Release the serial writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CharDisplay for SerialLcd<W> {
    fn write_char(&mut self, ch: u8, slot: u8) {
        if self.send(&LcdMessage::Glyph { slot, ch }).is_err() {
            self.dropped_frames = self.dropped_frames.saturating_add(1);
        }
    }
}
