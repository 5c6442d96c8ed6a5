//! Frame encoding and decoding
//!
//! Frame format:
//! - START (1 byte): 0x5A synchronization byte
//! - TYPE (1 byte): message type identifier
//! - LENGTH (1 byte): payload length (0-16)
//! - PAYLOAD (0-16 bytes): type-specific data
//! - CHECKSUM (1 byte): XOR of TYPE, LENGTH, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0x5A;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 16;

/// Header (START, TYPE, LENGTH) plus trailing CHECKSUM
const OVERHEAD: usize = 4;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = OVERHEAD + MAX_PAYLOAD_SIZE;

/// Framing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Unknown type or malformed payload
    InvalidFrame,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Slot outside the module's addressable range
    InvalidSlot,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a frame with the given message type and payload
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { msg_type, payload })
    }

    /// Create a frame with no payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    /// Bytes this frame occupies on the wire
    pub fn encoded_len(&self) -> usize {
        OVERHEAD + self.payload.len()
    }

    fn checksum(msg_type: u8, length: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(msg_type ^ length, |acc, &b| acc ^ b)
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.encoded_len();
        let out = buffer.get_mut(..len).ok_or(FrameError::BufferTooSmall)?;

        let length = self.payload.len() as u8;
        let (header, rest) = out.split_at_mut(3);
        header.copy_from_slice(&[FRAME_START, self.msg_type, length]);
        let (body, checksum) = rest.split_at_mut(self.payload.len());
        body.copy_from_slice(&self.payload);
        checksum[0] = Self::checksum(self.msg_type, length, &self.payload);

        Ok(len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

/// Byte-at-a-time frame decoder
///
/// Bytes before a START byte are discarded, so the parser falls back into
/// step after line noise or a corrupted frame.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    msg_type: u8,
    length: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    WaitingForStart,
    WaitingForType,
    WaitingForLength,
    ReadingPayload,
    WaitingForChecksum,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a parser waiting for START
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForStart,
            msg_type: 0,
            length: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partial frame
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForStart;
        self.msg_type = 0;
        self.length = 0;
        self.payload.clear();
    }

    /// Check whether the parser is between frames
    pub fn is_idle(&self) -> bool {
        self.state == ParseState::WaitingForStart
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(frame))` when a frame completes and `Ok(None)` when
    /// more bytes are needed. On error the partial frame is dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForStart => {
                if byte == FRAME_START {
                    self.state = ParseState::WaitingForType;
                }
                Ok(None)
            }
            ParseState::WaitingForType => {
                self.msg_type = byte;
                self.state = ParseState::WaitingForLength;
                Ok(None)
            }
            ParseState::WaitingForLength => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::PayloadTooLarge);
                }
                self.length = byte;
                self.payload.clear();
                self.state = if byte == 0 {
                    ParseState::WaitingForChecksum
                } else {
                    ParseState::ReadingPayload
                };
                Ok(None)
            }
            ParseState::ReadingPayload => {
                // Bounded by the length check above
                let _ = self.payload.push(byte);
                if self.payload.len() == self.length as usize {
                    self.state = ParseState::WaitingForChecksum;
                }
                Ok(None)
            }
            ParseState::WaitingForChecksum => {
                let expected = Frame::checksum(self.msg_type, self.length, &self.payload);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }
                let frame = Frame {
                    msg_type: self.msg_type,
                    payload: core::mem::take(&mut self.payload),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed bytes until a frame completes
    ///
    /// Returns the frame and the number of bytes consumed. Bytes after the
    /// frame are left for the next call.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<(Option<Frame>, usize), FrameError> {
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(frame) = self.feed(byte)? {
                return Ok((Some(frame), i + 1));
            }
        }
        Ok((None, bytes.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_empty_payload() {
        let frame = Frame::empty(0x10);
        let mut buffer = [0u8; 8];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(&buffer[..4], &[FRAME_START, 0x10, 0, 0x10]);
    }

    #[test]
    fn test_encode_with_payload() {
        let frame = Frame::new(0x11, &[3, b'G']).unwrap();
        let encoded = frame.encode_to_vec().unwrap();
        assert_eq!(
            encoded.as_slice(),
            &[FRAME_START, 0x11, 2, 3, b'G', 0x11 ^ 2 ^ 3 ^ b'G']
        );
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let frame = Frame::new(0x12, b"ABCD").unwrap();
        let mut buffer = [0u8; 7];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_payload_too_large() {
        let payload = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(Frame::new(0x12, &payload), Err(FrameError::PayloadTooLarge));
    }

    #[test]
    fn test_parser_invalid_checksum() {
        let mut encoded = Frame::empty(0x10).encode_to_vec().unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0xFF;

        let mut parser = FrameParser::new();
        assert_eq!(parser.feed_bytes(&encoded), Err(FrameError::InvalidChecksum));
        assert!(parser.is_idle());
    }

    #[test]
    fn test_parser_rejects_oversized_length() {
        let mut parser = FrameParser::new();
        assert_eq!(parser.feed(FRAME_START), Ok(None));
        assert_eq!(parser.feed(0x12), Ok(None));
        assert_eq!(parser.feed(17), Err(FrameError::PayloadTooLarge));
        assert!(parser.is_idle());
    }

    #[test]
    fn test_parser_resync_after_garbage() {
        let encoded = Frame::empty(0x1F).encode_to_vec().unwrap();
        let mut data = Vec::<u8, 16>::new();
        data.extend_from_slice(&[0x00, 0xFF, 0x12, 0x34]).unwrap();
        data.extend_from_slice(&encoded).unwrap();

        let mut parser = FrameParser::new();
        let (frame, used) = parser.feed_bytes(&data).unwrap();
        assert_eq!(frame.map(|f| f.msg_type), Some(0x1F));
        assert_eq!(used, data.len());
    }

    #[test]
    fn test_parser_leaves_trailing_bytes() {
        let first = Frame::new(0x11, &[1, b'A']).unwrap().encode_to_vec().unwrap();
        let second = Frame::new(0x11, &[2, b'B']).unwrap().encode_to_vec().unwrap();
        let mut data = Vec::<u8, 16>::new();
        data.extend_from_slice(&first).unwrap();
        data.extend_from_slice(&second).unwrap();

        let mut parser = FrameParser::new();
        let (frame, used) = parser.feed_bytes(&data).unwrap();
        assert_eq!(frame.unwrap().payload.as_slice(), &[1, b'A']);
        let (frame, _) = parser.feed_bytes(&data[used..]).unwrap();
        assert_eq!(frame.unwrap().payload.as_slice(), &[2, b'B']);
    }

    proptest! {
        #[test]
        fn prop_frame_survives_the_wire(
            msg_type in any::<u8>(),
            payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
        ) {
            let original = Frame::new(msg_type, &payload).unwrap();
            let encoded = original.encode_to_vec().unwrap();
            prop_assert_eq!(encoded.len(), original.encoded_len());

            let mut parser = FrameParser::new();
            let (parsed, used) = parser.feed_bytes(&encoded).unwrap();
            prop_assert_eq!(parsed, Some(original));
            prop_assert_eq!(used, encoded.len());
        }
    }
}
