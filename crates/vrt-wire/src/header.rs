//! # VRT Header Word
//!
//! Every packet in this family opens with a fixed 28-byte prologue followed
//! by the payload and, on data packets that request one, a 4-byte trailer:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |  Type |C|T|0 0|  Time Mode    |     Packet Size (words)       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                       Stream Identifier                       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                     Class Identifier (64)                     |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                  Integer-Seconds Timestamp                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                  Fractional Timestamp (64)                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! All numeric fields are big-endian. The size field counts 32-bit words
//! over the whole packet (prologue + payload + trailer), so the buffer
//! length is always a multiple of four.

use crate::error::HeaderError;
use std::fmt;

// ─── Constants ───────────────────────────────────────────────────────────────

/// Size of one wire word in bytes.
pub const WORD_SIZE: usize = 4;

/// Fixed prologue: header word + stream id + class id + timestamps.
pub const PROLOGUE_SIZE: usize = 28;

/// Trailer length on data packets that carry one.
pub const TRAILER_SIZE: usize = 4;

/// Largest encodable packet: the size field is a 16-bit word count.
pub const MAX_PACKET_SIZE: usize = u16::MAX as usize * WORD_SIZE;

/// Class-identifier-present flag in byte 0.
pub const FLAG_CLASS_ID: u8 = 0x08;

/// Trailer-present flag in byte 0 (data packet types only).
pub const FLAG_TRAILER: u8 = 0x04;

/// Default time mode byte: GPS integer seconds + real-time fractional.
pub const DEFAULT_TIME_MODE: u8 = 0xA0;

// ─── Packet Type ─────────────────────────────────────────────────────────────

/// The packet type nibble carried in the top four bits of byte 0.
///
/// "Unidentified" types omit a stream-correlation meaning for the stream
/// identifier word; the word itself is still present in this family's
/// prologue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PacketType {
    UnidentifiedData = 0,
    Data = 1,
    UnidentifiedExtData = 2,
    ExtData = 3,
    Context = 4,
    ExtContext = 5,
}

impl PacketType {
    /// Parse a type from the top nibble of byte 0.
    pub fn from_nibble(nibble: u8) -> Result<Self, HeaderError> {
        match nibble {
            0 => Ok(PacketType::UnidentifiedData),
            1 => Ok(PacketType::Data),
            2 => Ok(PacketType::UnidentifiedExtData),
            3 => Ok(PacketType::ExtData),
            4 => Ok(PacketType::Context),
            5 => Ok(PacketType::ExtContext),
            _ => Err(HeaderError::UnknownType { nibble }),
        }
    }

    /// The wire nibble for this type.
    pub const fn nibble(self) -> u8 {
        self as u8
    }

    /// Whether this is a data-family type (trailer word legal).
    pub const fn is_data(self) -> bool {
        (self as u8) <= 3
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PacketType::UnidentifiedData => "UnidentifiedData",
            PacketType::Data => "Data",
            PacketType::UnidentifiedExtData => "UnidentifiedExtData",
            PacketType::ExtData => "ExtData",
            PacketType::Context => "Context",
            PacketType::ExtContext => "ExtContext",
        };
        f.write_str(name)
    }
}

// ─── Header Word ─────────────────────────────────────────────────────────────

/// Decoded header word — the first four bytes of every packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Packet type from the top nibble of byte 0.
    pub packet_type: PacketType,
    /// Class-identifier block present (byte 0, bit 3).
    pub has_class_id: bool,
    /// Trailer word present (byte 0, bit 2; data types only).
    pub has_trailer: bool,
    /// Raw time mode byte (byte 1); low nibble is the modulo-16 packet count.
    pub time_mode: u8,
    /// Total packet size in 32-bit words.
    pub size_words: u16,
}

impl Header {
    /// Parse the header word and cross-check it against the buffer length.
    ///
    /// Fails when the buffer is shorter than the prologue, when the declared
    /// word count disagrees with the buffer length, or when the type nibble
    /// is not part of the closed set.
    pub fn parse(buf: &[u8]) -> Result<Self, HeaderError> {
        if buf.len() < PROLOGUE_SIZE {
            return Err(HeaderError::TooSmall {
                actual: buf.len(),
                required: PROLOGUE_SIZE,
            });
        }

        let b0 = buf[0];
        let packet_type = PacketType::from_nibble(b0 >> 4)?;
        let has_class_id = b0 & FLAG_CLASS_ID != 0;
        let has_trailer = b0 & FLAG_TRAILER != 0 && packet_type.is_data();
        let time_mode = buf[1];
        let size_words = u16::from_be_bytes([buf[2], buf[3]]);

        if has_trailer && buf.len() < PROLOGUE_SIZE + TRAILER_SIZE {
            return Err(HeaderError::TooSmall {
                actual: buf.len(),
                required: PROLOGUE_SIZE + TRAILER_SIZE,
            });
        }
        if size_words as usize * WORD_SIZE != buf.len() {
            return Err(HeaderError::SizeMismatch {
                declared_words: size_words,
                actual: buf.len(),
            });
        }

        Ok(Header {
            packet_type,
            has_class_id,
            has_trailer,
            time_mode,
            size_words,
        })
    }

    /// Encode the header word into the first four bytes of a buffer.
    pub fn encode_into(&self, buf: &mut [u8; WORD_SIZE]) {
        let mut b0 = self.packet_type.nibble() << 4;
        if self.has_class_id {
            b0 |= FLAG_CLASS_ID;
        }
        if self.has_trailer && self.packet_type.is_data() {
            b0 |= FLAG_TRAILER;
        }
        buf[0] = b0;
        buf[1] = self.time_mode;
        buf[2..4].copy_from_slice(&self.size_words.to_be_bytes());
    }

    /// Bytes occupied by the trailer, if any.
    pub const fn trailer_len(&self) -> usize {
        if self.has_trailer {
            TRAILER_SIZE
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prologue_only(b0: u8, words: u16) -> Vec<u8> {
        let mut buf = vec![0u8; words as usize * WORD_SIZE];
        buf[0] = b0;
        buf[1] = DEFAULT_TIME_MODE;
        buf[2..4].copy_from_slice(&words.to_be_bytes());
        buf
    }

    #[test]
    fn parse_context_header() {
        let buf = prologue_only(0x48, 8);
        let hdr = Header::parse(&buf).unwrap();
        assert_eq!(hdr.packet_type, PacketType::Context);
        assert!(hdr.has_class_id);
        assert!(!hdr.has_trailer);
        assert_eq!(hdr.size_words, 8);
    }

    #[test]
    fn parse_data_trailer_flag() {
        let buf = prologue_only(0x2C, 8);
        let hdr = Header::parse(&buf).unwrap();
        assert_eq!(hdr.packet_type, PacketType::UnidentifiedExtData);
        assert!(hdr.has_trailer);
        assert_eq!(hdr.trailer_len(), TRAILER_SIZE);
    }

    #[test]
    fn trailer_bit_ignored_on_context_types() {
        // Bit 2 on a context packet is not a trailer marker.
        let buf = prologue_only(0x5C, 8);
        let hdr = Header::parse(&buf).unwrap();
        assert_eq!(hdr.packet_type, PacketType::ExtContext);
        assert!(!hdr.has_trailer);
    }

    #[test]
    fn parse_rejects_short_buffer() {
        let err = Header::parse(&[0x48, 0xA0, 0x00]).unwrap_err();
        assert!(matches!(err, HeaderError::TooSmall { actual: 3, .. }));
    }

    #[test]
    fn parse_requires_room_for_trailer() {
        // A data packet flagging a trailer needs a word past the prologue.
        let buf = prologue_only(0x0C, 7);
        let err = Header::parse(&buf).unwrap_err();
        assert!(matches!(err, HeaderError::TooSmall { required: 32, .. }));
    }

    #[test]
    fn parse_rejects_size_mismatch() {
        let mut buf = prologue_only(0x48, 8);
        buf.truncate(28); // 7 words on the wire, 8 declared
        let err = Header::parse(&buf).unwrap_err();
        assert!(matches!(
            err,
            HeaderError::SizeMismatch {
                declared_words: 8,
                actual: 28
            }
        ));
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let buf = prologue_only(0x78, 8);
        let err = Header::parse(&buf).unwrap_err();
        assert!(matches!(err, HeaderError::UnknownType { nibble: 7 }));
    }

    #[test]
    fn encode_parse_roundtrip() {
        let hdr = Header {
            packet_type: PacketType::ExtContext,
            has_class_id: true,
            has_trailer: false,
            time_mode: DEFAULT_TIME_MODE,
            size_words: 17,
        };
        let mut word = [0u8; WORD_SIZE];
        hdr.encode_into(&mut word);
        assert_eq!(word, [0x58, 0xA0, 0x00, 0x11]);

        let mut buf = vec![0u8; 68];
        buf[..4].copy_from_slice(&word);
        assert_eq!(Header::parse(&buf).unwrap(), hdr);
    }

    #[test]
    fn data_types_are_low_nibbles() {
        assert!(PacketType::UnidentifiedData.is_data());
        assert!(PacketType::ExtData.is_data());
        assert!(!PacketType::Context.is_data());
        assert!(!PacketType::ExtContext.is_data());
    }
}
