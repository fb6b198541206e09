//! Error types for wire-level packet access.

use thiserror::Error;

/// Errors raised by byte-level packet access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The leading header bytes are unusable.
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] HeaderError),

    /// A field access reaches past the end of its region.
    #[error("field at offset {offset} (+{len} bytes) exceeds region of {size} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },

    /// A write was attempted on a read-only packet.
    #[error("write attempted on read-only packet")]
    ReadOnly,

    /// A payload length that is not a multiple of the 4-byte word size.
    #[error("payload length {len} is not 4-byte aligned")]
    UnalignedPayload { len: usize },
}

/// The specific way a header failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Buffer shorter than the fixed prologue.
    #[error("packet too small: {actual} bytes, need at least {required}")]
    TooSmall { actual: usize, required: usize },

    /// Declared size-in-words disagrees with the buffer length.
    #[error("declared size of {declared_words} words does not match buffer of {actual} bytes")]
    SizeMismatch { declared_words: u16, actual: usize },

    /// Unknown packet type nibble.
    #[error("unknown packet type nibble: {nibble}")]
    UnknownType { nibble: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_error_converts_to_wire_error() {
        let err: WireError = HeaderError::TooSmall {
            actual: 3,
            required: 28,
        }
        .into();
        assert!(matches!(err, WireError::MalformedHeader(_)));
        let msg = err.to_string();
        assert!(msg.contains("malformed header"));
        assert!(msg.contains("3 bytes"));
    }

    #[test]
    fn out_of_bounds_display_names_offsets() {
        let err = WireError::OutOfBounds {
            offset: 36,
            len: 8,
            size: 40,
        };
        let msg = err.to_string();
        assert!(msg.contains("36"));
        assert!(msg.contains("40"));
    }
}
