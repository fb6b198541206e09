//! # vrt-wire
//!
//! Byte-level wire format for the VRT radio-transport packet family.
//!
//! This crate handles raw bytes only: the bounds-checked packet buffer, the
//! leading header word, class identifiers, and the fixed-ASCII / aligned
//! UTF-8 text codecs. It knows nothing about concrete packet kinds; that
//! layer lives in `vrt-packets`.
//!
//! ## Crate structure
//!
//! - [`buffer`] — owned/shared byte buffer with typed big-endian access
//! - [`header`] — packet type nibble, flag bits, size word, prologue layout
//! - [`class_id`] — 64-bit class identifiers and their canonical string form
//! - [`text`] — fixed-width ASCII and word-aligned UTF-8 field codecs
//! - [`error`] — structured wire-level errors

pub mod buffer;
pub mod class_id;
pub mod error;
pub mod header;
pub mod text;

pub use buffer::PacketBuf;
pub use class_id::{ClassId, ParseClassIdError};
pub use error::{HeaderError, WireError};
pub use header::{
    Header, PacketType, DEFAULT_TIME_MODE, FLAG_CLASS_ID, FLAG_TRAILER, MAX_PACKET_SIZE,
    PROLOGUE_SIZE, TRAILER_SIZE, WORD_SIZE,
};
