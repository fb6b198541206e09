//! # Packet Container
//!
//! [`VrtPacket`] owns the raw bytes of one packet and keeps the header word
//! and buffer length consistent through every mutation. Field access is
//! offset-based over the payload region; the variable-length UTF-8 setter
//! resizes the payload so the field always runs from its offset to the end
//! of the payload.

use std::fmt;

use bytes::Bytes;

use vrt_wire::{
    text, ClassId, Header, PacketBuf, PacketType, WireError, MAX_PACKET_SIZE, PROLOGUE_SIZE,
    WORD_SIZE,
};

use crate::kind::PacketKind;

/// A single packet over an owned or shared buffer.
///
/// The packet type and flag bits are fixed at construction; the payload can
/// grow or shrink through the variable-length setters, which rewrite the
/// header's size word so the two never disagree.
#[derive(Debug, Clone)]
pub struct VrtPacket {
    buf: PacketBuf,
    packet_type: PacketType,
    has_class_id: bool,
    has_trailer: bool,
}

impl VrtPacket {
    // ─── Construction ────────────────────────────────────────────────────

    /// A fresh mutable packet stamped from the kind's default template.
    pub fn from_kind(kind: PacketKind) -> Self {
        Self::from_slice(kind.descriptor().template, false)
            .expect("kind templates always carry a valid header")
    }

    /// Copy an externally supplied buffer, optionally read-only.
    ///
    /// Only header structure is enforced here; a wrong packet type or class
    /// identifier is surfaced by validation, never at construction.
    pub fn from_slice(data: &[u8], read_only: bool) -> Result<Self, WireError> {
        Self::from_buf(PacketBuf::from_slice(data, read_only))
    }

    /// Wrap shared bytes as a read-only packet without copying.
    pub fn from_bytes(data: Bytes) -> Result<Self, WireError> {
        Self::from_buf(PacketBuf::read_only(data))
    }

    /// A deep, mutable copy of another packet.
    pub fn copy_of(other: &VrtPacket) -> Self {
        VrtPacket {
            buf: PacketBuf::from_slice(other.as_bytes(), false),
            ..*other
        }
    }

    fn from_buf(buf: PacketBuf) -> Result<Self, WireError> {
        let header = Header::parse(buf.as_slice()).map_err(WireError::from)?;
        Ok(VrtPacket {
            buf,
            packet_type: header.packet_type,
            has_class_id: header.has_class_id,
            has_trailer: header.has_trailer,
        })
    }

    // ─── Prologue ────────────────────────────────────────────────────────

    pub fn packet_type(&self) -> PacketType {
        self.packet_type
    }

    pub fn is_read_only(&self) -> bool {
        self.buf.is_read_only()
    }

    /// The whole packet as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    pub fn total_len(&self) -> usize {
        self.buf.len()
    }

    /// Total size in 32-bit words as declared by the header.
    pub fn size_words(&self) -> u16 {
        self.buf.get_u16(2).expect("prologue is always present")
    }

    /// The class identifier, when the header flags one as present.
    pub fn class_id(&self) -> Option<ClassId> {
        if !self.has_class_id {
            return None;
        }
        let raw = self.buf.get_u64(8).expect("prologue is always present");
        Some(ClassId::from_raw(raw))
    }

    pub fn stream_id(&self) -> u32 {
        self.buf.get_u32(4).expect("prologue is always present")
    }

    pub fn set_stream_id(&mut self, id: u32) -> Result<(), WireError> {
        self.buf.put_u32(4, id)
    }

    /// Modulo-16 packet count from the time-mode byte.
    pub fn packet_count(&self) -> u8 {
        self.buf.get_u8(1).expect("prologue is always present") & 0x0F
    }

    pub fn set_packet_count(&mut self, count: u8) -> Result<(), WireError> {
        let mode = self.buf.get_u8(1)? & 0xF0;
        self.buf.put_u8(1, mode | (count & 0x0F))
    }

    /// Integer-seconds timestamp, raw.
    pub fn integer_timestamp(&self) -> u32 {
        self.buf.get_u32(16).expect("prologue is always present")
    }

    pub fn set_integer_timestamp(&mut self, ts: u32) -> Result<(), WireError> {
        self.buf.put_u32(16, ts)
    }

    /// Fractional timestamp, raw.
    pub fn fractional_timestamp(&self) -> u64 {
        self.buf.get_u64(20).expect("prologue is always present")
    }

    pub fn set_fractional_timestamp(&mut self, ts: u64) -> Result<(), WireError> {
        self.buf.put_u64(20, ts)
    }

    // ─── Payload geometry ────────────────────────────────────────────────

    pub fn trailer_len(&self) -> usize {
        if self.has_trailer {
            vrt_wire::TRAILER_SIZE
        } else {
            0
        }
    }

    pub fn payload_len(&self) -> usize {
        self.total_len() - PROLOGUE_SIZE - self.trailer_len()
    }

    /// Largest payload this packet could declare given the 16-bit size word.
    pub fn max_payload_len(&self) -> usize {
        MAX_PACKET_SIZE - PROLOGUE_SIZE - self.trailer_len()
    }

    /// The payload region as raw bytes.
    pub fn payload(&self) -> &[u8] {
        &self.as_bytes()[PROLOGUE_SIZE..PROLOGUE_SIZE + self.payload_len()]
    }

    /// Resize the payload to exactly `new_len` bytes (4-byte aligned),
    /// preserving the trailer and rewriting the header's size word. Growth
    /// is zero-filled.
    pub fn set_payload_len(&mut self, new_len: usize) -> Result<(), WireError> {
        if new_len % WORD_SIZE != 0 {
            return Err(WireError::UnalignedPayload { len: new_len });
        }
        if new_len > self.max_payload_len() {
            return Err(WireError::OutOfBounds {
                offset: 0,
                len: new_len,
                size: self.max_payload_len(),
            });
        }

        let trailer_len = self.trailer_len();
        let old_total = self.total_len();
        let new_total = PROLOGUE_SIZE + new_len + trailer_len;
        if new_total != old_total {
            let trailer = if trailer_len > 0 {
                let mut saved = [0u8; vrt_wire::TRAILER_SIZE];
                saved.copy_from_slice(self.buf.region(old_total - trailer_len, trailer_len)?);
                Some(saved)
            } else {
                None
            };

            self.buf.resize(new_total)?;

            if let Some(saved) = trailer {
                if new_total > old_total {
                    // The old trailer bytes now sit inside the payload.
                    self.buf
                        .region_mut(old_total - trailer_len, trailer_len)?
                        .fill(0);
                }
                self.buf
                    .region_mut(new_total - trailer_len, trailer_len)?
                    .copy_from_slice(&saved);
            }
            self.buf.put_u16(2, (new_total / WORD_SIZE) as u16)?;
        }
        Ok(())
    }

    fn payload_offset(&self, offset: usize, len: usize) -> Result<usize, WireError> {
        let size = self.payload_len();
        match offset.checked_add(len) {
            Some(end) if end <= size => Ok(PROLOGUE_SIZE + offset),
            _ => Err(WireError::OutOfBounds { offset, len, size }),
        }
    }

    // ─── Payload field codecs ────────────────────────────────────────────

    pub fn payload_i32(&self, offset: usize) -> Result<i32, WireError> {
        let abs = self.payload_offset(offset, 4)?;
        self.buf.get_i32(abs)
    }

    pub fn set_payload_i32(&mut self, offset: usize, val: i32) -> Result<(), WireError> {
        let abs = self.payload_offset(offset, 4)?;
        self.buf.put_i32(abs, val)
    }

    pub fn payload_i64(&self, offset: usize) -> Result<i64, WireError> {
        let abs = self.payload_offset(offset, 8)?;
        self.buf.get_i64(abs)
    }

    pub fn set_payload_i64(&mut self, offset: usize, val: i64) -> Result<(), WireError> {
        let abs = self.payload_offset(offset, 8)?;
        self.buf.put_i64(abs, val)
    }

    /// Fixed-width ASCII field, trailing NUL padding stripped.
    pub fn payload_ascii(&self, offset: usize, width: usize) -> Result<String, WireError> {
        let abs = self.payload_offset(offset, width)?;
        Ok(text::unpack_ascii(self.buf.region(abs, width)?))
    }

    /// Write a fixed-width ASCII field. Non-printable characters become `?`;
    /// input longer than `width` is truncated without error (a diagnostic is
    /// emitted), shorter input is NUL-padded.
    pub fn set_payload_ascii(
        &mut self,
        offset: usize,
        width: usize,
        val: &str,
    ) -> Result<(), WireError> {
        let abs = self.payload_offset(offset, width)?;
        let region = self.buf.region_mut(abs, width)?;
        if text::pack_ascii(region, val) {
            tracing::warn!(offset, width, "ascii field input truncated");
        }
        Ok(())
    }

    /// Variable-width UTF-8 field running from `offset` to the end of the
    /// payload, trailing NUL padding stripped.
    pub fn payload_utf8(&self, offset: usize) -> Result<String, WireError> {
        let size = self.payload_len();
        let len = size.checked_sub(offset).ok_or(WireError::OutOfBounds {
            offset,
            len: 0,
            size,
        })?;
        let abs = PROLOGUE_SIZE + offset;
        Ok(text::unpack_utf8(self.buf.region(abs, len)?))
    }

    /// Write a variable-width UTF-8 field.
    ///
    /// The encoded length is clamped to the space the size word can express,
    /// rounded up to a whole word, and the payload is resized so the field
    /// occupies exactly `offset..payload_len`. Slack bytes are NUL. Clamping
    /// truncates at a character boundary and is reported as a diagnostic,
    /// not an error.
    pub fn set_payload_utf8(&mut self, offset: usize, val: &str) -> Result<(), WireError> {
        if self.is_read_only() {
            return Err(WireError::ReadOnly);
        }
        let limit = self
            .max_payload_len()
            .checked_sub(offset)
            .ok_or(WireError::OutOfBounds {
                offset,
                len: 0,
                size: self.max_payload_len(),
            })?;
        let wanted = val.len();
        let len = if wanted > limit {
            tracing::warn!(
                offset,
                wanted,
                limit,
                "utf8 field input exceeds packet capacity, clamping"
            );
            text::align4(limit)
        } else {
            text::align4(wanted)
        };
        self.set_payload_len(offset + len)?;
        let region = self.buf.region_mut(PROLOGUE_SIZE + offset, len)?;
        text::pack_utf8(region, val);
        Ok(())
    }

    // ─── Internal access for the field tables ────────────────────────────

    pub(crate) fn raw(&self) -> &PacketBuf {
        &self.buf
    }

    pub(crate) fn raw_mut(&mut self) -> &mut PacketBuf {
        &mut self.buf
    }
}

impl fmt::Display for VrtPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} packet, {} bytes (payload {})",
            self.packet_type,
            self.total_len(),
            self.payload_len(),
        )?;
        if let Some(id) = self.class_id() {
            write!(f, " ClassID={id}")?;
        }
        Ok(())
    }
}
