//! # Standard Packet Classes
//!
//! The concrete packet kinds as typed wrappers over [`VrtPacket`]. Each
//! wrapper fixes its [`PacketKind`] and exposes the kind's fields as typed
//! getters and setters; everything else (buffer handling, resize rules,
//! validation) is the shared container underneath. Construction never
//! rejects a buffer for carrying the wrong type or class identifier; that
//! is what `validate` is for.

use std::fmt;

use bytes::Bytes;

use vrt_wire::WireError;

use crate::field::{self, FieldError, FieldValue};
use crate::kind::PacketKind;
use crate::packet::VrtPacket;
use crate::validate::{validate, ValidationError};

// ─── NoDataPacket ────────────────────────────────────────────────────────────

/// Data packet that carries no samples; used as a marker/heartbeat.
#[derive(Debug, Clone)]
pub struct NoDataPacket(VrtPacket);

impl NoDataPacket {
    pub const KIND: PacketKind = PacketKind::NoData;

    /// A fresh packet with the default byte template.
    pub fn new() -> Self {
        NoDataPacket(VrtPacket::from_kind(Self::KIND))
    }

    /// Copy an externally supplied buffer, optionally read-only.
    pub fn from_slice(data: &[u8], read_only: bool) -> Result<Self, WireError> {
        VrtPacket::from_slice(data, read_only).map(NoDataPacket)
    }

    /// Wrap shared bytes as a read-only packet without copying.
    pub fn from_bytes(data: Bytes) -> Result<Self, WireError> {
        VrtPacket::from_bytes(data).map(NoDataPacket)
    }

    /// A deep, mutable copy of another packet.
    pub fn from_packet(packet: &VrtPacket) -> Self {
        NoDataPacket(VrtPacket::copy_of(packet))
    }

    /// Reinterpret an existing packet as this kind, keeping its buffer.
    pub fn wrap(packet: VrtPacket) -> Self {
        NoDataPacket(packet)
    }

    pub fn packet(&self) -> &VrtPacket {
        &self.0
    }

    pub fn packet_mut(&mut self) -> &mut VrtPacket {
        &mut self.0
    }

    pub fn into_packet(self) -> VrtPacket {
        self.0
    }

    /// Check this packet against the kind's expectations.
    pub fn validate(&self, strict: bool, expected_len: Option<usize>) -> Result<(), ValidationError> {
        validate(&self.0, Self::KIND, strict, expected_len)
    }

    pub fn field_count(&self) -> usize {
        field::field_count(Self::KIND)
    }

    pub fn field_name(&self, id: usize) -> Option<&'static str> {
        field::field_name(Self::KIND, id)
    }

    pub fn field(&self, id: usize) -> Result<FieldValue, FieldError> {
        field::get(&self.0, Self::KIND, id)
    }

    pub fn set_field(&mut self, id: usize, value: FieldValue) -> Result<(), FieldError> {
        field::set(&mut self.0, Self::KIND, id, value)
    }
}

impl Default for NoDataPacket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoDataPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── StandardContextPacket ───────────────────────────────────────────────────

/// Context packet carrying the standard context payload.
#[derive(Debug, Clone)]
pub struct StandardContextPacket(VrtPacket);

impl StandardContextPacket {
    pub const KIND: PacketKind = PacketKind::StandardContext;

    /// A fresh packet with the default byte template.
    pub fn new() -> Self {
        StandardContextPacket(VrtPacket::from_kind(Self::KIND))
    }

    /// Copy an externally supplied buffer, optionally read-only.
    pub fn from_slice(data: &[u8], read_only: bool) -> Result<Self, WireError> {
        VrtPacket::from_slice(data, read_only).map(StandardContextPacket)
    }

    /// Wrap shared bytes as a read-only packet without copying.
    pub fn from_bytes(data: Bytes) -> Result<Self, WireError> {
        VrtPacket::from_bytes(data).map(StandardContextPacket)
    }

    /// A deep, mutable copy of another packet.
    pub fn from_packet(packet: &VrtPacket) -> Self {
        StandardContextPacket(VrtPacket::copy_of(packet))
    }

    /// Reinterpret an existing packet as this kind, keeping its buffer.
    pub fn wrap(packet: VrtPacket) -> Self {
        StandardContextPacket(packet)
    }

    pub fn packet(&self) -> &VrtPacket {
        &self.0
    }

    pub fn packet_mut(&mut self) -> &mut VrtPacket {
        &mut self.0
    }

    pub fn into_packet(self) -> VrtPacket {
        self.0
    }

    /// Check this packet against the kind's expectations.
    pub fn validate(&self, strict: bool, expected_len: Option<usize>) -> Result<(), ValidationError> {
        validate(&self.0, Self::KIND, strict, expected_len)
    }

    pub fn field_count(&self) -> usize {
        field::field_count(Self::KIND)
    }

    pub fn field_name(&self, id: usize) -> Option<&'static str> {
        field::field_name(Self::KIND, id)
    }

    pub fn field(&self, id: usize) -> Result<FieldValue, FieldError> {
        field::get(&self.0, Self::KIND, id)
    }

    pub fn set_field(&mut self, id: usize, value: FieldValue) -> Result<(), FieldError> {
        field::set(&mut self.0, Self::KIND, id, value)
    }
}

impl Default for StandardContextPacket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StandardContextPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── TimestampAccuracyPacket ─────────────────────────────────────────────────

/// Extension context reporting the stream's timestamp accuracy.
#[derive(Debug, Clone)]
pub struct TimestampAccuracyPacket(VrtPacket);

impl TimestampAccuracyPacket {
    pub const KIND: PacketKind = PacketKind::TimestampAccuracy;

    /// A fresh packet with the default byte template.
    pub fn new() -> Self {
        TimestampAccuracyPacket(VrtPacket::from_kind(Self::KIND))
    }

    /// Copy an externally supplied buffer, optionally read-only.
    pub fn from_slice(data: &[u8], read_only: bool) -> Result<Self, WireError> {
        VrtPacket::from_slice(data, read_only).map(TimestampAccuracyPacket)
    }

    /// Wrap shared bytes as a read-only packet without copying.
    pub fn from_bytes(data: Bytes) -> Result<Self, WireError> {
        VrtPacket::from_bytes(data).map(TimestampAccuracyPacket)
    }

    /// A deep, mutable copy of another packet.
    pub fn from_packet(packet: &VrtPacket) -> Self {
        TimestampAccuracyPacket(VrtPacket::copy_of(packet))
    }

    /// Reinterpret an existing packet as this kind, keeping its buffer.
    pub fn wrap(packet: VrtPacket) -> Self {
        TimestampAccuracyPacket(packet)
    }

    pub fn packet(&self) -> &VrtPacket {
        &self.0
    }

    pub fn packet_mut(&mut self) -> &mut VrtPacket {
        &mut self.0
    }

    pub fn into_packet(self) -> VrtPacket {
        self.0
    }

    /// Check this packet against the kind's expectations.
    pub fn validate(&self, strict: bool, expected_len: Option<usize>) -> Result<(), ValidationError> {
        validate(&self.0, Self::KIND, strict, expected_len)
    }

    pub fn field_count(&self) -> usize {
        field::field_count(Self::KIND)
    }

    pub fn field_name(&self, id: usize) -> Option<&'static str> {
        field::field_name(Self::KIND, id)
    }

    pub fn field(&self, id: usize) -> Result<FieldValue, FieldError> {
        field::get(&self.0, Self::KIND, id)
    }

    pub fn set_field(&mut self, id: usize, value: FieldValue) -> Result<(), FieldError> {
        field::set(&mut self.0, Self::KIND, id, value)
    }

    /// Timestamp accuracy in the stream's native resolution units.
    pub fn timestamp_accuracy(&self) -> Result<i64, WireError> {
        self.0.payload_i64(0)
    }

    pub fn set_timestamp_accuracy(&mut self, val: i64) -> Result<(), WireError> {
        self.0.set_payload_i64(0, val)
    }
}

impl Default for TimestampAccuracyPacket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TimestampAccuracyPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if let Ok(acc) = self.timestamp_accuracy() {
            write!(f, " TimestampAccuracy={acc}")?;
        }
        Ok(())
    }
}

// ─── ReferencePointPacket ────────────────────────────────────────────────────

/// Extension context naming and describing a reference point.
#[derive(Debug, Clone)]
pub struct ReferencePointPacket(VrtPacket);

impl ReferencePointPacket {
    pub const KIND: PacketKind = PacketKind::ReferencePoint;

    /// Fixed width of the name field in bytes.
    pub const NAME_WIDTH: usize = 32;

    /// Payload offset where the variable description begins.
    const DESCRIPTION_OFFSET: usize = 40;

    /// A fresh packet with the default byte template.
    pub fn new() -> Self {
        ReferencePointPacket(VrtPacket::from_kind(Self::KIND))
    }

    /// Copy an externally supplied buffer, optionally read-only.
    pub fn from_slice(data: &[u8], read_only: bool) -> Result<Self, WireError> {
        VrtPacket::from_slice(data, read_only).map(ReferencePointPacket)
    }

    /// Wrap shared bytes as a read-only packet without copying.
    pub fn from_bytes(data: Bytes) -> Result<Self, WireError> {
        VrtPacket::from_bytes(data).map(ReferencePointPacket)
    }

    /// A deep, mutable copy of another packet.
    pub fn from_packet(packet: &VrtPacket) -> Self {
        ReferencePointPacket(VrtPacket::copy_of(packet))
    }

    /// Reinterpret an existing packet as this kind, keeping its buffer.
    pub fn wrap(packet: VrtPacket) -> Self {
        ReferencePointPacket(packet)
    }

    pub fn packet(&self) -> &VrtPacket {
        &self.0
    }

    pub fn packet_mut(&mut self) -> &mut VrtPacket {
        &mut self.0
    }

    pub fn into_packet(self) -> VrtPacket {
        self.0
    }

    /// Check this packet against the kind's expectations.
    pub fn validate(&self, strict: bool, expected_len: Option<usize>) -> Result<(), ValidationError> {
        validate(&self.0, Self::KIND, strict, expected_len)
    }

    pub fn field_count(&self) -> usize {
        field::field_count(Self::KIND)
    }

    pub fn field_name(&self, id: usize) -> Option<&'static str> {
        field::field_name(Self::KIND, id)
    }

    pub fn field(&self, id: usize) -> Result<FieldValue, FieldError> {
        field::get(&self.0, Self::KIND, id)
    }

    pub fn set_field(&mut self, id: usize, value: FieldValue) -> Result<(), FieldError> {
        field::set(&mut self.0, Self::KIND, id, value)
    }

    /// The reference point identifier.
    pub fn ref_point_id(&self) -> Result<i32, WireError> {
        self.0.payload_i32(0)
    }

    pub fn set_ref_point_id(&mut self, val: i32) -> Result<(), WireError> {
        self.0.set_payload_i32(0, val)
    }

    /// Free-form name of the reference point.
    pub fn name(&self) -> Result<String, WireError> {
        self.0.payload_ascii(8, Self::NAME_WIDTH)
    }

    /// Set the name. Non-printable characters become `?`; input longer than
    /// [`NAME_WIDTH`](Self::NAME_WIDTH) is truncated without error.
    pub fn set_name(&mut self, val: &str) -> Result<(), WireError> {
        self.0.set_payload_ascii(8, Self::NAME_WIDTH, val)
    }

    /// Free-form description, running to the end of the payload.
    pub fn description(&self) -> Result<String, WireError> {
        self.0.payload_utf8(Self::DESCRIPTION_OFFSET)
    }

    /// Set the description, resizing the payload to fit.
    pub fn set_description(&mut self, val: &str) -> Result<(), WireError> {
        self.0.set_payload_utf8(Self::DESCRIPTION_OFFSET, val)
    }
}

impl Default for ReferencePointPacket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReferencePointPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if let Ok(id) = self.ref_point_id() {
            write!(f, " RefPointID={id}")?;
        }
        if let Ok(name) = self.name() {
            write!(f, " Name='{name}'")?;
        }
        if let Ok(desc) = self.description() {
            write!(f, " Description='{desc}'")?;
        }
        Ok(())
    }
}
