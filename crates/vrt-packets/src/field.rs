//! # Field Tables
//!
//! Ordered `(name, type, offset)` descriptors drive generic field access:
//! the base prologue fields every packet carries, concatenated with the
//! kind-specific payload fields from the registry. Lookups index into that
//! combined list, so adding a field to a kind never shifts another kind's
//! ids and no per-class dispatch is involved.

use std::fmt;
use thiserror::Error;

use vrt_wire::WireError;

use crate::kind::PacketKind;
use crate::packet::VrtPacket;

// ─── Descriptors ─────────────────────────────────────────────────────────────

/// Which region of the packet a field lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRegion {
    /// Offset is absolute within the 28-byte prologue.
    Prologue,
    /// Offset is relative to the start of the payload.
    Payload,
}

/// The wire type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int32,
    Int64,
    /// Fixed-width ASCII of exactly this many bytes.
    Ascii(usize),
    /// Variable-width UTF-8 running to the end of the payload.
    Utf8,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int32 => f.write_str("int32"),
            FieldType::Int64 => f.write_str("int64"),
            FieldType::Ascii(w) => write!(f, "ascii[{w}]"),
            FieldType::Utf8 => f.write_str("utf8"),
        }
    }
}

/// One named field at a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: FieldType,
    pub region: FieldRegion,
    pub offset: usize,
}

/// A field value read from or written to a packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int32(i32),
    Int64(i64),
    Ascii(String),
    Utf8(String),
}

impl FieldValue {
    fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int32(_) => "int32",
            FieldValue::Int64(_) => "int64",
            FieldValue::Ascii(_) => "ascii",
            FieldValue::Utf8(_) => "utf8",
        }
    }
}

/// Prologue fields shared by every packet kind.
pub const BASE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "StreamID",
        ty: FieldType::Int32,
        region: FieldRegion::Prologue,
        offset: 4,
    },
    FieldDescriptor {
        name: "ClassID",
        ty: FieldType::Int64,
        region: FieldRegion::Prologue,
        offset: 8,
    },
    FieldDescriptor {
        name: "IntegerTimestamp",
        ty: FieldType::Int32,
        region: FieldRegion::Prologue,
        offset: 16,
    },
    FieldDescriptor {
        name: "FractionalTimestamp",
        ty: FieldType::Int64,
        region: FieldRegion::Prologue,
        offset: 20,
    },
];

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors from generic field access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field id {id} for {kind}")]
    Unknown { kind: PacketKind, id: usize },

    #[error("field {name} expects {expected}, got {got}")]
    Type {
        name: &'static str,
        expected: FieldType,
        got: &'static str,
    },

    #[error(transparent)]
    Wire(#[from] WireError),
}

// ─── Generic access ──────────────────────────────────────────────────────────

/// Number of addressable fields for a kind (base + kind-specific).
pub fn field_count(kind: PacketKind) -> usize {
    BASE_FIELDS.len() + kind.descriptor().fields.len()
}

/// Descriptor for a field id, base fields first.
pub fn descriptor(kind: PacketKind, id: usize) -> Option<&'static FieldDescriptor> {
    BASE_FIELDS
        .get(id)
        .or_else(|| kind.descriptor().fields.get(id - BASE_FIELDS.len()))
}

/// Field name for an id.
pub fn field_name(kind: PacketKind, id: usize) -> Option<&'static str> {
    descriptor(kind, id).map(|d| d.name)
}

/// Read a field by id.
pub fn get(packet: &VrtPacket, kind: PacketKind, id: usize) -> Result<FieldValue, FieldError> {
    let desc = descriptor(kind, id).ok_or(FieldError::Unknown { kind, id })?;
    let value = match (desc.region, desc.ty) {
        (FieldRegion::Prologue, FieldType::Int32) => {
            FieldValue::Int32(packet.raw().get_i32(desc.offset)?)
        }
        (FieldRegion::Prologue, FieldType::Int64) => {
            FieldValue::Int64(packet.raw().get_i64(desc.offset)?)
        }
        (FieldRegion::Payload, FieldType::Int32) => {
            FieldValue::Int32(packet.payload_i32(desc.offset)?)
        }
        (FieldRegion::Payload, FieldType::Int64) => {
            FieldValue::Int64(packet.payload_i64(desc.offset)?)
        }
        (_, FieldType::Ascii(width)) => {
            FieldValue::Ascii(packet.payload_ascii(desc.offset, width)?)
        }
        (_, FieldType::Utf8) => FieldValue::Utf8(packet.payload_utf8(desc.offset)?),
    };
    Ok(value)
}

/// Write a field by id. The value must match the descriptor's type.
pub fn set(
    packet: &mut VrtPacket,
    kind: PacketKind,
    id: usize,
    value: FieldValue,
) -> Result<(), FieldError> {
    let desc = descriptor(kind, id).ok_or(FieldError::Unknown { kind, id })?;
    let mismatch = |value: &FieldValue| FieldError::Type {
        name: desc.name,
        expected: desc.ty,
        got: value.type_name(),
    };
    match (desc.region, desc.ty) {
        (FieldRegion::Prologue, FieldType::Int32) => match value {
            FieldValue::Int32(v) => packet.raw_mut().put_i32(desc.offset, v)?,
            other => return Err(mismatch(&other)),
        },
        (FieldRegion::Prologue, FieldType::Int64) => match value {
            FieldValue::Int64(v) => packet.raw_mut().put_i64(desc.offset, v)?,
            other => return Err(mismatch(&other)),
        },
        (FieldRegion::Payload, FieldType::Int32) => match value {
            FieldValue::Int32(v) => packet.set_payload_i32(desc.offset, v)?,
            other => return Err(mismatch(&other)),
        },
        (FieldRegion::Payload, FieldType::Int64) => match value {
            FieldValue::Int64(v) => packet.set_payload_i64(desc.offset, v)?,
            other => return Err(mismatch(&other)),
        },
        (_, FieldType::Ascii(width)) => match value {
            FieldValue::Ascii(s) => packet.set_payload_ascii(desc.offset, width, &s)?,
            other => return Err(mismatch(&other)),
        },
        (_, FieldType::Utf8) => match value {
            FieldValue::Utf8(s) => packet.set_payload_utf8(desc.offset, &s)?,
            other => return Err(mismatch(&other)),
        },
    }
    Ok(())
}
