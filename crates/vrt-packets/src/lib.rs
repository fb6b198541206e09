//! # vrt-packets
//!
//! The VRT packet catalog: a generic packet container over the `vrt-wire`
//! byte layer, a compiled-in registry of concrete packet kinds, ordered
//! field tables for generic access, explicit validation, and the four
//! standard packet classes.
//!
//! Packets are plain in-memory values: construction from a template or a
//! raw buffer, typed field access at fixed offsets, and on-demand
//! validation before a packet is trusted. No I/O happens here.
//!
//! ## Crate structure
//!
//! - [`packet`] — [`VrtPacket`]: buffer ownership, prologue accessors, payload codecs
//! - [`kind`] — [`PacketKind`] registry: templates, class ids, payload policies
//! - [`field`] — ordered field descriptors and generic get/set by id
//! - [`validate`] — explicit structural/type/class-id validation
//! - [`standard`] — the concrete packet classes

pub mod field;
pub mod kind;
pub mod packet;
pub mod standard;
pub mod validate;

pub use field::{FieldDescriptor, FieldError, FieldRegion, FieldType, FieldValue};
pub use kind::{KindDescriptor, PacketKind, PayloadPolicy};
pub use packet::VrtPacket;
pub use standard::{
    NoDataPacket, ReferencePointPacket, StandardContextPacket, TimestampAccuracyPacket,
};
pub use validate::{validate, ValidationError};

// The wire layer is part of the public contract (errors, packet types,
// class identifiers), so re-export it whole.
pub use vrt_wire as wire;
