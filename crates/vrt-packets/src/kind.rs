//! # Packet Kind Registry
//!
//! The closed catalog of concrete packet kinds. Each kind pins down the
//! packet type, the expected class identifier, the declared payload-length
//! policy and the literal default byte template a fresh packet is stamped
//! from. The registry is compiled-in data; nothing here changes at runtime.

use std::fmt;

use vrt_wire::{ClassId, PacketType};

use crate::field::{FieldDescriptor, FieldRegion, FieldType};

// ─── Payload Policy ──────────────────────────────────────────────────────────

/// Declared payload-length rule for a packet kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadPolicy {
    /// Payload is exactly this many bytes.
    Fixed(usize),
    /// Payload is at least this many bytes; the remainder is variable.
    Minimum(usize),
}

impl PayloadPolicy {
    /// Whether a payload length satisfies the policy.
    pub const fn allows(self, len: usize) -> bool {
        match self {
            PayloadPolicy::Fixed(n) => len == n,
            PayloadPolicy::Minimum(n) => len >= n,
        }
    }
}

impl fmt::Display for PayloadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadPolicy::Fixed(n) => write!(f, "exactly {n} bytes"),
            PayloadPolicy::Minimum(n) => write!(f, "at least {n} bytes"),
        }
    }
}

// ─── Kind Descriptor ─────────────────────────────────────────────────────────

/// Everything the codec knows about one concrete packet kind.
#[derive(Debug)]
pub struct KindDescriptor {
    /// Class name used in validation messages.
    pub name: &'static str,
    /// Expected packet type.
    pub packet_type: PacketType,
    /// Expected class identifier.
    pub class_id: ClassId,
    /// Declared payload-length policy.
    pub payload: PayloadPolicy,
    /// Default byte template; a fresh packet is an exact copy of this.
    pub template: &'static [u8],
    /// Kind-specific payload fields, in declaration order.
    pub fields: &'static [FieldDescriptor],
}

/// The concrete packet kinds this library ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// Data packet carrying no samples; heartbeat/marker use.
    NoData,
    /// Context packet with the standard context payload.
    StandardContext,
    /// Extension context reporting timestamp accuracy.
    TimestampAccuracy,
    /// Extension context describing a named reference point.
    ReferencePoint,
}

impl PacketKind {
    pub const ALL: [PacketKind; 4] = [
        PacketKind::NoData,
        PacketKind::StandardContext,
        PacketKind::TimestampAccuracy,
        PacketKind::ReferencePoint,
    ];

    /// The compiled-in descriptor for this kind.
    pub const fn descriptor(self) -> &'static KindDescriptor {
        match self {
            PacketKind::NoData => &NO_DATA,
            PacketKind::StandardContext => &STANDARD_CONTEXT,
            PacketKind::TimestampAccuracy => &TIMESTAMP_ACCURACY,
            PacketKind::ReferencePoint => &REFERENCE_POINT,
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

// ─── Descriptors ─────────────────────────────────────────────────────────────

static NO_DATA: KindDescriptor = KindDescriptor {
    name: "NoDataPacket",
    packet_type: PacketType::UnidentifiedExtData,
    class_id: ClassId::from_raw(0x00FF_FFFA_2011_0002),
    payload: PayloadPolicy::Fixed(0),
    template: &NO_DATA_TEMPLATE,
    fields: &[],
};

static STANDARD_CONTEXT: KindDescriptor = KindDescriptor {
    name: "StandardContextPacket",
    packet_type: PacketType::Context,
    class_id: ClassId::from_raw(0x00FF_FFFA_2011_0003),
    payload: PayloadPolicy::Minimum(4),
    template: &STANDARD_CONTEXT_TEMPLATE,
    fields: &[],
};

static TIMESTAMP_ACCURACY: KindDescriptor = KindDescriptor {
    name: "TimestampAccuracyPacket",
    packet_type: PacketType::ExtContext,
    class_id: ClassId::from_raw(0x00FF_FFFA_2011_0004),
    payload: PayloadPolicy::Fixed(8),
    template: &TIMESTAMP_ACCURACY_TEMPLATE,
    fields: &[FieldDescriptor {
        name: "TimestampAccuracy",
        ty: FieldType::Int64,
        region: FieldRegion::Payload,
        offset: 0,
    }],
};

static REFERENCE_POINT: KindDescriptor = KindDescriptor {
    name: "ReferencePointPacket",
    packet_type: PacketType::ExtContext,
    class_id: ClassId::from_raw(0x00FF_FFFA_2011_0006),
    payload: PayloadPolicy::Minimum(40),
    template: &REFERENCE_POINT_TEMPLATE,
    fields: &[
        FieldDescriptor {
            name: "RefPointID",
            ty: FieldType::Int32,
            region: FieldRegion::Payload,
            offset: 0,
        },
        FieldDescriptor {
            name: "Name",
            ty: FieldType::Ascii(32),
            region: FieldRegion::Payload,
            offset: 8,
        },
        FieldDescriptor {
            name: "Description",
            ty: FieldType::Utf8,
            region: FieldRegion::Payload,
            offset: 40,
        },
    ],
};

// ─── Templates ───────────────────────────────────────────────────────────────
//
// Published byte-for-byte: peers match on these exact defaults. Layout per
// template: header word, stream id, class id, timestamps, then payload (and
// the trailer word on NoData).

#[rustfmt::skip]
static NO_DATA_TEMPLATE: [u8; 32] = [
    0x2C, 0xA0, 0x00, 0x08,                         // UnidentifiedExtData, class id + trailer, 8 words
    0x00, 0x00, 0x00, 0x00,                         // stream id
    0x00, 0xFF, 0xFF, 0xFA, 0x20, 0x11, 0x00, 0x02, // FF-FF-FA:2011.0002
    0x00, 0x00, 0x00, 0x00,                         // integer timestamp
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // fractional timestamp
    0x00, 0x00, 0x00, 0x00,                         // trailer
];

#[rustfmt::skip]
static STANDARD_CONTEXT_TEMPLATE: [u8; 32] = [
    0x48, 0xA0, 0x00, 0x08,                         // Context, class id, 8 words
    0x00, 0x00, 0x00, 0x00,
    0x00, 0xFF, 0xFF, 0xFA, 0x20, 0x11, 0x00, 0x03, // FF-FF-FA:2011.0003
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,                         // context payload word
];

#[rustfmt::skip]
static TIMESTAMP_ACCURACY_TEMPLATE: [u8; 36] = [
    0x58, 0xA0, 0x00, 0x09,                         // ExtContext, class id, 9 words
    0x00, 0x00, 0x00, 0x00,
    0x00, 0xFF, 0xFF, 0xFA, 0x20, 0x11, 0x00, 0x04, // FF-FF-FA:2011.0004
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // accuracy field
];

#[rustfmt::skip]
static REFERENCE_POINT_TEMPLATE: [u8; 68] = [
    0x58, 0xA0, 0x00, 0x11,                         // ExtContext, class id, 17 words
    0x00, 0x00, 0x00, 0x00,
    0x00, 0xFF, 0xFF, 0xFA, 0x20, 0x11, 0x00, 0x06, // FF-FF-FA:2011.0006
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,                         // ref point id
    0x00, 0x00, 0x00, 0x00,                         // reserved
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // name (32 bytes)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // description: zero-length tail
];
