//! # Packet Validation
//!
//! Cross-checks a packet against what its concrete kind declares in the
//! registry. Validation is never automatic: a caller decides when a packet
//! is about to be trusted and invokes it explicitly. The check is a pure
//! function over the packet bytes.

use thiserror::Error;

use vrt_wire::{ClassId, Header, PacketType, WireError};

use crate::kind::{PacketKind, PayloadPolicy};
use crate::packet::VrtPacket;

/// Why a packet failed validation. The packet itself remains usable for
/// inspection after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The underlying structural check failed; propagated unchanged.
    #[error(transparent)]
    Structural(#[from] WireError),

    /// Strict mode: total length differs from the caller's expectation.
    #[error("invalid use of {kind} with packet length {actual} (expected {expected})")]
    Length {
        kind: PacketKind,
        expected: usize,
        actual: usize,
    },

    /// The buffer carries a different packet type than the kind declares.
    #[error("invalid use of {kind} with {found} packet")]
    Type { kind: PacketKind, found: PacketType },

    /// The buffer carries a different class identifier than the kind declares.
    #[error("invalid use of {kind} with ClassID={found}")]
    ClassId { kind: PacketKind, found: ClassId },

    /// The header does not flag a class identifier at all.
    #[error("invalid use of {kind} without a class identifier")]
    ClassIdMissing { kind: PacketKind },

    /// The payload length violates the kind's declared policy.
    #[error("invalid use of {kind} with payload of {actual} bytes (requires {policy})")]
    Payload {
        kind: PacketKind,
        policy: PayloadPolicy,
        actual: usize,
    },
}

/// Validate `packet` against the expectations of `kind`.
///
/// The base structural check runs first and its failure is propagated
/// unchanged. In `strict` mode the total length is additionally compared
/// against `expected_len` when one is supplied. Only then are the kind's
/// packet type, class identifier and payload policy checked.
pub fn validate(
    packet: &VrtPacket,
    kind: PacketKind,
    strict: bool,
    expected_len: Option<usize>,
) -> Result<(), ValidationError> {
    let desc = kind.descriptor();

    let header = Header::parse(packet.as_bytes()).map_err(WireError::from)?;
    if strict {
        if let Some(expected) = expected_len {
            if packet.total_len() != expected {
                return Err(ValidationError::Length {
                    kind,
                    expected,
                    actual: packet.total_len(),
                });
            }
        }
    }

    if header.packet_type != desc.packet_type {
        return Err(ValidationError::Type {
            kind,
            found: header.packet_type,
        });
    }

    match packet.class_id() {
        Some(id) if id == desc.class_id => {}
        Some(id) => return Err(ValidationError::ClassId { kind, found: id }),
        None => return Err(ValidationError::ClassIdMissing { kind }),
    }

    let actual = packet.payload_len();
    if !desc.payload.allows(actual) {
        return Err(ValidationError::Payload {
            kind,
            policy: desc.payload,
            actual,
        });
    }

    Ok(())
}
