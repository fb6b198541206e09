//! End-to-end tests over the public packet surface: default templates,
//! validation across kinds, malformed buffers, and the documented
//! truncation behavior of the text fields.

use anyhow::Result;
use bytes::Bytes;

use vrt_packets::wire::{HeaderError, WireError};
use vrt_packets::{
    validate, NoDataPacket, PacketKind, ReferencePointPacket, StandardContextPacket,
    TimestampAccuracyPacket, ValidationError, VrtPacket,
};

/// The published default bytes of a NoData packet.
#[rustfmt::skip]
const NO_DATA_BYTES: [u8; 32] = [
    44, 160, 0, 8,
    0, 0, 0, 0,
    0, 255, 255, 250,
    32, 17, 0, 2,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,
];

#[test]
fn no_data_default_bytes_are_published_template() {
    let packet = NoDataPacket::new();
    assert_eq!(packet.packet().as_bytes(), &NO_DATA_BYTES[..]);
}

#[test]
fn default_headers_match_published_values() {
    let no_data = NoDataPacket::new();
    let context = StandardContextPacket::new();
    let accuracy = TimestampAccuracyPacket::new();
    let ref_point = ReferencePointPacket::new();
    // (packet byte 0, size word byte 3, total length)
    let cases: [(&[u8], u8, u8, usize); 4] = [
        (no_data.packet().as_bytes(), 44, 8, 32),
        (context.packet().as_bytes(), 72, 8, 32),
        (accuracy.packet().as_bytes(), 88, 9, 36),
        (ref_point.packet().as_bytes(), 88, 17, 68),
    ];
    for (bytes, b0, b3, len) in cases {
        assert_eq!(bytes[0], b0);
        assert_eq!(bytes[1], 0xA0);
        assert_eq!(bytes[3], b3);
        assert_eq!(bytes.len(), len);
    }
}

#[test]
fn standard_context_end_to_end() {
    let packet = StandardContextPacket::new();
    let bytes = packet.packet().as_bytes();
    assert_eq!(bytes[0], 72);
    assert_eq!(bytes[3], 8);
    assert_eq!(bytes.len(), 32);
    assert_eq!(packet.validate(false, Some(0)), Ok(()));
}

#[test]
fn class_ids_render_canonically() {
    assert_eq!(
        PacketKind::NoData.descriptor().class_id.to_string(),
        "FF-FF-FA:2011.0002"
    );
    assert_eq!(
        PacketKind::StandardContext.descriptor().class_id.to_string(),
        "FF-FF-FA:2011.0003"
    );
    assert_eq!(
        PacketKind::TimestampAccuracy.descriptor().class_id.to_string(),
        "FF-FF-FA:2011.0004"
    );
    assert_eq!(
        PacketKind::ReferencePoint.descriptor().class_id.to_string(),
        "FF-FF-FA:2011.0006"
    );
}

#[test]
fn every_kind_validates_itself_and_rejects_the_others() {
    for kind in PacketKind::ALL {
        let packet = VrtPacket::from_kind(kind);
        assert_eq!(validate(&packet, kind, false, None), Ok(()), "{kind}");

        for other in PacketKind::ALL {
            if other == kind {
                continue;
            }
            let err = validate(&packet, other, false, None)
                .expect_err("cross-kind check must fail");
            let msg = err.to_string();
            assert!(!msg.is_empty());
            assert!(
                msg.contains(other.descriptor().name),
                "{msg:?} should name {other}"
            );
        }
    }
}

#[test]
fn peer_buffer_roundtrip() -> Result<()> {
    // Serialize on one side, wrap the raw bytes on the other.
    let mut sender = ReferencePointPacket::new();
    sender.set_ref_point_id(3)?;
    sender.set_name("ridge repeater")?;
    sender.set_description("temporary link via the north ridge")?;

    let wire = Bytes::copy_from_slice(sender.packet().as_bytes());
    let receiver = ReferencePointPacket::from_bytes(wire)?;
    receiver.validate(false, None)?;

    assert_eq!(receiver.ref_point_id()?, 3);
    assert_eq!(receiver.name()?, "ridge repeater");
    assert_eq!(receiver.description()?, "temporary link via the north ridge");
    assert!(receiver.packet().is_read_only());
    Ok(())
}

#[test]
fn malformed_buffers_fail_construction() {
    // Shorter than the prologue.
    let err = ReferencePointPacket::from_slice(&[0x58; 8], false).unwrap_err();
    assert!(matches!(
        err,
        WireError::MalformedHeader(HeaderError::TooSmall { .. })
    ));

    // Declared word count disagrees with the buffer length.
    let mut data = PacketKind::ReferencePoint.descriptor().template.to_vec();
    data.truncate(64);
    let err = ReferencePointPacket::from_slice(&data, false).unwrap_err();
    assert!(matches!(
        err,
        WireError::MalformedHeader(HeaderError::SizeMismatch { .. })
    ));

    // Reserved type nibble.
    let mut data = PacketKind::ReferencePoint.descriptor().template.to_vec();
    data[0] = 0x68;
    let err = ReferencePointPacket::from_slice(&data, false).unwrap_err();
    assert!(matches!(
        err,
        WireError::MalformedHeader(HeaderError::UnknownType { nibble: 6 })
    ));
}

#[test]
fn validation_survives_mismatched_construction() {
    // A foreign buffer with the wrong class id constructs fine and stays
    // readable; only validation flags it.
    let mut data = PacketKind::TimestampAccuracy.descriptor().template.to_vec();
    data[15] = 0x06; // ReferencePoint's packet class code
    let packet = TimestampAccuracyPacket::from_slice(&data, false).unwrap();

    assert_eq!(packet.timestamp_accuracy().unwrap(), 0);
    let err = packet.validate(false, None).unwrap_err();
    assert!(matches!(err, ValidationError::ClassId { .. }));
    assert!(err.to_string().contains("FF-FF-FA:2011.0006"));
}

#[test]
fn oversized_description_is_clamped_not_rejected() {
    // Surface the truncation diagnostics while exercising the clamp.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("vrt_packets=warn")
        .with_test_writer()
        .try_init();

    let mut packet = ReferencePointPacket::new();
    let max_payload = packet.packet().max_payload_len();
    let limit = max_payload - 40;

    let description = "a".repeat(limit + 100);
    packet.set_description(&description).unwrap();

    assert_eq!(packet.packet().payload_len(), max_payload);
    assert_eq!(packet.packet().total_len(), 262_140);
    let read_back = packet.description().unwrap();
    assert_eq!(read_back.len(), limit);
    assert!(description.starts_with(&read_back));
    // Clamping is not a validation failure.
    assert_eq!(packet.validate(false, None), Ok(()));
}

#[test]
fn description_length_follows_word_alignment() {
    let mut packet = ReferencePointPacket::new();
    for (input_len, expect_payload) in [(0, 40), (1, 44), (4, 44), (5, 48), (17, 60)] {
        let text = "d".repeat(input_len);
        packet.set_description(&text).unwrap();
        assert_eq!(
            packet.packet().payload_len(),
            expect_payload,
            "input of {input_len} bytes"
        );
        assert_eq!(packet.description().unwrap(), text);
    }
}

#[test]
fn read_only_peer_packet_rejects_mutation() {
    let data = PacketKind::ReferencePoint.descriptor().template;
    let mut packet = ReferencePointPacket::from_slice(data, true).unwrap();
    assert_eq!(packet.set_ref_point_id(1).unwrap_err(), WireError::ReadOnly);
    assert_eq!(packet.set_name("x").unwrap_err(), WireError::ReadOnly);
    assert_eq!(
        packet.set_description("x").unwrap_err(),
        WireError::ReadOnly
    );
    // Still fully readable and valid.
    assert_eq!(packet.name().unwrap(), "");
    assert_eq!(packet.validate(true, Some(68)), Ok(()));
}
