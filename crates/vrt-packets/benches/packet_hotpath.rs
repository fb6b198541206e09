use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use vrt_packets::{validate, PacketKind, ReferencePointPacket, VrtPacket};

/// Benchmark template stamping and buffer-wrapping construction.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    group.throughput(Throughput::Elements(1));

    group.bench_function("from_template", |b| {
        b.iter(|| black_box(ReferencePointPacket::new()));
    });

    let wire = PacketKind::ReferencePoint.descriptor().template;
    group.bench_function("from_peer_buffer", |b| {
        b.iter(|| VrtPacket::from_slice(black_box(wire), true).unwrap());
    });

    group.finish();
}

/// Benchmark the field codec hot path: typed set + get.
fn bench_field_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("fields");
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_get_int32", |b| {
        let mut packet = ReferencePointPacket::new();
        b.iter(|| {
            packet.set_ref_point_id(black_box(42)).unwrap();
            black_box(packet.ref_point_id().unwrap());
        });
    });

    group.bench_function("set_get_ascii_name", |b| {
        let mut packet = ReferencePointPacket::new();
        b.iter(|| {
            packet.set_name(black_box("west tower feed")).unwrap();
            black_box(packet.name().unwrap());
        });
    });

    group.bench_function("set_description_resize", |b| {
        let mut packet = ReferencePointPacket::new();
        let description = "calibration reference on the north ridge".repeat(4);
        b.iter(|| {
            packet.set_description(black_box(&description)).unwrap();
            packet.set_description(black_box("short")).unwrap();
        });
    });

    group.finish();
}

/// Benchmark validation of a well-formed packet.
fn bench_validate(c: &mut Criterion) {
    let packet = VrtPacket::from_kind(PacketKind::ReferencePoint);

    let mut group = c.benchmark_group("validate");
    group.throughput(Throughput::Elements(1));
    group.bench_function("reference_point_ok", |b| {
        b.iter(|| validate(black_box(&packet), PacketKind::ReferencePoint, true, Some(68)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_field_access,
    bench_validate
);
criterion_main!(benches);
