//! Criterion micro-benchmarks for OVF and VTK encoding.

use criterion::{criterion_group, criterion_main, Criterion};
use dfield_bench::{reference_mesh, vortex_field};
use dfield_io::{ovf, vtk, Representation};
use std::hint::black_box;

/// Benchmark: Encode 100K cells in each OVF representation.
fn bench_ovf_encode(c: &mut Criterion) {
    let field = vortex_field(reference_mesh().unwrap(), 8e5).unwrap();

    for r in [
        Representation::Text,
        Representation::Binary4,
        Representation::Binary8,
    ] {
        let name = format!("ovf_encode_{}_100k", r.tag().replace(' ', "").to_lowercase());
        c.bench_function(&name, |b| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(8 << 20);
                ovf::encode(&mut buf, &field, r).unwrap();
                black_box(&buf);
            });
        });
    }
}

/// Benchmark: Decode the same field from Text and Binary 8.
fn bench_ovf_decode(c: &mut Criterion) {
    let field = vortex_field(reference_mesh().unwrap(), 8e5).unwrap();

    for r in [Representation::Text, Representation::Binary8] {
        let mut encoded = Vec::new();
        ovf::encode(&mut encoded, &field, r).unwrap();
        let name = format!("ovf_decode_{}_100k", r.tag().replace(' ', "").to_lowercase());
        c.bench_function(&name, |b| {
            b.iter(|| {
                let decoded = ovf::decode(&mut encoded.as_slice()).unwrap();
                black_box(&decoded);
            });
        });
    }
}

/// Benchmark: Encode 100K cells as legacy VTK.
fn bench_vtk_encode(c: &mut Criterion) {
    let field = vortex_field(reference_mesh().unwrap(), 8e5).unwrap();

    c.bench_function("vtk_encode_100k", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(8 << 20);
            vtk::encode(&mut buf, &field).unwrap();
            black_box(&buf);
        });
    });
}

criterion_group!(benches, bench_ovf_encode, bench_ovf_decode, bench_vtk_encode);
criterion_main!(benches);
