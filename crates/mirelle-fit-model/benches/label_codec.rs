// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mirelle_fit_model::{CanonicalSize, RegionCode, RegionRegistry};

fn bench_label_parse_format(c: &mut Criterion) {
    let registry = RegionRegistry::builtin();
    let us = registry.scheme(RegionCode::Us).expect("US scheme");
    let canonical = CanonicalSize::new(75, 3).expect("canonical");

    c.bench_function("label_parse", |b| {
        b.iter(|| us.parse_label(black_box("34C")).expect("parse"))
    });

    c.bench_function("label_format", |b| {
        b.iter(|| us.format_label(black_box(canonical)).expect("format"))
    });

    c.bench_function("registry_build", |b| b.iter(RegionRegistry::builtin));
}

criterion_group!(benches, bench_label_parse_format);
criterion_main!(benches);
