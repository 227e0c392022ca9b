//! Criterion benchmarks for the hot placement/rounding paths.
//! These run per label draw in the chart renderers, so keep them allocation
//! free and branch cheap.

use chart_geom::draw::place;
use chart_geom::geom::{round_to_next_significant, Anchor, Size};
use chart_geom::Vec2;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_rotated_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotated_size");
    for &deg in &[0.0f64, 15.0, 45.0, 90.0, 210.0] {
        group.bench_with_input(BenchmarkId::from_parameter(deg), &deg, |b, &deg| {
            let th = deg.to_radians();
            b.iter(|| black_box(Size::new(120.0, 14.0)).rotated_by(black_box(th)))
        });
    }
    group.finish();
}

fn bench_round_significant(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_significant");
    for &x in &[0.000_43f64, 0.5, 7.0, 1234.0, 9.87e7] {
        group.bench_with_input(BenchmarkId::from_parameter(x), &x, |b, &x| {
            b.iter(|| round_to_next_significant(black_box(x)))
        });
    }
    group.finish();
}

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("place");
    group.bench_function("plain_center", |b| {
        b.iter(|| {
            place(
                black_box(Vec2::new(100.0, 100.0)),
                black_box(Size::new(64.0, 12.0)),
                Anchor::CENTER,
                0.0,
            )
        })
    });
    group.bench_function("rotated_off_center", |b| {
        b.iter(|| {
            place(
                black_box(Vec2::new(100.0, 100.0)),
                black_box(Size::new(64.0, 12.0)),
                Anchor::new(1.0, 0.0),
                black_box(0.9),
            )
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rotated_size,
    bench_round_significant,
    bench_place
);
criterion_main!(benches);
