//! Criterion benchmarks for shape validation and area formulas.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figures::sample::{draw_rectangle, draw_square, draw_trapezoid, ReplayToken, SampleCfg};
use figures::{Figure, Point, Rectangle, Square, Trapezoid};

fn bench_shapes(c: &mut Criterion) {
    let cfg = SampleCfg::default();
    let tok = ReplayToken { seed: 3, index: 0 };
    let (sq, _) = draw_square(cfg, tok).unwrap();
    let (rect, _) = draw_rectangle(cfg, tok).unwrap();
    let (trap, _) = draw_trapezoid(cfg, tok).unwrap();

    let mut group = c.benchmark_group("shapes");
    group.bench_function("square_new", |b| {
        let p: [Point<f64>; 4] = sq.points().try_into().unwrap();
        b.iter(|| Square::from_points(black_box(p)).unwrap())
    });
    group.bench_function("rectangle_new", |b| {
        let p: [Point<f64>; 4] = rect.points().try_into().unwrap();
        b.iter(|| Rectangle::from_points(black_box(p)).unwrap())
    });
    group.bench_function("trapezoid_new", |b| {
        let p: [Point<f64>; 4] = trap.points().try_into().unwrap();
        b.iter(|| Trapezoid::from_points(black_box(p)).unwrap())
    });
    group.bench_function("trapezoid_area", |b| b.iter(|| black_box(&trap).area()));
    group.bench_function("integer_rectangle_area", |b| {
        let p = [
            Point::new(0, 0),
            Point::new(300, 0),
            Point::new(300, 200),
            Point::new(0, 200),
        ];
        let r = Rectangle::from_points(p).unwrap();
        b.iter(|| black_box(&r).area())
    });
    group.finish();
}

criterion_group!(benches, bench_shapes);
criterion_main!(benches);
