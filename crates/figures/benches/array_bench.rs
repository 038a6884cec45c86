//! Criterion benchmarks for the shared-handle array.
//! Focus sizes: n in {8, 64, 512}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use figures::sample::{draw_figure, ReplayToken, SampleCfg};
use figures::{Array, FigureRef};

fn random_figures(n: usize, seed: u64) -> Vec<FigureRef<f64>> {
    let cfg = SampleCfg::default();
    (0..n as u64)
        .map(|index| draw_figure(cfg, ReplayToken { seed, index }).unwrap().0)
        .collect()
}

fn filled(figs: &[FigureRef<f64>]) -> Array<f64> {
    let mut a = Array::with_capacity(1);
    for f in figs {
        a.push(f.clone());
    }
    a
}

fn bench_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("array");
    for &n in &[8usize, 64, 512] {
        let figs = random_figures(n, 11);

        group.bench_with_input(BenchmarkId::new("push_from_cap1", n), &figs, |b, figs| {
            b.iter(|| filled(figs))
        });

        let arr = filled(&figs);
        group.bench_with_input(BenchmarkId::new("total_area", n), &arr, |b, arr| {
            b.iter(|| arr.total_area())
        });

        group.bench_with_input(BenchmarkId::new("deep_clone", n), &arr, |b, arr| {
            b.iter(|| arr.clone())
        });

        group.bench_with_input(BenchmarkId::new("remove_front", n), &figs, |b, figs| {
            b.iter_batched(
                || filled(figs),
                |mut a| {
                    while a.remove(0).is_some() {}
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_array);
criterion_main!(benches);
