// File: crates/prettyplot-core/benches/histogram_bench.rs
// Summary: Criterion benchmarks for histogram binning (edge construction + density heights).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prettyplot_core::histogram::{bin_edges, heights};
use prettyplot_core::{Bins, Cumulative};

fn gen_samples(n: usize) -> Vec<f64> {
    // deterministic, roughly bell-shaped
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.618_033_988_75;
            (t.fract() + (t * 1.3).fract() + (t * 1.7).fract()) * 10.0
        })
        .collect()
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    for &n in &[10_000usize, 100_000usize] {
        let samples = gen_samples(n);
        for &bins in &[10usize, 100usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_b{bins}")), &bins, |b, &bins| {
                b.iter(|| {
                    let edges = bin_edges(&samples, &Bins::Count(bins), false).unwrap_or_default();
                    black_box(heights(&samples, &edges, true, Cumulative::Off))
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_histogram);
criterion_main!(benches);
