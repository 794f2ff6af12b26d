// File: crates/hover-core/benches/hover_bench.rs
// Summary: Hover resolution latency for typical dashboard sizes (series x points).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use hover_core::{resolve, stack, HoverOptions, Position, Series};

fn gen_series(count: usize, points: usize) -> Vec<Series> {
    let mut out = Vec::with_capacity(count);
    for s in 0..count {
        let data = (0..points)
            .map(|i| {
                let t = i as f64 * 1_000.0;
                (t, (i as f64 * 0.01 + s as f64).sin() * 10.0 + 20.0)
            })
            .collect();
        out.push(Series::with_data(format!("s{s}"), "#2196f3", data).stacked(s % 2 == 0));
    }
    stack::apply(&mut out);
    out
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let opts = HoverOptions { cumulative: true, individual: false };
    for &count in &[1usize, 5, 20] {
        for &points in &[500usize, 5_000] {
            let series = gen_series(count, points);
            let x = points as f64 * 1_000.0 * 0.61;
            group.bench_with_input(BenchmarkId::from_parameter(format!("s{count}_n{points}")), &x, |b, &x| {
                b.iter(|| black_box(resolve(&series, Position::new(x, 0.0), opts)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
