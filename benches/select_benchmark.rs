use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stream_select::*;

fn compare_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_multiples_of_three");
    group
        .warm_up_time(std::time::Duration::from_millis(300))
        .measurement_time(std::time::Duration::from_secs(1));
    let sequential = Compactor::default();
    let parallel = Compactor::builder().strategy(Strategy::Parallel).build();
    for n in [1_000usize, 100_000, 1_000_000] {
        let v = generate(n, &GeneratorConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("sequential", n), &v, |b, v| {
            b.iter(|| sequential.select(black_box(v), |x| x % 3 == 0))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &v, |b, v| {
            b.iter(|| parallel.select(black_box(v), |x| x % 3 == 0))
        });
        group.bench_with_input(BenchmarkId::new("filter", n), &v, |b, v| {
            b.iter(|| {
                black_box(v)
                    .iter()
                    .copied()
                    .filter(|x| x % 3 == 0)
                    .collect::<Vec<_>>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, compare_strategies);
criterion_main!(benches);
