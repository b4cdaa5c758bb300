use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph_rs::{
    algorithms::{params::CountOptions, path_count::PathCount},
    builder::make_graph,
    graph::Graph,
};
use num_bigint::BigUint;

fn window_graph(n: u32, window: u32) -> Graph<u32> {
    let edges = (0..n).flat_map(move |i| (i + 1..=(i + window).min(n)).map(move |j| (i, j)));

    make_graph(edges).expect("graph has at least one edge")
}

pub fn path_count_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_count");

    for n in [100, 1_000, 10_000] {
        let graph = window_graph(n, 3);
        let options = CountOptions::default();

        group.sample_size(10);
        group.bench_with_input(BenchmarkId::new("serial", n), &graph, |b, g| {
            b.iter(|| g.count_paths_with::<BigUint>(0, n, options))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &graph, |b, g| {
            b.iter(|| g.par_count_paths_with::<BigUint>(0, n, options))
        });
    }

    group.finish();
}

criterion_group!(path_count, path_count_bench);
criterion_main!(path_count);
