//! Benchmarks for sample-tree aggregation

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nodelens_telemetry::{CategoryId, SampleNode, StatsAggregator};

fn wide_tree(children: usize) -> SampleNode {
    SampleNode::with_children(
        CategoryId(0),
        1.0,
        0.5,
        (0..children)
            .map(|i| SampleNode::leaf(CategoryId(i as u32 + 1), 0.1, 0.05))
            .collect(),
    )
}

fn deep_tree(depth: usize) -> SampleNode {
    let mut node = SampleNode::leaf(CategoryId(depth as u32), 0.1, 0.05);
    for level in (0..depth).rev() {
        node = SampleNode::with_children(CategoryId(level as u32), 0.1, 0.05, vec![node]);
    }
    node
}

fn bench_aggregate_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_wide");

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let tree = wide_tree(count);
            let mut aggregator = StatsAggregator::new();
            b.iter(|| black_box(aggregator.aggregate(&tree)));
        });
    }

    group.finish();
}

fn bench_aggregate_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_deep");

    for depth in [8, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let tree = deep_tree(depth);
            let mut aggregator = StatsAggregator::new();
            b.iter(|| black_box(aggregator.aggregate(&tree)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate_wide, bench_aggregate_deep);
criterion_main!(benches);
