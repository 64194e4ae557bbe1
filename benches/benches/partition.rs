// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_partition::{
    Hierarchy, PartitionOptions, Record, SiblingOrder, partition, partition_with,
};

/// A complete tree with `fanout` children per node, `depth` levels below the root.
fn gen_tree(fanout: usize, depth: usize, seed: &mut u64) -> Record {
    if depth == 0 {
        // xorshift keeps leaf weights varied without pulling in a rng crate.
        *seed ^= *seed << 13;
        *seed ^= *seed >> 7;
        *seed ^= *seed << 17;
        let w = (*seed % 1000) as f64 + 1.0;
        return Record::leaf("leaf", w);
    }
    Record::branch("branch", (0..fanout).map(|_| gen_tree(fanout, depth - 1, seed)))
}

fn count(r: &Record) -> usize {
    1 + r.children().iter().map(count).sum::<usize>()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for (fanout, depth) in [(4, 4), (8, 4), (16, 3), (4, 7)] {
        let tree = gen_tree(fanout, depth, &mut 0x9e37_79b9_7f4a_7c15);
        group.throughput(Throughput::Elements(count(&tree) as u64));
        group.bench_function(format!("input_order_f{fanout}_d{depth}"), |b| {
            b.iter(|| partition(black_box(&tree), |r: &Record| r.number("size")).is_ok());
        });
        let opts = PartitionOptions {
            sibling_order: SiblingOrder::DescendingValue,
            ..Default::default()
        };
        group.bench_function(format!("descending_named_f{fanout}_d{depth}"), |b| {
            b.iter(|| {
                partition_with(
                    black_box(&tree),
                    &opts,
                    |r| r.number("size"),
                    |r| r.text("name"),
                )
                .is_ok()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
