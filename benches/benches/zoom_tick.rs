// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_partition::{Record, partition};
use understory_sunburst::{
    RecordingSurface, ScaleKind, ScaleMapping, Sunburst, SunburstOptions, arc_for,
};

type Chart = Sunburst<Record, RecordingSurface>;

fn gen_tree(fanout: usize, depth: usize) -> Record {
    if depth == 0 {
        return Record::leaf("leaf", 1.0);
    }
    Record::branch(
        "branch",
        (0..fanout).map(|_| gen_tree(fanout, depth - 1)),
    )
}

fn chart(fanout: usize, depth: usize) -> Chart {
    let surface = RecordingSurface::new(Size::new(800.0, 800.0));
    let options = SunburstOptions {
        fade_in_max_arcs: 0,
        ..SunburstOptions::default()
    };
    match Sunburst::new(surface, gen_tree(fanout, depth), options) {
        Ok(c) => c,
        Err(e) => panic!("bench chart: {e}"),
    }
}

/// A chart halfway into zooming on the first child of the root.
fn zooming(fanout: usize, depth: usize) -> Chart {
    let mut sb = chart(fanout, depth);
    let target = sb.layout().children_of(sb.layout().root())[0];
    sb.on_click(target);
    sb.on_frame(0.0);
    sb.surface_mut().take_ops();
    sb
}

fn bench_arc_for(c: &mut Criterion) {
    let tree = gen_tree(8, 4);
    let layout = match partition(&tree, |_| None) {
        Ok(l) => l,
        Err(e) => panic!("bench layout: {e}"),
    };
    let angle = ScaleMapping::angle();
    let radius = ScaleMapping::radius(ScaleKind::Sqrt, 385.0);
    let mut group = c.benchmark_group("arc_for");
    group.throughput(Throughput::Elements(layout.len() as u64));
    group.bench_function("all_nodes", |b| {
        b.iter(|| {
            for n in &layout {
                black_box(arc_for(n, &angle, &radius, 0.0));
            }
        });
    });
    group.finish();
}

fn bench_zoom_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_tick");
    for (fanout, depth) in [(4, 4), (8, 4), (16, 3)] {
        let sb = chart(fanout, depth);
        group.throughput(Throughput::Elements(sb.layout().len() as u64));
        group.bench_function(format!("frame_f{fanout}_d{depth}"), |b| {
            b.iter_batched(
                || zooming(fanout, depth),
                |mut sb| {
                    sb.on_frame(black_box(500.0));
                    sb
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_function(format!("hit_test_f{fanout}_d{depth}"), |b| {
            b.iter(|| sb.hit_test(black_box(Point::new(600.0, 300.0))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arc_for, bench_zoom_tick);
criterion_main!(benches);
