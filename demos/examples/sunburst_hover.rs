// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven hover: hit testing, the center label and group highlight.
//!
//! Sweeps a pointer around the outer ring. Each arc it enters shows its label,
//! and every "rent" arc grows together because the highlight groups depth-2
//! arcs by name.
//!
//! Run:
//! - `cargo run -p understory_demos --example sunburst_hover`

use std::f64::consts::TAU;

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_partition::Record;
use understory_sunburst::adapters::recording::SurfaceOp;
use understory_sunburst::{RecordingSurface, Sunburst, SunburstEvent, SunburstOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = Record::branch(
        "budget",
        [
            Record::branch("2024", [Record::leaf("rent", 12.0), Record::leaf("food", 5.0)]),
            Record::branch("2025", [Record::leaf("rent", 13.0), Record::leaf("fun", 2.0)]),
        ],
    );
    let size = Size::new(400.0, 400.0);
    let mut chart = Sunburst::new(RecordingSurface::new(size), data, SunburstOptions::default())?;
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let radius = chart.max_radius() * 0.95;

    let mut now = 0.0;
    for step in 0..8 {
        let angle = TAU * (f64::from(step) + 0.5) / 8.0;
        let pt = center + radius * kurbo::Vec2::new(angle.sin(), -angle.cos());
        chart.surface_mut().take_ops();
        chart.handle_all([SunburstEvent::PointerMove(pt)]);
        for _ in 0..8 {
            chart.on_frame(now);
            now += 16.0;
        }

        let grown: Vec<String> = chart
            .layout()
            .iter()
            .filter(|n| {
                chart
                    .arc_shape(n.id)
                    .is_some_and(|s| s.outer_radius > chart.max_radius() + 1e-6)
            })
            .map(|n| n.name.clone().unwrap_or_default())
            .collect();
        let label_changed = chart
            .surface()
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::ShowLabel(_)));
        println!(
            "{:>5.1}°  label {:<8} changed {:<5}  grown {:?}",
            angle.to_degrees(),
            chart.surface().label().unwrap_or("-"),
            label_changed,
            grown
        );
    }

    chart.handle_all([SunburstEvent::PointerExit]);
    println!("after exit: label {:?}", chart.surface().label());
    Ok(())
}
