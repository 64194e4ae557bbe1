// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom transitions driven by a simulated frame clock.
//!
//! Clicks "2024", lets a third of the transition run, then clicks "2025". The
//! second click supersedes the first: the angle domain turns around mid-flight
//! and a late tick from the first zoom is discarded. Finally the container is
//! resized, which keeps the zoom.
//!
//! Run:
//! - `cargo run -p understory_demos --example sunburst_zoom`
//! - `RUST_LOG=understory_sunburst=trace cargo run -p understory_demos --example sunburst_zoom`

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_partition::{NodeId, Record};
use understory_sunburst::{Easing, RecordingSurface, Sunburst, SunburstEvent, SunburstOptions};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn budget() -> Record {
    let year = |name: &str, rent: f64, food: f64, fun: f64| {
        Record::branch(
            name,
            [
                Record::leaf("rent", rent),
                Record::leaf("food", food),
                Record::leaf("fun", fun),
            ],
        )
    };
    Record::branch(
        "budget",
        [year("2024", 12.0, 5.0, 3.0), year("2025", 13.0, 5.5, 2.0)],
    )
}

fn child(chart: &Sunburst<Record, RecordingSurface>, name: &str) -> Option<NodeId> {
    chart.layout().find_by_name_path(&[Some(name.into())])
}

fn report(chart: &Sunburst<Record, RecordingSurface>, now: f64) {
    let a = chart.angle_scale().domain();
    let r = chart.radius_scale().range();
    println!(
        "t={now:>7.1}ms  angle {:.3}..{:.3}  radius {:>5.1}..{:>5.1}  {:?}",
        a.start,
        a.end,
        r.start,
        r.end,
        chart.zoom_state().phase()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = SunburstOptions {
        easing: Easing::CubicInOut,
        zoom_duration_ms: 600.0,
        ..SunburstOptions::default()
    };
    let surface = RecordingSurface::new(Size::new(500.0, 500.0));
    let mut chart = Sunburst::new(surface, budget(), options)?;
    let (Some(y2024), Some(y2025)) = (child(&chart, "2024"), child(&chart, "2025")) else {
        return Err("missing year".into());
    };

    let mut now = 0.0;
    chart.handle(SunburstEvent::Click(y2024));
    let first = chart.zoom_transition();
    for _ in 0..12 {
        chart.on_frame(now);
        report(&chart, now);
        now += FRAME_MS;
    }

    chart.handle(SunburstEvent::Click(y2025));
    if let Some(stale) = first {
        let applied = chart.tick_zoom(stale, 1.0);
        tracing::info!(applied, "late tick from the superseded zoom");
    }
    while chart.zoom_state().in_transition() {
        chart.on_frame(now);
        report(&chart, now);
        now += FRAME_MS;
    }

    chart.handle(SunburstEvent::Resize(Size::new(900.0, 300.0)));
    println!("after resize to 900x300:");
    report(&chart, now);
    Ok(())
}
