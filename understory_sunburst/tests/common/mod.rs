// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for chart integration tests.

#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the fixtures."
)]

use core::f64::consts::TAU;

use kurbo::{Point, Size};
use understory_partition::{NodeId, Record};
use understory_sunburst::{RecordingSurface, Sunburst, SunburstOptions};

pub(crate) type Chart = Sunburst<Record, RecordingSurface>;

pub(crate) const EPS: f64 = 1e-9;

/// `root{weight: 0, children: [A{1}, B{3}]}`.
pub(crate) fn two() -> Record {
    Record::new()
        .with_text("name", "root")
        .with_number("size", 0.0)
        .with_child(Record::leaf("A", 1.0))
        .with_child(Record::leaf("B", 3.0))
}

/// Two years of spending; `rent` appears under both at depth 2.
pub(crate) fn spend() -> Record {
    Record::branch(
        "root",
        [
            Record::branch("a", [Record::leaf("rent", 2.0), Record::leaf("food", 1.0)]),
            Record::branch("b", [Record::leaf("rent", 3.0), Record::leaf("fun", 1.0)]),
        ],
    )
}

pub(crate) fn chart(data: Record) -> Chart {
    chart_with(data, SunburstOptions::default())
}

pub(crate) fn chart_with(data: Record, options: SunburstOptions) -> Chart {
    let surface = RecordingSurface::new(Size::new(400.0, 400.0));
    Sunburst::new(surface, data, options).unwrap()
}

/// First node reached by following `names` from the root.
pub(crate) fn find(chart: &Chart, names: &[&str]) -> NodeId {
    let path: Vec<Option<String>> = names.iter().map(|n| Some((*n).to_string())).collect();
    chart
        .layout()
        .find_by_name_path(&path)
        .unwrap_or_else(|| panic!("no node at {names:?}"))
}

/// Run the current zoom to completion, starting at `start_ms`.
pub(crate) fn finish_zoom(chart: &mut Chart, start_ms: f64) {
    let duration = chart.options().zoom_duration_ms;
    chart.on_frame(start_ms);
    chart.on_frame(start_ms + duration);
    assert!(
        !chart.zoom_state().in_transition(),
        "zoom should be done after its duration"
    );
}

/// Container point at `angle` radians clockwise from twelve o'clock and `radius` from the center.
pub(crate) fn polar(chart: &Chart, angle: f64, radius: f64) -> Point {
    let size = chart.size();
    Point::new(
        size.width / 2.0 + radius * angle.sin(),
        size.height / 2.0 - radius * angle.cos(),
    )
}

pub(crate) fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub(crate) fn in_turn(a: f64) -> bool {
    (0.0..=TAU).contains(&a)
}
