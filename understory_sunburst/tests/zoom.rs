// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom transitions: targets, completion, supersession, and stale ticks.

mod common;

use common::{chart, close, finish_zoom, in_turn, two};
use kurbo::Size;
use understory_partition::Record;
use understory_sunburst::adapters::recording::SurfaceOp;
use understory_sunburst::{
    Capabilities, RecordingSurface, Sunburst, SunburstEvent, SunburstOptions, ZoomPhase,
};

#[test]
fn zero_weight_root_splits_by_children() {
    let c = chart(two());
    let layout = c.layout();
    let root = layout.node(layout.root());
    assert_eq!((root.angle_start, root.angle_width), (0.0, 1.0));

    let kids = layout.children_of(layout.root());
    let a = layout.node(kids[0]);
    let b = layout.node(kids[1]);
    assert_eq!((a.angle_start, a.angle_width), (0.0, 0.25));
    assert_eq!((b.angle_start, b.angle_width), (0.25, 0.75));
}

#[test]
fn click_then_root_zooms_back_out() {
    let mut c = chart(two());
    let a = c.layout().children_of(c.layout().root())[0];

    c.handle(SunburstEvent::Click(a));
    assert_eq!(c.zoom_state().phase(), ZoomPhase::Transitioning(a));
    assert_eq!(c.zoom_state().clicked(), None);
    finish_zoom(&mut c, 0.0);
    assert_eq!(c.zoom_state().clicked(), Some(a));
    assert_eq!(c.angle_scale().domain(), 0.0..0.25);
    assert_eq!(c.radius_scale().domain(), 0.5..1.0);
    assert_eq!(c.radius_scale().range(), 70.0..185.0);

    let root = c.layout().root();
    c.handle(SunburstEvent::Click(root));
    finish_zoom(&mut c, 2000.0);
    assert_eq!(c.angle_scale().domain(), 0.0..1.0);
    assert_eq!(c.radius_scale().domain(), 0.0..1.0);
    assert_eq!(c.radius_scale().range(), 0.0..185.0);
}

#[test]
fn clicking_the_focus_is_a_no_op() {
    let mut c = chart(two());
    let root = c.layout().root();
    c.on_click(root);
    assert!(c.zoom_transition().is_none());

    let a = c.layout().children_of(root)[0];
    c.on_click(a);
    let token = c.zoom_transition();
    assert!(token.is_some());
    // Still in flight towards `a`.
    c.on_click(a);
    assert_eq!(c.zoom_transition(), token);

    finish_zoom(&mut c, 0.0);
    c.on_click(a);
    assert!(c.zoom_transition().is_none());
}

#[test]
fn second_click_supersedes_the_first() {
    let mut c = chart(two());
    let kids = c.layout().children_of(c.layout().root()).to_vec();
    let (a, b) = (kids[0], kids[1]);

    c.on_click(a);
    let first = c.zoom_transition().unwrap();
    c.on_frame(0.0);
    c.on_frame(500.0);
    let halfway = c.angle_scale().domain();
    assert!(close(halfway.end, 0.625), "{halfway:?}");

    c.on_click(b);
    let second = c.zoom_transition().unwrap();
    assert_ne!(first, second);
    assert_eq!(c.zoom_state().focus(), Some(b));

    // A late tick from the first zoom changes nothing.
    c.surface_mut().take_ops();
    assert!(!c.tick_zoom(first, 1.0));
    assert!(c.surface().ops().is_empty());
    assert_eq!(c.angle_scale().domain(), halfway);
    assert_eq!(c.zoom_transition(), Some(second));

    // The second zoom starts from where the first one was cut.
    c.on_frame(600.0);
    assert_eq!(c.angle_scale().domain(), halfway);
    c.on_frame(1600.0);
    assert_eq!(c.zoom_state().clicked(), Some(b));
    assert_eq!(c.angle_scale().domain(), 0.25..1.0);
    assert!(!c.tick_zoom(first, 1.0));
    assert!(!c.tick_zoom(second, 1.0));
}

#[test]
fn external_driver_ticks_by_token() {
    let mut c = chart(two());
    let a = c.layout().children_of(c.layout().root())[0];
    c.on_click(a);
    let token = c.zoom_transition().unwrap();

    assert!(c.tick_zoom(token, 0.5));
    assert!(close(c.angle_scale().domain().end, 0.625));
    assert!(close(c.radius_scale().range().start, 35.0));
    assert!(c.zoom_state().in_transition());

    assert!(c.tick_zoom(token, 1.0));
    assert_eq!(c.zoom_state().clicked(), Some(a));
    assert!(!c.tick_zoom(token, 0.3));
    assert_eq!(c.angle_scale().domain(), 0.0..0.25);
}

#[test]
fn surfaces_without_animation_jump() {
    let surface = RecordingSurface::new(Size::new(400.0, 400.0))
        .with_capabilities(Capabilities::OPACITY);
    let mut c = Sunburst::new(surface, two(), SunburstOptions::default()).unwrap();
    let b = c.layout().children_of(c.layout().root())[1];
    c.on_click(b);
    assert!(c.zoom_transition().is_none());
    assert_eq!(c.zoom_state().clicked(), Some(b));
    assert_eq!(c.angle_scale().domain(), 0.25..1.0);
}

#[test]
fn every_tick_pushes_clamped_shapes() {
    let data = Record::branch(
        "root",
        [
            Record::branch("x", [Record::leaf("x1", 1.0), Record::leaf("x2", 5.0)]),
            Record::leaf("y", 2.0),
            Record::leaf("z", 0.0),
        ],
    );
    let mut c = chart(data);
    let x2 = common::find(&c, &["x", "x2"]);
    c.on_click(x2);
    c.surface_mut().take_ops();
    for now in [0.0, 100.0, 250.0, 500.0, 750.0, 1000.0] {
        c.on_frame(now);
    }
    let updates: Vec<_> = c
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::Update { shape, .. } => Some(*shape),
            _ => None,
        })
        .collect();
    assert_eq!(updates.len(), 6 * c.layout().len());
    for s in updates {
        assert!(in_turn(s.start_angle) && in_turn(s.end_angle), "{s:?}");
        assert!(s.inner_radius >= 0.0 && s.outer_radius >= 0.0, "{s:?}");
    }
    // Zoomed on a leaf, only it and its parent keep any area. The parent fills
    // the center hole; the root collapses to nothing.
    let visible: Vec<_> = c
        .layout()
        .iter()
        .filter(|n| !c.arc_shape(n.id).unwrap().is_empty())
        .map(|n| n.name.clone().unwrap_or_default())
        .collect();
    assert_eq!(visible, ["x", "x2"]);
}

#[test]
fn clicks_on_stale_ids_are_dropped() {
    let mut c = chart(two());
    let old_a = c.layout().children_of(c.layout().root())[0];
    c.redraw(two(), false, false).unwrap();
    assert!(!c.layout().contains(old_a));
    c.handle(SunburstEvent::Click(old_a));
    assert!(c.zoom_transition().is_none());
    assert_eq!(c.zoom_state().focus(), None);
}
