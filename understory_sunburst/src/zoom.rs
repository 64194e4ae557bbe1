// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom state: which node is focused, and how the scales get there.

use core::ops::Range;

use understory_partition::{LayoutNode, NodeId};

use crate::arc::lerp;
use crate::scale::ScaleMapping;
use crate::transition::TransitionToken;

/// Scale parameters that a zoom moves between.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomFrame {
    /// Domain of the angle mapping.
    pub angle_domain: Range<f64>,
    /// Domain of the radius mapping.
    pub radius_domain: Range<f64>,
    /// Range of the radius mapping.
    pub radius_range: Range<f64>,
}

impl ZoomFrame {
    /// Read the frame currently set on the two mappings.
    pub fn capture(angle: &ScaleMapping, radius: &ScaleMapping) -> Self {
        Self {
            angle_domain: angle.domain(),
            radius_domain: radius.domain(),
            radius_range: radius.range(),
        }
    }

    /// Write this frame onto the two mappings.
    pub fn apply(&self, angle: &mut ScaleMapping, radius: &mut ScaleMapping) {
        angle.set_domain(self.angle_domain.clone());
        radius.set_domain(self.radius_domain.clone());
        radius.set_range(self.radius_range.clone());
    }

    /// Interpolate every bound towards `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            angle_domain: lerp_range(&self.angle_domain, &other.angle_domain, t),
            radius_domain: lerp_range(&self.radius_domain, &other.radius_domain, t),
            radius_range: lerp_range(&self.radius_range, &other.radius_range, t),
        }
    }

    /// The frame that focuses `node`.
    ///
    /// Nodes below the root leave a hole of `min_radius` in the middle so the
    /// parent ring stays clickable. The hole never exceeds `max_radius`.
    pub fn target(node: &LayoutNode, min_radius: f64, max_radius: f64) -> Self {
        let inner = if node.radius_start > 0.0 {
            min_radius.min(max_radius)
        } else {
            0.0
        };
        Self {
            angle_domain: node.angle_start..node.angle_end(),
            radius_domain: node.radius_start..1.0,
            radius_range: inner..max_radius,
        }
    }

    /// The unzoomed frame.
    pub fn full(max_radius: f64) -> Self {
        Self {
            angle_domain: 0.0..1.0,
            radius_domain: 0.0..1.0,
            radius_range: 0.0..max_radius,
        }
    }
}

fn lerp_range(a: &Range<f64>, b: &Range<f64>, t: f64) -> Range<f64> {
    lerp(a.start, b.start, t)..lerp(a.end, b.end, t)
}

/// An in-flight zoom: endpoints captured when the click arrived.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ZoomPlan {
    pub(crate) node: NodeId,
    pub(crate) token: TransitionToken,
    pub(crate) from: ZoomFrame,
    pub(crate) to: ZoomFrame,
}

impl ZoomPlan {
    pub(crate) fn at(&self, t: f64) -> ZoomFrame {
        if t >= 1.0 {
            self.to.clone()
        } else {
            self.from.lerp(&self.to, t)
        }
    }
}

/// Phase of the zoom state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomPhase {
    /// No transition in flight.
    Idle,
    /// A transition towards the given node is in flight.
    Transitioning(NodeId),
}

/// Interaction state of one chart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoomState {
    pub(crate) clicked: Option<NodeId>,
    pub(crate) target: Option<NodeId>,
    pub(crate) hovered: Option<NodeId>,
}

impl ZoomState {
    /// Node whose zoom last completed.
    pub fn clicked(&self) -> Option<NodeId> {
        self.clicked
    }

    /// Node currently under the pointer.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Returns `true` while a zoom transition is in flight.
    pub fn in_transition(&self) -> bool {
        self.target.is_some()
    }

    /// The node the chart is zoomed on or zooming towards. `None` means the root.
    pub fn focus(&self) -> Option<NodeId> {
        self.target.or(self.clicked)
    }

    /// Current phase.
    pub fn phase(&self) -> ZoomPhase {
        match self.target {
            Some(node) => ZoomPhase::Transitioning(node),
            None => ZoomPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionSlot;
    use crate::Easing;
    use understory_partition::{Hierarchy, Record, partition};

    #[test]
    fn target_of_root_and_child() {
        let root = Record::new()
            .with_child(Record::leaf("a", 1.0))
            .with_child(Record::leaf("b", 3.0));
        let p = partition(&root, |r: &Record| r.number("size")).unwrap();

        let r = ZoomFrame::target(p.node(p.root()), 70.0, 185.0);
        assert_eq!(r, ZoomFrame::full(185.0));

        let b = p.children_of(p.root())[1];
        let f = ZoomFrame::target(p.node(b), 70.0, 185.0);
        assert_eq!(f.angle_domain, 0.25..1.0);
        assert_eq!(f.radius_domain, 0.5..1.0);
        assert_eq!(f.radius_range, 70.0..185.0);
    }

    #[test]
    fn target_hole_is_capped_by_the_outer_radius() {
        let root = Record::new().with_child(Record::leaf("a", 1.0));
        let p = partition(&root, |r: &Record| r.number("size")).unwrap();
        let a = p.children_of(p.root())[0];

        assert_eq!(ZoomFrame::target(p.node(a), 70.0, 40.0).radius_range, 40.0..40.0);
        assert_eq!(ZoomFrame::target(p.node(a), 70.0, 0.0).radius_range, 0.0..0.0);
    }

    #[test]
    fn capture_apply_round_trip() {
        let mut angle = ScaleMapping::angle();
        let mut radius = ScaleMapping::radius(crate::ScaleKind::Sqrt, 100.0);
        let frame = ZoomFrame {
            angle_domain: 0.1..0.2,
            radius_domain: 0.3..1.0,
            radius_range: 70.0..100.0,
        };
        frame.apply(&mut angle, &mut radius);
        assert_eq!(ZoomFrame::capture(&angle, &radius), frame);
    }

    fn ids() -> (NodeId, NodeId) {
        let root = Record::new()
            .with_child(Record::leaf("a", 1.0))
            .with_child(Record::leaf("b", 3.0));
        let p = partition(&root, |r: &Record| r.number("size")).unwrap();
        let c = p.children_of(p.root());
        (c[0], c[1])
    }

    #[test]
    fn plan_lands_exactly_on_target() {
        let mut slot = TransitionSlot::new();
        let plan = ZoomPlan {
            node: ids().0,
            token: slot.start(10.0, Easing::Linear),
            from: ZoomFrame::full(100.0),
            to: ZoomFrame {
                angle_domain: 0.3..0.7,
                radius_domain: 0.25..1.0,
                radius_range: 70.0..100.0,
            },
        };
        assert_eq!(plan.at(0.0), plan.from);
        assert_eq!(plan.at(1.0), plan.to);
        let mid = plan.at(0.5);
        assert!((mid.angle_domain.start - 0.15).abs() < 1e-12);
        assert!((mid.angle_domain.end - 0.85).abs() < 1e-12);
        assert_eq!(mid.radius_range, 35.0..100.0);
    }

    #[test]
    fn focus_prefers_in_flight_target() {
        let (a, b) = ids();
        let mut s = ZoomState::default();
        assert_eq!(s.focus(), None);
        assert_eq!(s.phase(), ZoomPhase::Idle);
        s.clicked = Some(a);
        assert_eq!(s.focus(), Some(a));
        s.target = Some(b);
        assert_eq!(s.focus(), Some(b));
        assert!(s.in_transition());
        assert_eq!(s.phase(), ZoomPhase::Transitioning(b));
    }
}
