// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless surface that keeps every arc in memory and logs every call.
//!
//! Useful for tests, for snapshotting a chart, and as the retained model behind
//! an immediate-mode renderer: walk [`RecordingSurface::arcs`] each frame and
//! fill [`ArcShape::path`] with [`RecordedArc::fill`].
//!
//! ```
//! use kurbo::{Point, Size};
//! use peniko::Color;
//! use understory_sunburst::{ArcShape, Surface};
//! use understory_sunburst::adapters::recording::{RecordingSurface, SurfaceOp};
//! # use understory_partition::{Record, partition};
//! # let p = partition(&Record::new(), |_| None).unwrap();
//! # let node = p.root();
//!
//! let mut s = RecordingSurface::new(Size::new(200.0, 100.0));
//! let arc = s.draw_arc(node, &ArcShape::EMPTY, Color::BLACK).unwrap();
//! s.set_arc_opacity(&arc, 0.5);
//! assert_eq!(s.arc(&arc).unwrap().opacity, 0.5);
//! s.remove_arc(arc);
//! assert_eq!(s.arc_count(), 0);
//! assert!(matches!(s.ops().last(), Some(SurfaceOp::Remove { .. })));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use understory_partition::NodeId;

use crate::arc::ArcShape;
use crate::surface::{Capabilities, Surface, SurfaceError};

/// Handle of an arc drawn on a [`RecordingSurface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArcKey(usize);

/// A live arc.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RecordedArc {
    /// Node the arc was drawn for.
    pub node: NodeId,
    /// Current shape.
    pub shape: ArcShape,
    /// Fill color.
    pub fill: Color,
    /// Current opacity.
    pub opacity: f64,
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`Surface::set_size`].
    SetSize(Size),
    /// [`Surface::set_view_box`].
    SetViewBox(Rect),
    /// [`Surface::draw_arc`] that succeeded.
    Draw {
        /// New handle.
        key: ArcKey,
        /// Node drawn.
        node: NodeId,
    },
    /// [`Surface::update_arc`].
    Update {
        /// Updated handle.
        key: ArcKey,
        /// Node of the arc.
        node: NodeId,
        /// New shape.
        shape: ArcShape,
    },
    /// [`Surface::remove_arc`].
    Remove {
        /// Removed handle.
        key: ArcKey,
        /// Node of the arc.
        node: NodeId,
    },
    /// [`Surface::set_arc_opacity`].
    Opacity {
        /// Handle.
        key: ArcKey,
        /// New opacity.
        opacity: f64,
    },
    /// [`Surface::show_label`].
    ShowLabel(String),
    /// [`Surface::hide_label`].
    HideLabel,
    /// [`Surface::place_label`].
    PlaceLabel(Point),
}

/// A [`Surface`] that records instead of rendering.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    container: Size,
    capabilities: Capabilities,
    draws_before_failure: Option<usize>,
    slots: Vec<Option<RecordedArc>>,
    ops: Vec<SurfaceOp>,
    size: Size,
    view_box: Rect,
    label: Option<String>,
    label_center: Point,
}

impl RecordingSurface {
    /// A surface in a container of `container` size, with every capability.
    pub fn new(container: Size) -> Self {
        Self {
            container,
            capabilities: Capabilities::default(),
            draws_before_failure: None,
            slots: Vec::new(),
            ops: Vec::new(),
            size: Size::ZERO,
            view_box: Rect::ZERO,
            label: None,
            label_center: Point::ZERO,
        }
    }

    /// Replace the advertised capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Change the container size reported to the chart.
    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
    }

    /// Let the next `draws` draws succeed and fail every one after that.
    pub fn fail_draws_after(&mut self, draws: usize) {
        self.draws_before_failure = Some(draws);
    }

    /// Stop failing draws.
    pub fn heal(&mut self) {
        self.draws_before_failure = None;
    }

    /// Number of live arcs.
    pub fn arc_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Live arcs in drawing order.
    pub fn arcs(&self) -> impl Iterator<Item = &RecordedArc> + '_ {
        self.slots.iter().flatten()
    }

    /// Live arc behind `key`.
    pub fn arc(&self, key: &ArcKey) -> Option<&RecordedArc> {
        self.slots.get(key.0)?.as_ref()
    }

    /// Live arc drawn for `node`.
    pub fn arc_of(&self, node: NodeId) -> Option<&RecordedArc> {
        self.arcs().find(|a| a.node == node)
    }

    /// Every call so far.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the call log.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Number of logged updates for `node`.
    pub fn updates_of(&self, node: NodeId) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Update { node: n, .. } if *n == node))
            .count()
    }

    /// Current label markup, if shown.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Where the label is centered.
    pub fn label_center(&self) -> Point {
        self.label_center
    }

    /// Last size set by the chart.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Last view box set by the chart.
    pub fn view_box(&self) -> Rect {
        self.view_box
    }
}

impl Surface for RecordingSurface {
    type Arc = ArcKey;

    fn container_size(&self) -> Size {
        self.container
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.ops.push(SurfaceOp::SetSize(size));
    }

    fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = view_box;
        self.ops.push(SurfaceOp::SetViewBox(view_box));
    }

    fn draw_arc(
        &mut self,
        node: NodeId,
        shape: &ArcShape,
        fill: Color,
    ) -> Result<Self::Arc, SurfaceError> {
        if let Some(left) = self.draws_before_failure.as_mut() {
            if *left == 0 {
                return Err(SurfaceError::Backend("draw rejected".into()));
            }
            *left -= 1;
        }
        let key = ArcKey(self.slots.len());
        self.slots.push(Some(RecordedArc {
            node,
            shape: *shape,
            fill,
            opacity: 1.0,
        }));
        self.ops.push(SurfaceOp::Draw { key, node });
        Ok(key)
    }

    fn update_arc(&mut self, arc: &Self::Arc, shape: &ArcShape) {
        if let Some(Some(rec)) = self.slots.get_mut(arc.0) {
            rec.shape = *shape;
            self.ops.push(SurfaceOp::Update {
                key: *arc,
                node: rec.node,
                shape: *shape,
            });
        }
    }

    fn remove_arc(&mut self, arc: Self::Arc) {
        if let Some(rec) = self.slots.get_mut(arc.0).and_then(Option::take) {
            self.ops.push(SurfaceOp::Remove {
                key: arc,
                node: rec.node,
            });
        }
    }

    fn set_arc_opacity(&mut self, arc: &Self::Arc, opacity: f64) {
        if let Some(Some(rec)) = self.slots.get_mut(arc.0) {
            rec.opacity = opacity;
            self.ops.push(SurfaceOp::Opacity { key: *arc, opacity });
        }
    }

    fn show_label(&mut self, markup: &str) {
        self.label = Some(markup.into());
        self.ops.push(SurfaceOp::ShowLabel(markup.into()));
    }

    fn hide_label(&mut self) {
        self.label = None;
        self.ops.push(SurfaceOp::HideLabel);
    }

    fn place_label(&mut self, center: Point) {
        self.label_center = center;
        self.ops.push(SurfaceOp::PlaceLabel(center));
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_partition::{Record, partition};

    fn node() -> NodeId {
        partition(&Record::new(), |_| None).unwrap().root()
    }

    #[test]
    fn injected_failure_counts_down() {
        let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
        s.fail_draws_after(1);
        assert!(s.draw_arc(node(), &ArcShape::EMPTY, Color::WHITE).is_ok());
        assert_eq!(
            s.draw_arc(node(), &ArcShape::EMPTY, Color::WHITE),
            Err(SurfaceError::Backend("draw rejected".into()))
        );
        s.heal();
        assert!(s.draw_arc(node(), &ArcShape::EMPTY, Color::WHITE).is_ok());
        assert_eq!(s.arc_count(), 2);
    }

    #[test]
    fn removed_arcs_ignore_updates() {
        let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
        let k = s.draw_arc(node(), &ArcShape::EMPTY, Color::WHITE).unwrap();
        s.remove_arc(k);
        let before = s.ops().len();
        s.update_arc(&k, &ArcShape::EMPTY);
        s.set_arc_opacity(&k, 0.0);
        s.remove_arc(k);
        assert_eq!(s.ops().len(), before);
        assert!(s.arc(&k).is_none());
    }

    #[test]
    fn label_round_trip() {
        let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
        s.show_label("x");
        s.place_label(Point::new(5.0, 5.0));
        assert_eq!(s.label(), Some("x"));
        assert_eq!(s.label_center(), Point::new(5.0, 5.0));
        s.hide_label();
        assert_eq!(s.label(), None);
        assert_eq!(s.take_ops().len(), 3);
        assert!(s.ops().is_empty());
    }
}
