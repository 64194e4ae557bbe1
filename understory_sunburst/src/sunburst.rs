// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart controller: owns layout, scales and interaction state, and drives a [`Surface`].

use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect, Size};
use understory_partition::{
    Hierarchy, LayoutNode, NodeId, Partition, PartitionError, PartitionOptions, partition_with,
};

use crate::arc::{ArcShape, arc_for};
use crate::error::SunburstError;
use crate::events::SunburstEvent;
use crate::highlight::HoverTweens;
use crate::hover::{HoverEvent, HoverTracker};
use crate::options::SunburstOptions;
use crate::scale::ScaleMapping;
use crate::surface::{Capabilities, Surface};
use crate::transition::{Easing, TransitionSlot, TransitionToken};
use crate::zoom::{ZoomFrame, ZoomPlan, ZoomState};

const FIRST_EPOCH: u32 = 1;

/// An interactive sunburst chart over a hierarchy `H`, drawn on a surface `S`.
///
/// The chart is frame-driven: input arrives through [`handle`](Self::handle) (or
/// the `on_*` methods) and animations advance in [`on_frame`](Self::on_frame).
/// Nothing here blocks or spawns; one instance owns all of its state.
///
/// ```
/// use kurbo::Size;
/// use understory_partition::Record;
/// use understory_sunburst::{RecordingSurface, Sunburst, SunburstEvent, SunburstOptions};
///
/// let data = Record::branch("root", [
///     Record::branch("a", [Record::leaf("a1", 1.0), Record::leaf("a2", 2.0)]),
///     Record::leaf("b", 3.0),
/// ]);
/// let surface = RecordingSurface::new(Size::new(400.0, 400.0));
/// let mut chart = Sunburst::new(surface, data, SunburstOptions::default()).unwrap();
/// assert_eq!(chart.surface().arc_count(), 4);
///
/// // Zoom into "a" and let the transition run.
/// let a = chart.layout().children_of(chart.layout().root())[0];
/// chart.handle(SunburstEvent::Click(a));
/// chart.on_frame(0.0);
/// chart.on_frame(1000.0);
/// assert_eq!(chart.zoom_state().clicked(), Some(a));
/// assert_eq!(chart.angle_scale().domain(), 0.0..0.5);
/// ```
pub struct Sunburst<H: Hierarchy, S: Surface> {
    surface: S,
    options: SunburstOptions,
    data: H,
    layout: Partition,
    arcs: Vec<S::Arc>,
    shown: Vec<ArcShape>,
    angle: ScaleMapping,
    radius: ScaleMapping,
    size: Size,
    max_radius: f64,
    state: ZoomState,
    zoom: TransitionSlot,
    plan: Option<ZoomPlan>,
    hover: HoverTweens,
    fade: TransitionSlot,
    pointer: HoverTracker<NodeId>,
    label_visible: bool,
    label_hide_pending: bool,
}

impl<H: Hierarchy, S: Surface> core::fmt::Debug for Sunburst<H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sunburst")
            .field("nodes", &self.layout.len())
            .field("generation", &self.layout.generation())
            .field("size", &self.size)
            .field("max_radius", &self.max_radius)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn layout_of<H: Hierarchy>(
    data: &H,
    options: &SunburstOptions,
    generation: u32,
) -> Result<Partition, PartitionError> {
    let opts = PartitionOptions {
        sibling_order: options.sibling_order,
        generation,
    };
    partition_with(
        data,
        &opts,
        |h: &H| h.number(&options.size_attr),
        |h: &H| h.text(&options.name_attr),
    )
}

fn max_radius_for(size: Size, outer_ring: f64) -> f64 {
    (size.width.min(size.height) / 2.0 - outer_ring).max(0.0)
}

impl<H: Hierarchy, S: Surface> Sunburst<H, S> {
    /// Lay out `data`, size the chart to the surface's container and draw it.
    ///
    /// Arcs fade in when the surface supports opacity and the chart is small
    /// enough (see [`SunburstOptions::fade_in_max_arcs`]).
    pub fn new(surface: S, data: H, options: SunburstOptions) -> Result<Self, SunburstError> {
        let layout = layout_of(&data, &options, FIRST_EPOCH)?;
        let size = surface.container_size();
        let max_radius = max_radius_for(size, options.outer_ring_animate_size);
        let mut this = Self {
            radius: ScaleMapping::radius(options.radial_scale, max_radius),
            angle: ScaleMapping::angle(),
            hover: HoverTweens::new(options.hover_duration_ms),
            surface,
            options,
            data,
            layout: layout.clone(),
            arcs: Vec::new(),
            shown: Vec::new(),
            size,
            max_radius,
            state: ZoomState::default(),
            zoom: TransitionSlot::new(),
            plan: None,
            fade: TransitionSlot::new(),
            pointer: HoverTracker::new(),
            label_visible: false,
            label_hide_pending: false,
        };
        this.resize_to(size);
        this.install(layout, false, true)?;
        Ok(this)
    }

    /// Replace the data and redraw.
    ///
    /// With `retain_zoom`, the current focus is looked up in the new layout by
    /// its path of names from the root; when it no longer exists the chart
    /// zooms out to the root. On error the previous chart stays as it was.
    ///
    /// The hovered node is dropped; its label is hidden at the next [`flush`](Self::flush)
    /// unless a node of the new layout is entered first.
    pub fn redraw(
        &mut self,
        data: H,
        retain_zoom: bool,
        animate: bool,
    ) -> Result<(), SunburstError> {
        let generation = self.layout.generation().wrapping_add(1);
        let layout = layout_of(&data, &self.options, generation)?;
        self.install(layout, retain_zoom, animate)?;
        self.data = data;
        Ok(())
    }

    fn install(
        &mut self,
        layout: Partition,
        retain_zoom: bool,
        animate: bool,
    ) -> Result<(), SunburstError> {
        let previous = if retain_zoom { self.state.focus() } else { None };
        let focus = previous.map(|f| {
            let path = self.layout.name_path(f);
            layout
                .find_by_name_path(&path)
                .unwrap_or_else(|| layout.root())
        });
        let frame = match focus {
            Some(id) => {
                ZoomFrame::target(layout.node(id), self.options.min_radius, self.max_radius)
            }
            None => ZoomFrame::full(self.max_radius),
        };
        let mut angle = self.angle.clone();
        let mut radius = self.radius.clone();
        frame.apply(&mut angle, &mut radius);

        let mut arcs = Vec::with_capacity(layout.len());
        let mut shown = Vec::with_capacity(layout.len());
        for node in &layout {
            let shape = arc_for(node, &angle, &radius, 0.0);
            let fill = (self.options.color_fn)(&layout, node);
            match self.surface.draw_arc(node.id, &shape, fill) {
                Ok(arc) => {
                    arcs.push(arc);
                    shown.push(shape);
                }
                Err(err) => {
                    tracing::debug!(
                        ?err,
                        drawn = arcs.len(),
                        "sunburst draw failed; keeping previous arcs"
                    );
                    for arc in arcs {
                        self.surface.remove_arc(arc);
                    }
                    return Err(err.into());
                }
            }
        }

        self.cancel_animations();
        for arc in mem::replace(&mut self.arcs, arcs) {
            self.surface.remove_arc(arc);
        }
        self.shown = shown;
        self.angle = angle;
        self.radius = radius;
        self.layout = layout;
        self.state.clicked = focus;
        self.state.hovered = None;
        self.pointer = HoverTracker::new();
        // Ids from the old layout are stale, so no leave will arrive for the label.
        self.label_hide_pending |= self.label_visible;
        tracing::debug!(
            nodes = self.layout.len(),
            generation = self.layout.generation(),
            retain_zoom,
            ?focus,
            "sunburst redraw"
        );

        let caps = self.surface.capabilities();
        if animate
            && self.arcs.len() < self.options.fade_in_max_arcs
            && caps.contains(Capabilities::OPACITY)
        {
            for arc in &self.arcs {
                self.surface.set_arc_opacity(arc, 0.0);
            }
            self.fade.start(self.options.fade_in_duration_ms, Easing::Linear);
        }
        Ok(())
    }

    fn cancel_animations(&mut self) {
        if let Some(token) = self.zoom.cancel() {
            tracing::trace!(token = token.get(), "cancelled zoom transition");
        }
        self.plan = None;
        self.state.target = None;
        self.hover.cancel_all();
        if self.fade.cancel().is_some() {
            for arc in &self.arcs {
                self.surface.set_arc_opacity(arc, 1.0);
            }
        }
    }

    /// Re-read the container size from the surface and resize.
    pub fn resize(&mut self) {
        let size = self.surface.container_size();
        self.resize_to(size);
    }

    /// Resize to `size`, keeping the current zoom.
    ///
    /// An in-flight zoom is cut short: its target is applied at once under the new radius.
    pub fn resize_to(&mut self, size: Size) {
        self.size = size;
        self.max_radius = max_radius_for(size, self.options.outer_ring_animate_size);
        self.surface.set_size(size);
        self.surface.set_view_box(Rect::new(
            -size.width / 2.0,
            -size.height / 2.0,
            size.width / 2.0,
            size.height / 2.0,
        ));
        self.surface.place_label(self.center());
        tracing::debug!(
            width = size.width,
            height = size.height,
            max_radius = self.max_radius,
            "sunburst resize"
        );

        let focus = self.state.focus();
        if let Some(token) = self.zoom.cancel() {
            tracing::trace!(token = token.get(), "resize cut zoom transition short");
        }
        self.plan = None;
        self.state.target = None;
        self.hover.cancel_all();

        let frame = match focus.and_then(|f| self.layout.get(f)) {
            Some(node) => ZoomFrame::target(node, self.options.min_radius, self.max_radius),
            None => ZoomFrame::full(self.max_radius),
        };
        frame.apply(&mut self.angle, &mut self.radius);
        self.push_all();
        self.state.clicked = focus;
        if let Some(h) = self.state.hovered {
            self.highlight(h, true);
        }
    }

    /// Zoom to `node`.
    ///
    /// Clicking the current focus does nothing. Otherwise any running zoom is
    /// superseded and hover tweens are dropped. Surfaces without incremental
    /// animation jump straight to the target.
    pub fn on_click(&mut self, node: NodeId) {
        let Some(target) = self.layout.get(node) else {
            tracing::trace!(?node, "click on stale node ignored");
            return;
        };
        let focus = self.state.focus().unwrap_or_else(|| self.layout.root());
        if node == focus {
            return;
        }
        let to = ZoomFrame::target(target, self.options.min_radius, self.max_radius);

        if let Some(old) = self.zoom.cancel() {
            tracing::trace!(token = old.get(), "zoom superseded");
        }
        self.hover.cancel_all();

        let from = ZoomFrame::capture(&self.angle, &self.radius);
        self.state.target = Some(node);
        let animate = self.surface.supports_incremental_animation();
        let duration = if animate { self.options.zoom_duration_ms } else { 0.0 };
        let token = self.zoom.start(duration, self.options.easing);
        self.plan = Some(ZoomPlan { node, token, from, to });
        tracing::debug!(?node, token = token.get(), animate, "sunburst zoom");
        if !animate {
            self.tick_zoom(token, 1.0);
        }
    }

    /// Apply progress `t` of the zoom identified by `token`.
    ///
    /// Returns `false`, changing nothing, when `token` is not the running zoom.
    /// `t = 1` completes the zoom and replays a highlight deferred during it.
    pub fn tick_zoom(&mut self, token: TransitionToken, t: f64) -> bool {
        let current = self.zoom.is_current(token);
        let Some(plan) = self.plan.as_ref().filter(|p| current && p.token == token) else {
            tracing::trace!(token = token.get(), "discarding stale zoom tick");
            return false;
        };
        let t = t.max(0.0).min(1.0);
        let node = plan.node;
        plan.at(t).apply(&mut self.angle, &mut self.radius);
        self.push_all();

        if t >= 1.0 {
            self.zoom.complete(token);
            self.plan = None;
            self.state.target = None;
            self.state.clicked = Some(node);
            tracing::debug!(?node, "sunburst zoom complete");
            if let Some(h) = self.state.hovered {
                self.highlight(h, true);
            }
        }
        true
    }

    /// The pointer entered `node`.
    ///
    /// Shows the center label. The highlight is deferred while a zoom runs.
    pub fn on_hover_enter(&mut self, node: NodeId) {
        let Some(hovered) = self.layout.get(node) else {
            tracing::trace!(?node, "hover on stale node ignored");
            return;
        };
        if self.state.hovered == Some(node) {
            return;
        }
        self.state.hovered = Some(node);
        self.label_hide_pending = false;

        let focus = self.state.focus().and_then(|f| self.layout.get(f));
        let markup = (self.options.label_formatter)(hovered, focus);
        self.surface.show_label(&markup);
        self.surface.place_label(self.center());
        self.label_visible = true;

        if self.state.in_transition() {
            return;
        }
        self.highlight(node, true);
    }

    /// The pointer left `node`.
    ///
    /// The label is hidden at the next [`flush`](Self::flush) unless another node
    /// was entered in the meantime.
    pub fn on_hover_leave(&mut self, node: NodeId) {
        if !self.layout.contains(node) {
            tracing::trace!(?node, "hover-leave on stale node ignored");
            return;
        }
        if self.state.hovered == Some(node) {
            self.state.hovered = None;
            self.label_hide_pending = true;
        }
        if self.state.in_transition() {
            return;
        }
        self.highlight(node, false);
    }

    fn highlight(&mut self, node: NodeId, expanded: bool) {
        let mut members = self.options.highlight.members(&self.layout, node);
        if !expanded {
            if let Some(h) = self.state.hovered {
                let keep = self.options.highlight.members(&self.layout, h);
                members.retain(|m| !keep.contains(m));
            }
        }
        for m in members {
            if let Some(&from) = self.shown.get(m.index()) {
                self.hover.start(m, from, expanded);
            }
        }
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: SunburstEvent) {
        match event {
            SunburstEvent::Click(node) => self.on_click(node),
            SunburstEvent::HoverEnter(node) => self.on_hover_enter(node),
            SunburstEvent::HoverLeave(node) => self.on_hover_leave(node),
            SunburstEvent::Resize(size) => self.resize_to(size),
            SunburstEvent::PointerMove(pt) => {
                let hit = self.hit_test(pt);
                let transitions = self.pointer.update(hit);
                self.apply_hover(transitions);
            }
            SunburstEvent::PointerExit => {
                let transitions = self.pointer.clear();
                self.apply_hover(transitions);
            }
            SunburstEvent::PointerClick(pt) => {
                if let Some(node) = self.hit_test(pt) {
                    self.on_click(node);
                }
            }
        }
    }

    fn apply_hover(&mut self, transitions: Vec<HoverEvent<NodeId>>) {
        for t in transitions {
            match t {
                HoverEvent::Enter(node) => self.on_hover_enter(node),
                HoverEvent::Leave(node) => self.on_hover_leave(node),
            }
        }
    }

    /// Dispatch a batch of events, then [`flush`](Self::flush).
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = SunburstEvent>) {
        for event in events {
            self.handle(event);
        }
        self.flush();
    }

    /// Resolve a pending label hide.
    pub fn flush(&mut self) {
        if !self.label_hide_pending {
            return;
        }
        self.label_hide_pending = false;
        if self.state.hovered.is_none() && self.label_visible {
            self.surface.hide_label();
            self.label_visible = false;
        }
    }

    /// Advance every animation to `now_ms` and flush pending input.
    pub fn on_frame(&mut self, now_ms: f64) {
        if let Some(tick) = self.zoom.advance(now_ms) {
            let t = if tick.done { 1.0 } else { tick.t };
            self.tick_zoom(tick.token, t);
        }

        for step in self.hover.advance(now_ms) {
            let index = step.node.index();
            let (Some(node), Some(arc)) = (self.layout.get(step.node), self.arcs.get(index)) else {
                continue;
            };
            let grow = if step.expanded {
                self.options.outer_ring_animate_size
            } else {
                0.0
            };
            let to = arc_for(node, &self.angle, &self.radius, grow);
            let shape = step.from.lerp(&to, step.t);
            self.surface.update_arc(arc, &shape);
            self.shown[index] = shape;
            if step.t >= 1.0 {
                tracing::trace!(node = ?step.node, expanded = step.expanded, "hover tween done");
            }
        }

        if let Some(tick) = self.fade.advance(now_ms) {
            for arc in &self.arcs {
                self.surface.set_arc_opacity(arc, tick.t);
            }
            if tick.done {
                self.fade.complete(tick.token);
            }
        }

        self.flush();
    }

    /// Topmost node whose current arc contains `pt`, in container coordinates.
    pub fn hit_test(&self, pt: Point) -> Option<NodeId> {
        let center = self.center();
        self.shown
            .iter()
            .zip(self.layout.iter())
            .rev()
            .find(|(shape, _)| shape.contains(center, pt))
            .map(|(_, node)| node.id)
    }

    fn push_all(&mut self) {
        for ((node, arc), shown) in self.layout.iter().zip(&self.arcs).zip(&mut self.shown) {
            let shape = arc_for(node, &self.angle, &self.radius, 0.0);
            self.surface.update_arc(arc, &shape);
            *shown = shape;
        }
    }

    fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Current layout.
    pub fn layout(&self) -> &Partition {
        &self.layout
    }

    /// The data the current layout was built from.
    pub fn data(&self) -> &H {
        &self.data
    }

    /// Layout node of `id`, if it belongs to the current layout.
    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.layout.get(id)
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Angle mapping.
    pub fn angle_scale(&self) -> &ScaleMapping {
        &self.angle
    }

    /// Radius mapping.
    pub fn radius_scale(&self) -> &ScaleMapping {
        &self.radius
    }

    /// Zoom and hover state.
    pub fn zoom_state(&self) -> &ZoomState {
        &self.state
    }

    /// Token of the running zoom, for callers that drive ticks themselves.
    pub fn zoom_transition(&self) -> Option<TransitionToken> {
        self.zoom.current()
    }

    /// Outer radius of the chart at rest.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Container size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Shape last pushed to the surface for `id`.
    pub fn arc_shape(&self, id: NodeId) -> Option<ArcShape> {
        if !self.layout.contains(id) {
            return None;
        }
        self.shown.get(id.index()).copied()
    }

    /// Returns `true` while the center label is shown.
    pub fn is_label_visible(&self) -> bool {
        self.label_visible
    }

    /// Options.
    pub fn options(&self) -> &SunburstOptions {
        &self.options
    }
}
