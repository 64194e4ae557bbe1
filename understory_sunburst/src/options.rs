// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use peniko::Color;
use understory_partition::{LayoutNode, Partition, SiblingOrder};

use crate::highlight::HighlightRule;
use crate::palette::CategoricalPalette;
use crate::scale::ScaleKind;
use crate::transition::Easing;

/// Fill color of an arc.
pub type ColorFn = Box<dyn FnMut(&Partition, &LayoutNode) -> Color>;

/// Center label markup for `(hovered, focus)`. The focus is `None` at the root.
pub type LabelFormatter = Box<dyn Fn(&LayoutNode, Option<&LayoutNode>) -> String>;

/// Configuration of a [`Sunburst`](crate::Sunburst).
///
/// All fields are public; start from [`Default`] and override what you need.
pub struct SunburstOptions {
    /// Numeric field holding leaf weights.
    pub size_attr: String,
    /// Text field holding display names.
    pub name_attr: String,
    /// Arc fill. Defaults to [`category_color`] over [`CATEGORY20C`](crate::CATEGORY20C).
    pub color_fn: ColorFn,
    /// Center label. Defaults to [`name_label`].
    pub label_formatter: LabelFormatter,
    /// Inner radius of the ring hole when zoomed below the root.
    pub min_radius: f64,
    /// Outer radius growth of a highlighted arc; also reserved around the chart.
    pub outer_ring_animate_size: f64,
    /// Duration of a zoom transition.
    pub zoom_duration_ms: f64,
    /// Duration of a hover tween.
    pub hover_duration_ms: f64,
    /// Duration of the fade-in after a redraw.
    pub fade_in_duration_ms: f64,
    /// Redraws with this many arcs or more skip the fade-in.
    pub fade_in_max_arcs: usize,
    /// Radius interpolation.
    pub radial_scale: ScaleKind,
    /// Sibling order of the layout.
    pub sibling_order: SiblingOrder,
    /// Easing of zoom transitions.
    pub easing: Easing,
    /// Which arcs grow together on hover.
    pub highlight: HighlightRule,
}

impl Default for SunburstOptions {
    fn default() -> Self {
        Self {
            size_attr: "size".into(),
            name_attr: "name".into(),
            color_fn: category_color(CategoricalPalette::category20c()),
            label_formatter: Box::new(name_label),
            min_radius: 70.0,
            outer_ring_animate_size: 15.0,
            zoom_duration_ms: 1000.0,
            hover_duration_ms: 100.0,
            fade_in_duration_ms: 1000.0,
            fade_in_max_arcs: 200,
            radial_scale: ScaleKind::Sqrt,
            sibling_order: SiblingOrder::Input,
            easing: Easing::Linear,
            highlight: HighlightRule::default(),
        }
    }
}

impl fmt::Debug for SunburstOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SunburstOptions")
            .field("size_attr", &self.size_attr)
            .field("name_attr", &self.name_attr)
            .field("min_radius", &self.min_radius)
            .field("outer_ring_animate_size", &self.outer_ring_animate_size)
            .field("zoom_duration_ms", &self.zoom_duration_ms)
            .field("hover_duration_ms", &self.hover_duration_ms)
            .field("fade_in_duration_ms", &self.fade_in_duration_ms)
            .field("fade_in_max_arcs", &self.fade_in_max_arcs)
            .field("radial_scale", &self.radial_scale)
            .field("sibling_order", &self.sibling_order)
            .field("easing", &self.easing)
            .field("highlight", &self.highlight)
            .finish_non_exhaustive()
    }
}

/// Color arcs by the name of the node if it has children, else of its parent.
///
/// Leaves therefore share the color of their parent, and each branch gets its
/// own color from `palette`.
pub fn category_color(mut palette: CategoricalPalette) -> ColorFn {
    Box::new(move |layout: &Partition, node: &LayoutNode| {
        let keyed = match node.parent {
            Some(parent) if node.is_leaf() => layout.get(parent).unwrap_or(node),
            _ => node,
        };
        palette.color_for(keyed.name.as_deref())
    })
}

/// The markup-escaped display name of `node`; empty when unnamed.
pub fn name_label(node: &LayoutNode, _focus: Option<&LayoutNode>) -> String {
    escape_markup(node.name.as_deref().unwrap_or_default())
}

/// Escape `&`, `<`, `>`, `"` and `'` for embedding text in markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
