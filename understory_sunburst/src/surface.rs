// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing contract between the chart engine and a backend.

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;
use understory_partition::NodeId;

use crate::arc::ArcShape;

bitflags::bitflags! {
    /// Optional behaviors a surface supports.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Arcs can be updated every frame; zooms animate instead of jumping.
        const INCREMENTAL_ANIMATION = 0b0000_0001;
        /// Arcs carry an opacity, used for the fade-in after a redraw.
        const OPACITY               = 0b0000_0010;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::INCREMENTAL_ANIMATION | Self::OPACITY
    }
}

/// Error reported by a surface.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface cannot perform the requested operation.
    #[error("operation not supported by this surface")]
    Unsupported,
    /// The backend failed.
    #[error("surface backend error: {0}")]
    Backend(String),
}

/// A drawing backend for a sunburst chart.
///
/// The engine owns all geometry and interaction state; a surface only keeps the
/// elements it drew. Arc shapes use the engine's angle convention (see
/// [`ArcShape`]) and are centered on the origin of the view box set by
/// [`set_view_box`](Self::set_view_box). [`ArcShape::segment`] and
/// [`ArcShape::path`] convert them for Kurbo-based renderers.
///
/// Surfaces with retained elements report pointer interaction back as
/// [`SunburstEvent::Click`](crate::SunburstEvent::Click),
/// [`HoverEnter`](crate::SunburstEvent::HoverEnter) and
/// [`HoverLeave`](crate::SunburstEvent::HoverLeave) carrying the [`NodeId`]
/// passed to [`draw_arc`](Self::draw_arc).
pub trait Surface {
    /// Handle of a drawn arc.
    type Arc;

    /// Size of the container the chart lives in.
    fn container_size(&self) -> Size;

    /// Set the drawing size.
    fn set_size(&mut self, size: Size);

    /// Set the visible region in chart coordinates.
    fn set_view_box(&mut self, view_box: Rect);

    /// Draw a new arc for `node`.
    fn draw_arc(&mut self, node: NodeId, shape: &ArcShape, fill: Color)
    -> Result<Self::Arc, SurfaceError>;

    /// Move an existing arc to `shape`.
    fn update_arc(&mut self, arc: &Self::Arc, shape: &ArcShape);

    /// Remove an arc.
    fn remove_arc(&mut self, arc: Self::Arc);

    /// Set the opacity of an arc, in `[0, 1]`.
    fn set_arc_opacity(&mut self, arc: &Self::Arc, opacity: f64) {
        let _ = (arc, opacity);
    }

    /// Show the center label, or replace its content.
    fn show_label(&mut self, markup: &str);

    /// Hide the center label.
    fn hide_label(&mut self);

    /// Center the label on `center`, in container coordinates.
    fn place_label(&mut self, center: Point);

    /// Supported optional behaviors.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Returns `true` if zoom transitions can be animated frame by frame.
    fn supports_incremental_animation(&self) -> bool {
        self.capabilities()
            .contains(Capabilities::INCREMENTAL_ANIMATION)
    }
}
