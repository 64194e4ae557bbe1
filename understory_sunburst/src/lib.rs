// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sunburst --heading-base-level=0

//! Understory Sunburst: a headless, interactive sunburst chart engine.
//!
//! A sunburst draws a tree as nested rings of arcs: each arc's angular span is
//! its share of the parent's value, and its ring is its depth. This crate owns
//! everything between a laid-out tree and a drawing backend:
//!
//! - [`ScaleMapping`]: remappable domain→range mappings for angle and radius.
//! - [`arc_for`] / [`ArcShape`]: clamped annular sectors, with Kurbo conversions.
//! - Zoom: clicking a node re-roots the visible window through a cancellable,
//!   frame-driven [`TransitionSlot`]. The last click wins.
//! - Hover: the center label and a short tween that grows a group of arcs
//!   ([`HighlightRule`]).
//! - Resize: recompute the outer radius and replay the current zoom.
//!
//! Layout comes from [`understory_partition`]. Drawing goes through the
//! [`Surface`] trait; [`RecordingSurface`] is a headless implementation.
//!
//! ## Driving a chart
//!
//! Feed input as [`SunburstEvent`]s and call [`Sunburst::on_frame`] once per
//! animation frame with a monotonic timestamp in milliseconds.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_partition::Record;
//! use understory_sunburst::{RecordingSurface, Sunburst, SunburstEvent, SunburstOptions};
//!
//! let data = Record::branch("root", [
//!     Record::branch("fruit", [Record::leaf("apple", 3.0), Record::leaf("pear", 1.0)]),
//!     Record::branch("veg", [Record::leaf("leek", 2.0), Record::leaf("kale", 2.0)]),
//! ]);
//! let surface = RecordingSurface::new(Size::new(400.0, 400.0));
//! let mut chart = Sunburst::new(surface, data, SunburstOptions::default()).unwrap();
//!
//! // Hover the "fruit" ring: the label shows its name.
//! let fruit = chart.layout().children_of(chart.layout().root())[0];
//! chart.handle_all([SunburstEvent::HoverEnter(fruit)]);
//! assert_eq!(chart.surface().label(), Some("fruit"));
//!
//! // Pointer input is hit-tested against the arcs on screen. Straight up from
//! // the center, in the middle ring, lands in "fruit".
//! let up = Point::new(200.0, 200.0 - 0.7 * chart.max_radius());
//! assert_eq!(chart.hit_test(up), Some(fruit));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo, Peniko, `thiserror` and `tracing`.
//! - `libm`: floating point functions for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
mod arc;
mod error;
mod events;
mod highlight;
mod hover;
mod options;
mod palette;
mod scale;
mod sunburst;
mod surface;
mod transition;
mod zoom;

pub use adapters::recording::RecordingSurface;
pub use arc::{ArcShape, arc_for, clock_angle};
pub use error::SunburstError;
pub use events::SunburstEvent;
pub use highlight::{GroupPredicate, HighlightGroup, HighlightRule};
pub use hover::{HoverEvent, HoverTracker};
pub use options::{
    ColorFn, LabelFormatter, SunburstOptions, category_color, escape_markup, name_label,
};
pub use palette::{CATEGORY20C, CategoricalPalette};
pub use scale::{ScaleKind, ScaleMapping};
pub use sunburst::Sunburst;
pub use surface::{Capabilities, Surface, SurfaceError};
pub use transition::{Easing, Tick, TransitionSlot, TransitionToken};
pub use zoom::{ZoomFrame, ZoomPhase, ZoomState};
