// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc geometry: normalized layout intervals to concrete annular sectors.
//!
//! Angles use the sunburst convention: `0` points to twelve o'clock and angles
//! grow clockwise on a y-down surface. [`ArcShape::segment`] converts to Kurbo's
//! convention (measured from the +x axis) for drawing.

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, CircleSegment, Point, Shape, Vec2};
use understory_partition::LayoutNode;

use crate::scale::ScaleMapping;

/// A renderable annular sector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArcShape {
    /// Start angle in radians, clockwise from twelve o'clock.
    pub start_angle: f64,
    /// End angle in radians, clockwise from twelve o'clock.
    pub end_angle: f64,
    /// Inner radius in surface units.
    pub inner_radius: f64,
    /// Outer radius in surface units.
    pub outer_radius: f64,
}

impl ArcShape {
    /// A shape that covers nothing.
    pub const EMPTY: Self = Self {
        start_angle: 0.0,
        end_angle: 0.0,
        inner_radius: 0.0,
        outer_radius: 0.0,
    };

    /// Angular extent in radians.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns `true` if the shape has no area.
    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0 || self.outer_radius <= self.inner_radius
    }

    /// Component-wise linear interpolation towards `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            start_angle: lerp(self.start_angle, other.start_angle, t),
            end_angle: lerp(self.end_angle, other.end_angle, t),
            inner_radius: lerp(self.inner_radius, other.inner_radius, t),
            outer_radius: lerp(self.outer_radius, other.outer_radius, t),
        }
    }

    /// The shape as a Kurbo circle segment around `center`.
    pub fn segment(&self, center: Point) -> CircleSegment {
        CircleSegment::new(
            center,
            self.outer_radius,
            self.inner_radius,
            self.start_angle - FRAC_PI_2,
            self.sweep(),
        )
    }

    /// Outline of the shape around `center`, flattened to `tolerance`.
    pub fn path(&self, center: Point, tolerance: f64) -> BezPath {
        self.segment(center).to_path(tolerance)
    }

    /// Returns `true` if `pt` falls inside the shape drawn around `center`.
    ///
    /// The start angle and inner radius are inclusive, the end angle and outer
    /// radius exclusive, so adjacent arcs never both claim a point. A shape that
    /// ends at a full turn also claims the seam at twelve o'clock.
    pub fn contains(&self, center: Point, pt: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let v = pt - center;
        let r = v.hypot();
        if r < self.inner_radius || r >= self.outer_radius {
            return false;
        }
        let a = clock_angle(v);
        (a >= self.start_angle && a < self.end_angle) || (a == 0.0 && self.end_angle >= TAU)
    }
}

/// Angle of `v` in radians, clockwise from twelve o'clock on a y-down surface, in `[0, 2π)`.
pub fn clock_angle(v: Vec2) -> f64 {
    let a = Vec2::new(-v.y, v.x).atan2();
    if a < 0.0 { a + TAU } else { a }
}

/// Arc shape of `node` under the given scales.
///
/// Angles are clamped to `[0, 2π]` and radii to `≥ 0`. `hover_expansion` is
/// added to the clamped outer radius. NaN inputs clamp to the lower bound.
pub fn arc_for(
    node: &LayoutNode,
    angle: &ScaleMapping,
    radius: &ScaleMapping,
    hover_expansion: f64,
) -> ArcShape {
    ArcShape {
        start_angle: clamp_angle(angle.map(node.angle_start)),
        end_angle: clamp_angle(angle.map(node.angle_end())),
        inner_radius: non_negative(radius.map(node.radius_start)),
        outer_radius: non_negative(non_negative(radius.map(node.radius_end())) + hover_expansion),
    }
}

// `f64::max` returns the non-NaN operand, so NaN lands on the lower bound.
fn clamp_angle(a: f64) -> f64 {
    a.max(0.0).min(TAU)
}

fn non_negative(r: f64) -> f64 {
    r.max(0.0)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
