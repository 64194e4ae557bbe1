// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Interpolation used by a [`ScaleMapping`] between its domain and range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    /// Straight linear interpolation.
    #[default]
    Linear,
    /// Linear interpolation of signed square roots.
    ///
    /// Used for radii so that ring area, rather than ring thickness, tracks the
    /// normalized depth span.
    Sqrt,
}

impl ScaleKind {
    fn transform(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Sqrt if x < 0.0 => -(-x).sqrt(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

/// A remappable mapping from a domain interval to a range interval.
///
/// Changing the domain or range is O(1); nothing derived from the mapping is
/// cached here. A degenerate (zero-width) domain maps every input to
/// `range.start`.
///
/// ```
/// use understory_sunburst::{ScaleKind, ScaleMapping};
///
/// let mut r = ScaleMapping::radius(ScaleKind::Sqrt, 100.0);
/// assert_eq!(r.map(0.25), 50.0);
///
/// // Zoom into the outer three quarters.
/// r.set_domain(0.25..1.0);
/// assert_eq!(r.map(0.25), 0.0);
/// assert_eq!(r.map(1.0), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleMapping {
    kind: ScaleKind,
    domain: Range<f64>,
    range: Range<f64>,
}

impl ScaleMapping {
    /// Create a mapping.
    pub fn new(kind: ScaleKind, domain: Range<f64>, range: Range<f64>) -> Self {
        Self {
            kind,
            domain,
            range,
        }
    }

    /// The angle mapping at rest: `[0, 1]` turns to `[0, 2π]` radians, linearly.
    pub fn angle() -> Self {
        Self::new(ScaleKind::Linear, 0.0..1.0, 0.0..TAU)
    }

    /// The radius mapping at rest: `[0, 1]` to `[0, max_radius]`.
    pub fn radius(kind: ScaleKind, max_radius: f64) -> Self {
        Self::new(kind, 0.0..1.0, 0.0..max_radius)
    }

    /// Interpolation kind.
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Current domain.
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Replace the domain.
    pub fn set_domain(&mut self, domain: Range<f64>) {
        self.domain = domain;
    }

    /// Current range.
    pub fn range(&self) -> Range<f64> {
        self.range.clone()
    }

    /// Replace the range.
    pub fn set_range(&mut self, range: Range<f64>) {
        self.range = range;
    }

    /// Map a domain value into the range.
    ///
    /// Values outside the domain extrapolate; callers clamp as needed.
    pub fn map(&self, x: f64) -> f64 {
        let d0 = self.kind.transform(self.domain.start);
        let d1 = self.kind.transform(self.domain.end);
        let span = d1 - d0;
        let u = if span == 0.0 {
            0.0
        } else {
            (self.kind.transform(x) - d0) / span
        };
        self.range.start + u * (self.range.end - self.range.start)
    }
}
