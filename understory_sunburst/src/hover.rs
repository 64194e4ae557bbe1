// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking for pointer-position input.
//!
//! Surfaces that draw arcs as retained elements report enter and leave
//! themselves. Immediate-mode surfaces only know where the pointer is; they
//! hit-test the position and feed the result into a [`HoverTracker`], which turns
//! successive hits into enter and leave transitions.
//!
//! ## Minimal example
//!
//! ```
//! use understory_sunburst::{HoverEvent, HoverTracker};
//!
//! let mut h: HoverTracker<u32> = HoverTracker::new();
//! assert_eq!(h.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert_eq!(h.update(Some(1)), vec![]);
//! assert_eq!(h.update(Some(2)), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(None), vec![HoverEvent::Leave(2)]);
//! ```

use alloc::vec::Vec;

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given target.
    Enter(K),
    /// Pointer leaves the given target.
    Leave(K),
}

/// Tracks the single hovered target of a flat hit test.
///
/// Arcs of a sunburst do not nest for hit testing (a point falls in at most one
/// ring), so unlike a path-based hover state there is no ancestry to diff.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker<K: Copy + Eq> {
    current: Option<K>,
}

impl<K: Copy + Eq> HoverTracker<K> {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The currently hovered target.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Forget the hovered target, returning its leave event.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.current.take().map(HoverEvent::Leave).into_iter().collect()
    }

    /// Update with the latest hit and return the transitions, leave before enter.
    pub fn update(&mut self, hit: Option<K>) -> Vec<HoverEvent<K>> {
        if hit == self.current {
            return Vec::new();
        }
        let mut out = self.clear();
        if let Some(k) = hit {
            out.push(HoverEvent::Enter(k));
        }
        self.current = hit;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn clear_emits_leave_once() {
        let mut h: HoverTracker<u8> = HoverTracker::new();
        assert!(h.clear().is_empty());
        h.update(Some(3));
        assert_eq!(h.current(), Some(3));
        assert_eq!(h.clear(), vec![HoverEvent::Leave(3)]);
        assert!(h.clear().is_empty());
        assert_eq!(h.current(), None);
    }

    #[test]
    fn none_to_none_is_quiet() {
        let mut h: HoverTracker<u8> = HoverTracker::new();
        assert!(h.update(None).is_empty());
    }
}
