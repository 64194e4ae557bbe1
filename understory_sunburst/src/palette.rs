// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordinal color assignment for arc fills.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;

/// Twenty colors in five hue ramps of four shades each (blue, orange, green,
/// purple, gray), darkest first.
pub const CATEGORY20C: [Color; 20] = [
    Color::from_rgb8(0x31, 0x82, 0xbd),
    Color::from_rgb8(0x6b, 0xae, 0xd6),
    Color::from_rgb8(0x9e, 0xca, 0xe1),
    Color::from_rgb8(0xc6, 0xdb, 0xef),
    Color::from_rgb8(0xe6, 0x55, 0x0d),
    Color::from_rgb8(0xfd, 0x8d, 0x3c),
    Color::from_rgb8(0xfd, 0xae, 0x6b),
    Color::from_rgb8(0xfd, 0xd0, 0xa2),
    Color::from_rgb8(0x31, 0xa3, 0x54),
    Color::from_rgb8(0x74, 0xc4, 0x76),
    Color::from_rgb8(0xa1, 0xd9, 0x9b),
    Color::from_rgb8(0xc7, 0xe9, 0xc0),
    Color::from_rgb8(0x75, 0x6b, 0xb1),
    Color::from_rgb8(0x9e, 0x9a, 0xc8),
    Color::from_rgb8(0xbc, 0xbd, 0xdc),
    Color::from_rgb8(0xda, 0xda, 0xeb),
    Color::from_rgb8(0x63, 0x63, 0x63),
    Color::from_rgb8(0x96, 0x96, 0x96),
    Color::from_rgb8(0xbd, 0xbd, 0xbd),
    Color::from_rgb8(0xd9, 0xd9, 0xd9),
];

/// Assigns colors to keys in first-seen order, cycling through a fixed list.
///
/// A key keeps its color for the lifetime of the palette, across redraws.
///
/// ```
/// use understory_sunburst::{CATEGORY20C, CategoricalPalette};
///
/// let mut p = CategoricalPalette::category20c();
/// let a = p.color_for(Some("a"));
/// let b = p.color_for(Some("b"));
/// assert_eq!(a, CATEGORY20C[0]);
/// assert_eq!(b, CATEGORY20C[1]);
/// assert_eq!(p.color_for(Some("a")), a);
/// ```
#[derive(Clone, Debug)]
pub struct CategoricalPalette {
    colors: Vec<Color>,
    assigned: HashMap<Option<String>, usize>,
}

impl CategoricalPalette {
    /// A palette over `colors`. An empty list falls back to [`CATEGORY20C`].
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            colors.extend_from_slice(&CATEGORY20C);
        }
        Self {
            colors,
            assigned: HashMap::new(),
        }
    }

    /// A palette over [`CATEGORY20C`].
    pub fn category20c() -> Self {
        Self::new(CATEGORY20C)
    }

    /// Color of `key`, assigning the next one on first sight.
    ///
    /// `None` is a key like any other.
    pub fn color_for(&mut self, key: Option<&str>) -> Color {
        let next = self.assigned.len();
        let slot = match self.assigned.get(&key.map(String::from)) {
            Some(&slot) => slot,
            None => {
                self.assigned.insert(key.map(String::from), next);
                next
            }
        };
        self.colors[slot % self.colors.len()]
    }

    /// Number of keys seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns `true` if no key has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for CategoricalPalette {
    fn default() -> Self {
        Self::category20c()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn cycles_after_twenty_keys() {
        let mut p = CategoricalPalette::default();
        for i in 0..20 {
            p.color_for(Some(&format!("k{i}")));
        }
        assert_eq!(p.color_for(Some("k20")), CATEGORY20C[0]);
        assert_eq!(p.color_for(Some("k5")), CATEGORY20C[5]);
        assert_eq!(p.len(), 21);
    }

    #[test]
    fn none_is_its_own_key() {
        let mut p = CategoricalPalette::new([]);
        assert!(p.is_empty());
        let none = p.color_for(None);
        let a = p.color_for(Some("a"));
        assert_ne!(none, a);
        assert_eq!(p.color_for(None), none);
    }
}
