// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input side of the partition: the [`Hierarchy`] trait and a ready-made [`Record`].

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

/// A rooted, ordered tree that can be partitioned.
///
/// The partitioner only needs [`children`](Hierarchy::children). The keyed
/// accessors let callers pick weight and name fields by name (for example a
/// `"size"` and a `"name"` field) without writing closures.
pub trait Hierarchy: Sized {
    /// Ordered children of this node.
    fn children(&self) -> &[Self];

    /// Numeric field lookup.
    fn number(&self, key: &str) -> Option<f64> {
        let _ = key;
        None
    }

    /// Text field lookup.
    fn text(&self, key: &str) -> Option<&str> {
        let _ = key;
        None
    }
}

/// A field value of a [`Record`].
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

/// A generic tree node with named fields.
///
/// ```
/// use understory_partition::{Hierarchy, Record};
///
/// let root = Record::new()
///     .with_text("name", "root")
///     .with_child(Record::leaf("a", 1.0))
///     .with_child(Record::leaf("b", 3.0));
///
/// assert_eq!(root.children().len(), 2);
/// assert_eq!(root.children()[1].number("size"), Some(3.0));
/// assert_eq!(root.text("name"), Some("root"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    /// Named fields.
    pub fields: BTreeMap<String, Field>,
    /// Ordered children.
    pub children: Vec<Self>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A childless record with a `"name"` and a `"size"` field.
    pub fn leaf(name: &str, size: f64) -> Self {
        Self::new().with_text("name", name).with_number("size", size)
    }

    /// A record with a `"name"` field and the given children.
    pub fn branch(name: &str, children: impl IntoIterator<Item = Self>) -> Self {
        Self::new().with_text("name", name).with_children(children)
    }

    /// Set a numeric field.
    pub fn with_number(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.into(), Field::Number(value));
        self
    }

    /// Set a text field.
    pub fn with_text(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.into(), Field::Text(value.into()));
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        // Detach descendants onto a worklist so deep chains drop without recursion.
        let mut pending = mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

impl Hierarchy for Record {
    fn children(&self) -> &[Self] {
        &self.children
    }

    fn number(&self, key: &str) -> Option<f64> {
        match self.fields.get(key)? {
            Field::Number(n) => Some(*n),
            Field::Text(_) => None,
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            Field::Text(s) => Some(s.as_str()),
            Field::Number(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_lookups_respect_field_kind() {
        let r = Record::new().with_number("size", 2.5).with_text("name", "x");
        assert_eq!(r.number("size"), Some(2.5));
        assert_eq!(r.text("size"), None);
        assert_eq!(r.text("name"), Some("x"));
        assert_eq!(r.number("name"), None);
        assert_eq!(r.number("missing"), None);
    }

    #[test]
    fn branch_keeps_child_order() {
        let r = Record::branch("p", [Record::leaf("a", 1.0), Record::leaf("b", 2.0)]);
        let names: Vec<_> = r.children().iter().map(|c| c.text("name")).collect();
        assert_eq!(names, alloc::vec![Some("a"), Some("b")]);
    }
}
