// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the partition: node identifiers, layout nodes, and options.

use alloc::string::String;
use alloc::vec::Vec;

/// Identifier for a node in a [`Partition`](crate::Partition).
///
/// A small, copyable handle made of a pre-order index and a generation.
///
/// ## Semantics
///
/// - The index is the node's position in the flat pre-order sequence; the root is index `0`.
/// - The generation is the partition epoch chosen in [`PartitionOptions::generation`].
///   Callers that rebuild a partition for new data bump the generation so that ids
///   handed out by the previous layout never alias a node of the new one.
///
/// Use [`Partition::contains`](crate::Partition::contains) to check whether an id
/// belongs to a given partition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    /// Position of the node in the pre-order sequence.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Partition epoch this id was issued for.
    pub const fn generation(self) -> u32 {
        self.1
    }

    /// Returns `true` if this is the root of its partition.
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

/// One laid-out node of the radial partition.
///
/// All intervals are normalized to `[0, 1]`. Angles are fractions of the full turn,
/// radii are fractions of the full depth span. Scales applied later turn them into
/// radians and pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    /// This node's id.
    pub id: NodeId,
    /// Normalized start of the angular interval.
    pub angle_start: f64,
    /// Normalized width of the angular interval.
    pub angle_width: f64,
    /// Tree depth; the root is `0`.
    pub depth: usize,
    /// Normalized start of the radial interval.
    pub radius_start: f64,
    /// Normalized height of the radial interval.
    pub radius_height: f64,
    /// Summed weight of the subtree rooted here.
    pub value: f64,
    /// Display name resolved through the name accessor, if any.
    pub name: Option<String>,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Children in layout order.
    pub children: Vec<NodeId>,
    /// Position of the originating input node among its parent's children.
    ///
    /// Used by [`Partition::source`](crate::Partition::source) to walk back to the input.
    pub child_index: usize,
}

impl LayoutNode {
    /// End of the angular interval.
    pub fn angle_end(&self) -> f64 {
        self.angle_start + self.angle_width
    }

    /// End of the radial interval.
    pub fn radius_end(&self) -> f64 {
        self.radius_start + self.radius_height
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Order in which siblings are laid out around their parent.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SiblingOrder {
    /// Keep the input order.
    #[default]
    Input,
    /// Largest subtree value first. Ties keep input order.
    DescendingValue,
}

/// Options controlling [`partition_with`](crate::partition_with).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartitionOptions {
    /// Sibling ordering.
    pub sibling_order: SiblingOrder,
    /// Generation stamped on every [`NodeId`] of the result.
    pub generation: u32,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            sibling_order: SiblingOrder::Input,
            generation: 1,
        }
    }
}
