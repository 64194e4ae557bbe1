// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core partition implementation: measuring, laying out, and querying.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use crate::error::PartitionError;
use crate::hierarchy::Hierarchy;
use crate::types::{LayoutNode, NodeId, PartitionOptions, SiblingOrder};

/// A laid-out hierarchy: every input node as a [`LayoutNode`] in pre-order.
///
/// The root is always at index `0` and spans the full turn. Each subtree occupies a
/// contiguous run of the sequence, so iterating in order visits parents before
/// children and finishes a subtree before its next sibling.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    nodes: Vec<LayoutNode>,
    generation: u32,
    max_depth: usize,
}

/// Partition `root` with default options, reading weights through `weight_of`.
///
/// Nodes have no display names; use [`partition_with`] to resolve them.
pub fn partition<H, W>(root: &H, weight_of: W) -> Result<Partition, PartitionError>
where
    H: Hierarchy,
    W: Fn(&H) -> Option<f64>,
{
    partition_with(root, &PartitionOptions::default(), weight_of, |_: &H| None)
}

/// Partition `root`, reading weights through `weight_of` and names through `name_of`.
///
/// - A childless node takes its own weight, or `1` when `weight_of` returns `None`.
/// - A node with children takes the sum of its children's values.
/// - Zero-value subtrees are kept with zero angular width.
///
/// Fails with [`PartitionError::InvalidWeight`] if `weight_of` returns a negative or
/// non-finite value for any node.
pub fn partition_with<H, W, N>(
    root: &H,
    options: &PartitionOptions,
    weight_of: W,
    name_of: N,
) -> Result<Partition, PartitionError>
where
    H: Hierarchy,
    W: Fn(&H) -> Option<f64>,
    N: Fn(&H) -> Option<&str>,
{
    let mut measured = measure(root, &weight_of)?;
    if options.sibling_order == SiblingOrder::DescendingValue {
        sort_descending(&mut measured);
    }
    let max_depth = measured.iter().map(|m| m.depth).max().unwrap_or(0);
    let root_value = measured.first().map_or(0.0, |m| m.value);

    let mut layout = Layout {
        nodes: Vec::with_capacity(measured.len()),
        generation: options.generation,
        root_value,
        levels: (max_depth + 1) as f64,
        name_of: &name_of,
    };
    layout.emit(&measured);

    tracing::debug!(
        nodes = layout.nodes.len(),
        max_depth,
        root_value,
        "partitioned hierarchy"
    );

    Ok(Partition {
        nodes: layout.nodes,
        generation: options.generation,
        max_depth,
    })
}

/// Subtree values computed before layout, holding on to the input nodes.
struct Measured<'a, H> {
    source: &'a H,
    child_index: usize,
    depth: usize,
    value: f64,
    /// Indices into the measured arena, in layout order.
    children: Vec<usize>,
}

/// Flatten `root` in input pre-order, validating weights and summing subtree values.
///
/// Walks with an explicit stack, so depth is bounded by memory rather than the call stack.
fn measure<'a, H, W>(root: &'a H, weight_of: &W) -> Result<Vec<Measured<'a, H>>, PartitionError>
where
    H: Hierarchy,
    W: Fn(&H) -> Option<f64>,
{
    let mut out: Vec<Measured<'a, H>> = Vec::new();
    let mut stack: Vec<(&'a H, usize, usize, Option<usize>)> = alloc::vec![(root, 0, 0, None)];
    while let Some((node, child_index, depth, parent)) = stack.pop() {
        let index = out.len();
        let weight = weight_of(node);
        if let Some(w) = weight {
            if !w.is_finite() || w < 0.0 {
                return Err(PartitionError::InvalidWeight { index, weight: w });
            }
        }
        if let Some(p) = parent {
            out[p].children.push(index);
        }

        let children = node.children();
        out.push(Measured {
            source: node,
            child_index,
            depth,
            value: if children.is_empty() {
                weight.unwrap_or(1.0)
            } else {
                0.0
            },
            children: Vec::with_capacity(children.len()),
        });
        for (i, child) in children.iter().enumerate().rev() {
            stack.push((child, i, depth + 1, Some(index)));
        }
    }

    // Children always come after their parent, so a reverse sweep sums finished subtrees.
    for i in (0..out.len()).rev() {
        if out[i].children.is_empty() {
            continue;
        }
        let value: f64 = out[i].children.iter().map(|&c| out[c].value).sum();
        out[i].value = value;
    }
    Ok(out)
}

fn sort_descending<H>(measured: &mut [Measured<'_, H>]) {
    for i in 0..measured.len() {
        let mut children = mem::take(&mut measured[i].children);
        // `sort_by` is stable, so equal values keep input order.
        children.sort_by(|&a, &b| measured[b].value.total_cmp(&measured[a].value));
        measured[i].children = children;
    }
}

struct Layout<'n, N> {
    nodes: Vec<LayoutNode>,
    generation: u32,
    root_value: f64,
    levels: f64,
    name_of: &'n N,
}

impl<N> Layout<'_, N> {
    fn angle_width(&self, value: f64, depth: usize) -> f64 {
        if self.root_value > 0.0 {
            value / self.root_value
        } else if depth == 0 {
            1.0
        } else {
            0.0
        }
    }

    /// Emit `measured` in pre-order of its child lists, starting at the root.
    fn emit<H>(&mut self, measured: &[Measured<'_, H>])
    where
        N: Fn(&H) -> Option<&str>,
    {
        let mut stack: Vec<(usize, Option<NodeId>, f64)> = alloc::vec![(0, None, 0.0)];
        while let Some((index, parent, angle_start)) = stack.pop() {
            let m = &measured[index];
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            let id = NodeId::new(self.nodes.len() as u32, self.generation);
            let depth_f = m.depth as f64;
            let angle_width = self.angle_width(m.value, m.depth);
            let name = (self.name_of)(m.source).map(String::from);

            self.nodes.push(LayoutNode {
                id,
                angle_start,
                angle_width,
                depth: m.depth,
                radius_start: depth_f / self.levels,
                radius_height: 1.0 / self.levels,
                value: m.value,
                name,
                parent,
                children: Vec::with_capacity(m.children.len()),
                child_index: m.child_index,
            });
            if let Some(p) = parent {
                self.nodes[p.index()].children.push(id);
            }

            // Queue children with their start angles, then flip them so the first pops first.
            let base = stack.len();
            let mut cursor = angle_start;
            for &c in &m.children {
                stack.push((c, Some(id), cursor));
                cursor += self.angle_width(measured[c].value, measured[c].depth);
            }
            stack[base..].reverse();
        }
    }
}

impl Partition {
    /// Number of laid-out nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the partition holds no nodes.
    ///
    /// Partitions produced by [`partition_with`] always contain at least the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Epoch stamped on every id of this partition.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Deepest depth present (the root is `0`).
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId::new(0, self.generation)
    }

    /// Returns `true` if `id` was issued by this partition and is in range.
    pub fn contains(&self, id: NodeId) -> bool {
        id.generation() == self.generation && id.index() < self.nodes.len()
    }

    /// Look up a node by id; `None` for ids of another generation.
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        if id.generation() != self.generation {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not [contained](Self::contains) in this partition.
    pub fn node(&self, id: NodeId) -> &LayoutNode {
        assert!(self.contains(id), "stale or foreign NodeId {id:?}");
        &self.nodes[id.index()]
    }

    /// All nodes in pre-order.
    pub fn iter(&self) -> core::slice::Iter<'_, LayoutNode> {
        self.nodes.iter()
    }

    /// All nodes in pre-order, as a slice.
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    /// Children of `id` in layout order.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Parent of `id`.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut cur = self.parent_of(id);
        core::iter::from_fn(move || {
            let out = cur?;
            cur = self.parent_of(out);
            Some(out)
        })
    }

    /// Nodes at exactly `depth`, in pre-order.
    pub fn nodes_at_depth(&self, depth: usize) -> impl Iterator<Item = &LayoutNode> + '_ {
        self.nodes.iter().filter(move |n| n.depth == depth)
    }

    /// Pre-order range of the subtree rooted at `id`, including `id`.
    pub fn subtree(&self, id: NodeId) -> &[LayoutNode] {
        let Some(node) = self.get(id) else {
            return &[];
        };
        let start = id.index();
        let end = self.nodes[start + 1..]
            .iter()
            .position(|n| n.depth <= node.depth)
            .map_or(self.nodes.len(), |p| start + 1 + p);
        &self.nodes[start..end]
    }

    /// Resolve the input node that produced `id`, given the same `root` that was partitioned.
    ///
    /// Returns `None` if `id` is foreign or `root` no longer has the same shape.
    pub fn source<'h, H: Hierarchy>(&self, root: &'h H, id: NodeId) -> Option<&'h H> {
        let node = self.get(id)?;
        let mut steps: Vec<usize> = Vec::with_capacity(node.depth);
        let mut cur = node;
        while let Some(p) = cur.parent {
            steps.push(cur.child_index);
            cur = &self.nodes[p.index()];
        }
        let mut out = root;
        for &i in steps.iter().rev() {
            out = out.children().get(i)?;
        }
        Some(out)
    }

    /// Display names from the root's first child down to `id`.
    ///
    /// The root itself is implicit, so the root's path is empty.
    pub fn name_path(&self, id: NodeId) -> Vec<Option<String>> {
        let Some(node) = self.get(id) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(node.depth);
        let mut cur = node;
        while let Some(p) = cur.parent {
            out.push(cur.name.clone());
            cur = &self.nodes[p.index()];
        }
        out.reverse();
        out
    }

    /// Walk from the root following display names; inverse of [`name_path`](Self::name_path).
    ///
    /// At each level the first child with a matching name wins.
    pub fn find_by_name_path(&self, path: &[Option<String>]) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut cur = self.root();
        for name in path {
            cur = *self
                .children_of(cur)
                .iter()
                .find(|c| self.nodes[c.index()].name == *name)?;
        }
        Some(cur)
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a LayoutNode;
    type IntoIter = core::slice::Iter<'a, LayoutNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
