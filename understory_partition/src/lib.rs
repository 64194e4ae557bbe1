// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_partition --heading-base-level=0

//! Understory Partition: a radial partition layout for weighted trees.
//!
//! This crate turns a rooted, ordered tree into a flat pre-order sequence of
//! [`LayoutNode`]s, each annotated with a normalized angular interval and a
//! normalized radial interval. It is the layout step behind sunburst charts.
//!
//! - Siblings split their parent's angular width in proportion to their values.
//! - Each depth level takes an equal share of the normalized radius.
//! - Zero-value subtrees are kept with zero width so depth-based queries still see them.
//!
//! It does **not** map to radians or pixels. Pair it with scale mappings (for
//! example `understory_sunburst`) to turn normalized intervals into arc shapes,
//! and to zoom without recomputing the layout.
//!
//! ## API overview
//!
//! - [`Hierarchy`]: the input trait; [`Record`] is a ready-made implementation.
//! - [`partition`] / [`partition_with`] → [`Partition`].
//! - [`LayoutNode`]: per-node intervals, depth, value, name, and back-relations.
//! - [`NodeId`]: generational handle of a laid-out node.
//! - [`PartitionError`]: rejected weights.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_partition::{Hierarchy, Record, partition};
//!
//! let root = Record::new()
//!     .with_child(Record::leaf("a", 1.0))
//!     .with_child(Record::leaf("b", 3.0));
//!
//! let layout = partition(&root, |r: &Record| r.number("size")).unwrap();
//! let widths: Vec<f64> = layout.iter().map(|n| n.angle_width).collect();
//! assert_eq!(widths, vec![1.0, 0.25, 0.75]);
//! ```
//!
//! ## Names and ordering
//!
//! ```
//! use understory_partition::{
//!     Hierarchy, PartitionOptions, Record, SiblingOrder, partition_with,
//! };
//!
//! let root = Record::branch("root", [Record::leaf("a", 1.0), Record::leaf("b", 3.0)]);
//! let opts = PartitionOptions { sibling_order: SiblingOrder::DescendingValue, ..Default::default() };
//! let layout = partition_with(&root, &opts, |r| r.number("size"), |r| r.text("name")).unwrap();
//!
//! let first_child = layout.children_of(layout.root())[0];
//! assert_eq!(layout.node(first_child).name.as_deref(), Some("b"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod hierarchy;
mod partition;
mod types;

pub use error::PartitionError;
pub use hierarchy::{Field, Hierarchy, Record};
pub use partition::{Partition, partition, partition_with};
pub use types::{LayoutNode, NodeId, PartitionOptions, SiblingOrder};
