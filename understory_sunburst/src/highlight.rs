// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover highlight: which arcs grow together, and the short tweens that grow them.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use understory_partition::{LayoutNode, NodeId, Partition};

use crate::arc::ArcShape;

/// Caller predicate: `(hovered, candidate) -> same group`.
pub type GroupPredicate = Box<dyn Fn(&LayoutNode, &LayoutNode) -> bool>;

/// How candidates at the highlight depth are matched against the hovered node.
#[derive(Default)]
pub enum HighlightGroup {
    /// Candidates whose display name equals the hovered node's name.
    ///
    /// Two unnamed nodes count as equal.
    #[default]
    SameName,
    /// Every candidate.
    All,
    /// A caller predicate.
    Custom(GroupPredicate),
}

impl fmt::Debug for HighlightGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameName => f.write_str("SameName"),
            Self::All => f.write_str("All"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Selects the arcs that expand when a node is hovered.
///
/// Only nodes at `depth` are candidates, whatever the depth of the hovered node.
///
/// ```
/// use understory_partition::{Hierarchy, Record, partition_with, PartitionOptions};
/// use understory_sunburst::HighlightRule;
///
/// let root = Record::branch("root", [
///     Record::branch("2024", [Record::leaf("rent", 3.0), Record::leaf("food", 1.0)]),
///     Record::branch("2025", [Record::leaf("rent", 4.0), Record::leaf("fun", 2.0)]),
/// ]);
/// let opts = PartitionOptions::default();
/// let p = partition_with(&root, &opts, |r| r.number("size"), |r| r.text("name")).unwrap();
/// let rent = p.iter().find(|n| n.name.as_deref() == Some("rent")).unwrap().id;
///
/// let group = HighlightRule::default().members(&p, rent);
/// assert_eq!(group.len(), 2);
/// ```
#[derive(Debug)]
pub struct HighlightRule {
    /// Depth of the candidate arcs.
    pub depth: usize,
    /// Matching rule.
    pub group: HighlightGroup,
}

impl Default for HighlightRule {
    fn default() -> Self {
        Self {
            depth: 2,
            group: HighlightGroup::SameName,
        }
    }
}

impl HighlightRule {
    /// Ids of the nodes highlighted together with `hovered`, in pre-order.
    ///
    /// Returns an empty list for ids that do not belong to `layout`.
    pub fn members(&self, layout: &Partition, hovered: NodeId) -> Vec<NodeId> {
        let Some(h) = layout.get(hovered) else {
            return Vec::new();
        };
        layout
            .nodes_at_depth(self.depth)
            .filter(|n| self.matches(h, n))
            .map(|n| n.id)
            .collect()
    }

    fn matches(&self, hovered: &LayoutNode, candidate: &LayoutNode) -> bool {
        match &self.group {
            HighlightGroup::SameName => hovered.name == candidate.name,
            HighlightGroup::All => true,
            HighlightGroup::Custom(f) => f(hovered, candidate),
        }
    }
}

/// One arc moving towards its resting or hover-expanded shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ArcTween {
    pub(crate) from: ArcShape,
    pub(crate) expanded: bool,
    started_at: Option<f64>,
}

/// Progress of one tween at a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct TweenStep {
    pub(crate) node: NodeId,
    pub(crate) from: ArcShape,
    pub(crate) expanded: bool,
    pub(crate) t: f64,
}

/// Per-arc hover tweens. A new tween for an arc replaces the previous one.
#[derive(Clone, Debug, Default)]
pub(crate) struct HoverTweens {
    duration_ms: f64,
    active: HashMap<NodeId, ArcTween>,
}

impl HoverTweens {
    pub(crate) fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            active: HashMap::new(),
        }
    }

    pub(crate) fn start(&mut self, node: NodeId, from: ArcShape, expanded: bool) {
        self.active.insert(
            node,
            ArcTween {
                from,
                expanded,
                started_at: None,
            },
        );
    }

    pub(crate) fn cancel_all(&mut self) -> usize {
        let n = self.active.len();
        self.active.clear();
        n
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Progress of every tween at `now_ms`; finished tweens are dropped.
    ///
    /// Steps come out sorted by pre-order index so surfaces see a stable order.
    pub(crate) fn advance(&mut self, now_ms: f64) -> Vec<TweenStep> {
        let duration = self.duration_ms;
        let mut steps: Vec<TweenStep> = self
            .active
            .iter_mut()
            .map(|(&node, tween)| {
                let start = *tween.started_at.get_or_insert(now_ms);
                let t = if duration <= 0.0 {
                    1.0
                } else {
                    ((now_ms - start) / duration).max(0.0).min(1.0)
                };
                TweenStep {
                    node,
                    from: tween.from,
                    expanded: tween.expanded,
                    t,
                }
            })
            .collect();
        steps.sort_by_key(|s| s.node.index());
        self.active
            .retain(|_, tw| tw.started_at.is_some_and(|s| now_ms - s < duration));
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_partition::{Hierarchy, PartitionOptions, Record, partition_with};

    fn layout() -> Partition {
        let root = Record::branch(
            "root",
            [
                Record::branch("x", [Record::leaf("p", 1.0), Record::leaf("q", 1.0)]),
                Record::branch("y", [Record::leaf("p", 2.0), Record::leaf("r", 1.0)]),
                Record::leaf("p", 1.0),
            ],
        );
        partition_with(
            &root,
            &PartitionOptions::default(),
            |r| r.number("size"),
            |r| r.text("name"),
        )
        .unwrap()
    }

    fn names<'a>(p: &'a Partition, ids: &[NodeId]) -> Vec<&'a str> {
        ids.iter()
            .map(|&id| p.node(id).name.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn same_name_only_looks_at_depth_two() {
        let p = layout();
        // The depth-1 "p" still selects the depth-2 "p" arcs.
        let shallow = p.children_of(p.root())[2];
        let members = HighlightRule::default().members(&p, shallow);
        assert_eq!(names(&p, &members), vec!["p", "p"]);
        assert!(members.iter().all(|&id| p.node(id).depth == 2));
    }

    #[test]
    fn all_and_custom_groups() {
        let p = layout();
        let x = p.children_of(p.root())[0];
        let all = HighlightRule {
            depth: 2,
            group: HighlightGroup::All,
        };
        assert_eq!(all.members(&p, x).len(), 4);

        let bigger = HighlightRule {
            depth: 2,
            group: HighlightGroup::Custom(Box::new(|_: &LayoutNode, c: &LayoutNode| {
                c.value > 1.0
            })),
        };
        assert_eq!(names(&p, &bigger.members(&p, x)), vec!["p"]);

        let shallow = HighlightRule {
            depth: 1,
            group: HighlightGroup::SameName,
        };
        assert_eq!(shallow.members(&p, x), vec![x]);
    }

    #[test]
    fn stale_ids_have_no_group() {
        let p = layout();
        let other = {
            let root = Record::new().with_child(Record::leaf("a", 1.0));
            let opts = PartitionOptions {
                generation: 9,
                ..Default::default()
            };
            partition_with(&root, &opts, |r| r.number("size"), |r| r.text("name")).unwrap()
        };
        assert!(HighlightRule::default().members(&p, other.root()).is_empty());
    }

    #[test]
    fn tweens_replace_and_finish() {
        let p = layout();
        let a = p.children_of(p.root())[0];
        let b = p.children_of(p.root())[1];
        let mut tw = HoverTweens::new(100.0);
        tw.start(a, ArcShape::EMPTY, true);
        tw.start(b, ArcShape::EMPTY, true);
        tw.start(a, ArcShape::EMPTY, false);

        let steps = tw.advance(1000.0);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].node, a);
        assert!(!steps[0].expanded);
        assert_eq!(steps[0].t, 0.0);

        let steps = tw.advance(1050.0);
        assert_eq!(steps[1].t, 0.5);
        assert!(!tw.is_empty());

        let steps = tw.advance(1100.0);
        assert!(steps.iter().all(|s| s.t == 1.0));
        assert!(tw.is_empty());
    }

    #[test]
    fn zero_duration_tweens_finish_on_first_frame() {
        let p = layout();
        let mut tw = HoverTweens::new(0.0);
        tw.start(p.root(), ArcShape::EMPTY, true);
        assert_eq!(tw.advance(5.0)[0].t, 1.0);
        assert!(tw.is_empty());
        assert_eq!(tw.cancel_all(), 0);
    }
}
