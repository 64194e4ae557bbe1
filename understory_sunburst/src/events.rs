// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use understory_partition::NodeId;

/// Input to a [`Sunburst`](crate::Sunburst), dispatched by
/// [`Sunburst::handle`](crate::Sunburst::handle).
///
/// Node-tagged variants come from surfaces with retained arcs; pointer variants
/// come from surfaces that only report positions (in container coordinates) and
/// let the engine hit-test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SunburstEvent {
    /// An arc was clicked.
    Click(NodeId),
    /// The pointer entered an arc.
    HoverEnter(NodeId),
    /// The pointer left an arc.
    HoverLeave(NodeId),
    /// The container changed size.
    Resize(Size),
    /// The pointer moved.
    PointerMove(Point),
    /// The pointer left the container.
    PointerExit,
    /// The pointer clicked.
    PointerClick(Point),
}
