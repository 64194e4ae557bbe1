// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use understory_partition::PartitionError;

use crate::surface::SurfaceError;

/// Error returned by [`Sunburst`](crate::Sunburst) operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SunburstError {
    /// The input hierarchy could not be partitioned.
    #[error("invalid hierarchy: {0}")]
    InvalidHierarchy(#[from] PartitionError),
    /// The surface could not draw the chart.
    #[error("surface cannot draw the chart: {0}")]
    AdapterCapabilityMissing(#[from] SurfaceError),
}
