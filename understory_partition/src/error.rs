// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned when a hierarchy cannot be partitioned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PartitionError {
    /// The weight accessor produced a negative or non-finite value.
    #[error("invalid weight {weight} at input node {index} (pre-order)")]
    InvalidWeight {
        /// Pre-order position of the offending node in the input tree.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },
}
