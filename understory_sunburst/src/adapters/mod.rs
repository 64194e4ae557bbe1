// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made [`Surface`](crate::Surface) implementations.

pub mod recording;
