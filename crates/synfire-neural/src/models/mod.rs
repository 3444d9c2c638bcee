// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cell descriptors (immutable per-simulation neuron parameters).

pub mod lif;

pub use lif::LIFCell;
