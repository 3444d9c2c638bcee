// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Group-level error taxonomy.
//!
//! Failures surface only at the construction and enqueue boundaries;
//! `advance` is infallible and never gives up mid-integration.

use synfire_neural::types::CellError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroupError {
    #[error("invalid descriptor for neuron {gid}: {source}")]
    InvalidCell {
        gid: u32,
        #[source]
        source: CellError,
    },

    #[error("event target {gid} outside group range [{first_gid}, {first_gid}+{num_cells})")]
    TargetOutOfRange {
        gid: u32,
        first_gid: u32,
        num_cells: u32,
    },

    #[error(
        "event for neuron {gid} at t={time} precedes already delivered input at t={watermark}"
    )]
    NonMonotonicEvent {
        gid: u32,
        time: f64,
        watermark: f64,
    },
}

pub type Result<T> = std::result::Result<T, GroupError>;
