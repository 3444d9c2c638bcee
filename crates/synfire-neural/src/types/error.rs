// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for cell-descriptor validation.

/// A malformed cell descriptor field.
///
/// Detected at the construction boundary and fatal to group creation; a
/// malformed descriptor is never clamped or silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CellError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be > 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: f64 },
}

pub type Result<T> = core::result::Result<T, CellError>;
