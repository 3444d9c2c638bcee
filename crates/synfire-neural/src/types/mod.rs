// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Core type definitions shared by every kernel component.

pub mod error;
pub mod events;
pub mod ids;

pub use error::{CellError, Result};
pub use events::{SimTime, Spike, SynapticEvent};
pub use ids::{CellAddress, NeuronId};
