// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Synfire Neural Primitives
//!
//! Platform-agnostic building blocks for the event-driven simulation kernel:
//! - **Types**: identity types, synaptic events, spikes, error taxonomy
//! - **Models**: cell descriptors and their validation (LIF)
//! - **Dynamics**: exact analytic membrane-potential updates
//! - **Rng**: counter-based pseudo-random sampling for reproducible
//!   background input

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod dynamics;
pub mod models;
pub mod rng;
pub mod types;

pub use dynamics::*;

pub use models::LIFCell;
pub use types::{
    CellAddress, CellError, NeuronId, Result, SimTime, Spike, SynapticEvent,
};
