// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Synfire Event Engine
//!
//! The per-population advance engine of the simulator. A [`LIFCellGroup`]
//! owns a contiguous range of LIF point neurons and, once per epoch, merges
//! externally routed synaptic events with an internally generated background
//! Poisson stream into one chronologically ordered stream per neuron,
//! integrating the membrane equation exactly between events.
//!
//! Per-epoch driver contract:
//!
//! ```text
//! group.enqueue_events(&batch)?;   // routed input for this epoch
//! group.advance(tfinal, dt);      // dt unused: exact solver
//! consume(group.spikes());
//! group.clear_spikes();
//! ```
//!
//! The [`CellGroup`] trait is the polymorphic seam the driver consumes;
//! other neuron kinds plug in behind it.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod background;
pub mod cell_group;
pub mod dynamics;
pub mod error;
pub mod event_queue;
pub mod group;
pub mod merge;
mod trace;

pub use background::BackgroundSource;
pub use cell_group::{GroupStats, LIFCellGroup};
pub use dynamics::{AdvanceResult, CellPhase, CellState};
pub use error::{GroupError, Result};
pub use event_queue::EventQueue;
pub use group::{BinningKind, CellGroup, CellKind, ProbeRecord, SamplerFn};
pub use merge::EventSource;
