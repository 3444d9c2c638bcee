// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Synfire - Event-Driven Spiking Neural-Network Simulation Kernel
//!
//! Synfire advances populations of leaky-integrate-and-fire point neurons
//! through continuous time. Each cell group merges externally routed
//! synaptic events with a reproducible background Poisson stream and
//! integrates the membrane equation exactly between events - no timestep,
//! no discretization error.
//!
//! ## Quick Start
//!
//! ```rust
//! use synfire::prelude::*;
//!
//! // A population of 10 background-driven LIF cells.
//! let cells = vec![
//!     LIFCell {
//!         n_poiss: 800,
//!         rate: 0.002,
//!         w_poiss: 15.0,
//!         d_poiss: 1.0,
//!         ..Default::default()
//!     };
//!     10
//! ];
//! let mut group = LIFCellGroup::new(0, &cells)?;
//!
//! // One driver epoch: deliver input, advance, collect output.
//! group.enqueue_events(&[])?;
//! group.advance(100.0, 0.0);
//! for spike in group.spikes() {
//!     println!("{} fired at {} ms", spike.source.neuron, spike.time);
//! }
//! group.clear_spikes();
//! # Ok::<(), synfire::engine::GroupError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------+
//! |  Foundation: synfire-neural                             |
//! |  (ids, events, LIF descriptors, exact dynamics, RNG)    |
//! +---------------------------------------------------------+
//!                          |
//! +---------------------------------------------------------+
//! |  Engine: synfire-event-engine                           |
//! |  (queues, background input, merge, state machine,       |
//! |   cell groups behind the CellGroup trait)               |
//! +---------------------------------------------------------+
//! ```
//!
//! ## Determinism
//!
//! Background input is sampled from a counter-based generator keyed by
//! (stream tag, gid): the same network produces bit-identical spike trains
//! regardless of how it is partitioned into groups or how many threads
//! advance them.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use synfire_event_engine as engine;
pub use synfire_neural as neural;

/// Common imports for driver code.
pub mod prelude {
    pub use synfire_event_engine::{
        BinningKind, CellGroup, CellKind, GroupError, GroupStats, LIFCellGroup, ProbeRecord,
    };
    pub use synfire_neural::models::LIFCell;
    pub use synfire_neural::types::{CellAddress, NeuronId, SimTime, Spike, SynapticEvent};
}
