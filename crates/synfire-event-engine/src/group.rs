// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The polymorphic cell-group seam consumed by the simulation driver.
//!
//! One driver loop serves every neuron kind through this trait; groups that
//! do not support a capability (sampling, binning, probing) accept the call
//! as a no-op rather than failing, so the driver needs no per-kind paths.

use synfire_neural::types::{CellAddress, SimTime, Spike, SynapticEvent};

use crate::error::Result;

/// Neuron-model kind implemented by a group.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Lif,
}

/// Spike-time binning policy requested by samplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinningKind {
    None,
    Regular,
    Following,
}

/// Callback invoked with probe samples: (probe address, sample time, value).
pub type SamplerFn = Box<dyn FnMut(CellAddress, SimTime, f64) + Send>;

/// One probeable quantity exposed by a group.
#[derive(Debug, Clone)]
pub struct ProbeRecord {
    pub address: CellAddress,
    pub tag: String,
}

/// Group-level contract, called once per simulation epoch.
pub trait CellGroup {
    fn cell_kind(&self) -> CellKind;

    /// Advance every owned neuron to `tfinal`. `dt` exists for interface
    /// parity with timestep-based kinds; exact solvers ignore it.
    fn advance(&mut self, tfinal: SimTime, dt: SimTime);

    /// Deliver one batch of routed synaptic events. Batches must arrive in
    /// non-decreasing time epochs; a violating or out-of-range batch is
    /// rejected atomically.
    fn enqueue_events(&mut self, events: &[SynapticEvent]) -> Result<()>;

    /// Spikes accumulated since the last clear.
    fn spikes(&self) -> &[Spike];

    fn clear_spikes(&mut self);

    /// Drop accumulated output and pending input. Continuous-time neuron
    /// state (voltage, clock, refractory marker) persists.
    fn reset(&mut self);

    fn add_sampler(&mut self, probe: CellAddress, sampler: SamplerFn, start_time: SimTime);

    fn set_binning_policy(&mut self, policy: BinningKind, bin_interval: SimTime);

    fn probes(&self) -> Vec<ProbeRecord>;
}
