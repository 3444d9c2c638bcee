// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-neuron state machine: exact event-driven advance.
//!
//! Between events the LIF equation is a linear decay, so the state jumps
//! analytically from event to event; no timestep enters the computation.
//! Refractory suppression is explicit: after a spike the cell's clock moves
//! to `refractory_until` and everything the merger produces before that
//! instant is consumed and discarded.

use synfire_neural::dynamics::{crossed_threshold, decay_potential, synaptic_jump};
use synfire_neural::models::LIFCell;
use synfire_neural::types::{CellAddress, SimTime, Spike};

use crate::background::BackgroundSource;
use crate::event_queue::EventQueue;
use crate::merge::{self, EventSource};
use crate::trace;

/// Continuous-time runtime state of one neuron.
///
/// Persists across epochs: `reset()` on the group does not touch it, since
/// the membrane equation is continuous across epoch boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    /// Membrane potential [mV]
    pub voltage: f64,
    /// The cell's clock: time of the last applied update
    pub last_update: SimTime,
    /// End of the most recent refractory window
    pub refractory_until: SimTime,
}

impl CellState {
    /// Initial state: at rest, clock at the simulation origin.
    pub fn at_rest(e_l: f64) -> Self {
        Self {
            voltage: e_l,
            last_update: 0.0,
            refractory_until: 0.0,
        }
    }

    /// Phase of the two-state machine at instant `t`.
    pub fn phase_at(&self, t: SimTime) -> CellPhase {
        if t < self.refractory_until {
            CellPhase::Refractory
        } else {
            CellPhase::Active
        }
    }
}

/// The two phases of the neuron state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPhase {
    Active,
    Refractory,
}

/// Event counters for one advance pass over one neuron.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvanceResult {
    pub queue_events: u64,
    pub background_events: u64,
    pub events_discarded: u64,
    pub spikes_emitted: u64,
}

/// Advance one neuron to `tfinal`, appending threshold crossings to
/// `spikes`.
pub fn advance_cell(
    gid: u32,
    cell: &LIFCell,
    state: &mut CellState,
    queue: &mut EventQueue,
    background: &mut BackgroundSource,
    spikes: &mut Vec<Spike>,
    tfinal: SimTime,
) -> AdvanceResult {
    let mut result = AdvanceResult::default();

    // Catch-up: input behind the cell's clock arrived while the cell was
    // refractory in an earlier epoch. Consume and discard it.
    while merge::next_event(gid, queue, background, state.last_update).is_some() {
        result.events_discarded += 1;
    }

    // Integrate event to event until nothing is pending before tfinal.
    while let Some((event, source)) = merge::next_event(gid, queue, background, tfinal) {
        if event.time < state.last_update {
            result.events_discarded += 1;
            continue;
        }
        match source {
            EventSource::Queue => result.queue_events += 1,
            EventSource::Background => result.background_events += 1,
        }

        state.voltage = decay_potential(state.voltage, event.time - state.last_update, cell.tau_m);
        state.voltage = synaptic_jump(state.voltage, event.weight, cell.c_m);
        state.last_update = event.time;
        trace::trace_event(gid, event.time, source, state.voltage);

        if crossed_threshold(state.voltage, cell.v_th) {
            spikes.push(Spike {
                source: CellAddress::new(gid, 0),
                time: event.time,
            });
            result.spikes_emitted += 1;
            state.refractory_until = event.time + cell.t_ref;
            state.last_update = state.refractory_until;
            state.voltage = cell.e_l;
        }
    }

    result
}
