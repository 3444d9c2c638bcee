// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The LIF cell group: owner of all per-neuron state for one contiguous
//! gid range and implementor of the driver-facing [`CellGroup`] contract.

use rayon::prelude::*;

use synfire_neural::models::LIFCell;
use synfire_neural::types::{CellAddress, NeuronId, SimTime, Spike, SynapticEvent};

use crate::background::BackgroundSource;
use crate::dynamics::{self, AdvanceResult, CellState};
use crate::error::{GroupError, Result};
use crate::event_queue::{self, EventQueue};
use crate::group::{BinningKind, CellGroup, CellKind, ProbeRecord, SamplerFn};

/// Cumulative counters for one group's lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupStats {
    pub advances: u64,
    pub queue_events_delivered: u64,
    pub background_events_delivered: u64,
    pub events_discarded: u64,
    pub spikes_emitted: u64,
}

impl GroupStats {
    pub fn events_delivered(&self) -> u64 {
        self.queue_events_delivered + self.background_events_delivered
    }

    /// Average delivered events per advance call
    pub fn avg_events_per_advance(&self) -> f64 {
        if self.advances == 0 {
            0.0
        } else {
            self.events_delivered() as f64 / self.advances as f64
        }
    }

    fn absorb(&mut self, r: &AdvanceResult) {
        self.queue_events_delivered += r.queue_events;
        self.background_events_delivered += r.background_events;
        self.events_discarded += r.events_discarded;
        self.spikes_emitted += r.spikes_emitted;
    }
}

/// A contiguous group of LIF point neurons advanced as a unit.
///
/// Owns descriptors, runtime state, event queues and background generators
/// for gids `[first_gid, first_gid + n)`; local index `lid` maps to gid by
/// the fixed offset `first_gid`.
#[derive(Debug)]
pub struct LIFCellGroup {
    first_gid: u32,
    cells: Vec<LIFCell>,
    states: Vec<CellState>,
    queues: Vec<EventQueue>,
    background: Vec<BackgroundSource>,
    spikes: Vec<Spike>,
    stats: GroupStats,
}

impl LIFCellGroup {
    /// Validate every descriptor and build the runtime state, seeding one
    /// background draw for each background-enabled neuron. A single invalid
    /// descriptor fails the whole construction.
    pub fn new(first_gid: u32, cells: &[LIFCell]) -> Result<Self> {
        for (lid, cell) in cells.iter().enumerate() {
            cell.validate().map_err(|source| GroupError::InvalidCell {
                gid: first_gid + lid as u32,
                source,
            })?;
        }

        let states = cells.iter().map(|c| CellState::at_rest(c.e_l)).collect();
        let queues = cells.iter().map(|_| EventQueue::new()).collect();
        let background = cells
            .iter()
            .enumerate()
            .map(|(lid, c)| BackgroundSource::new(first_gid + lid as u32, c))
            .collect();

        tracing::debug!(first_gid, num_cells = cells.len(), "LIF cell group constructed");

        Ok(Self {
            first_gid,
            cells: cells.to_vec(),
            states,
            queues,
            background,
            spikes: Vec::new(),
            stats: GroupStats::default(),
        })
    }

    pub fn first_gid(&self) -> u32 {
        self.first_gid
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn stats(&self) -> &GroupStats {
        &self.stats
    }

    /// Membrane potential of the neuron at local index `lid`.
    pub fn voltage(&self, lid: usize) -> f64 {
        self.states[lid].voltage
    }

    /// Clock (last applied update time) of the neuron at local index `lid`.
    pub fn last_update(&self, lid: usize) -> SimTime {
        self.states[lid].last_update
    }

    fn local_index(&self, neuron: NeuronId) -> Result<usize> {
        let gid = neuron.0;
        let num_cells = self.cells.len() as u32;
        if gid < self.first_gid || gid - self.first_gid >= num_cells {
            return Err(GroupError::TargetOutOfRange {
                gid,
                first_gid: self.first_gid,
                num_cells,
            });
        }
        Ok((gid - self.first_gid) as usize)
    }
}

impl CellGroup for LIFCellGroup {
    fn cell_kind(&self) -> CellKind {
        CellKind::Lif
    }

    fn advance(&mut self, tfinal: SimTime, _dt: SimTime) {
        let first_gid = self.first_gid;
        let cells = &self.cells;

        // Neurons share nothing, so each worker advances its own slice
        // members and collects spikes locally; concatenating in local-index
        // order reproduces the sequential spike order exactly.
        let per_cell: Vec<(Vec<Spike>, AdvanceResult)> = self
            .states
            .par_iter_mut()
            .zip(self.queues.par_iter_mut())
            .zip(self.background.par_iter_mut())
            .enumerate()
            .map(|(lid, ((state, queue), background))| {
                let gid = first_gid + lid as u32;
                let mut local_spikes = Vec::new();
                let result = dynamics::advance_cell(
                    gid,
                    &cells[lid],
                    state,
                    queue,
                    background,
                    &mut local_spikes,
                    tfinal,
                );
                (local_spikes, result)
            })
            .collect();

        for (local_spikes, result) in per_cell {
            self.spikes.extend(local_spikes);
            self.stats.absorb(&result);
        }
        self.stats.advances += 1;

        tracing::trace!(
            first_gid,
            tfinal,
            spikes = self.spikes.len(),
            "group advanced"
        );
    }

    fn enqueue_events(&mut self, events: &[SynapticEvent]) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }

        let mut batch = events.to_vec();
        event_queue::sort_batch(&mut batch);

        // Validate the whole batch before touching any queue, so a bad
        // batch mutates nothing. The batch is time-sorted, so checking each
        // event against the resident watermark suffices.
        for event in &batch {
            let lid = self.local_index(event.target.neuron)?;
            if !self.queues[lid].accepts(event.time) {
                let watermark = self.queues[lid].delivered_until().unwrap_or(0.0);
                tracing::warn!(
                    gid = event.target.gid(),
                    time = event.time,
                    watermark,
                    "rejecting non-monotonic event batch"
                );
                return Err(GroupError::NonMonotonicEvent {
                    gid: event.target.gid(),
                    time: event.time,
                    watermark,
                });
            }
        }

        for event in batch {
            let lid = (event.target.gid() - self.first_gid) as usize;
            self.queues[lid].push_back(event);
        }
        Ok(())
    }

    fn spikes(&self) -> &[Spike] {
        &self.spikes
    }

    fn clear_spikes(&mut self) {
        self.spikes.clear();
    }

    fn reset(&mut self) {
        self.spikes.clear();
        for queue in &mut self.queues {
            queue.reset();
        }
        // Voltages, clocks and background generator state persist: the
        // membrane equation and the Poisson process are continuous across
        // epoch boundaries.
        tracing::debug!(first_gid = self.first_gid, "group reset");
    }

    fn add_sampler(&mut self, probe: CellAddress, _sampler: SamplerFn, start_time: SimTime) {
        // Single-compartment cells expose nothing to sample.
        tracing::debug!(
            probe = %probe,
            start_time,
            "samplers are not supported by LIF cell groups; ignoring"
        );
    }

    fn set_binning_policy(&mut self, policy: BinningKind, bin_interval: SimTime) {
        tracing::debug!(
            ?policy,
            bin_interval,
            "binning policies are not supported by LIF cell groups; ignoring"
        );
    }

    fn probes(&self) -> Vec<ProbeRecord> {
        // No probes in single-compartment cells.
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_cell() -> LIFCell {
        LIFCell {
            c_m: 1.0,
            v_th: 10.0,
            t_ref: 2.0,
            ..Default::default()
        }
    }

    fn ev(gid: u32, time: SimTime, weight: f64) -> SynapticEvent {
        SynapticEvent::new(CellAddress::new(gid, 0), time, weight)
    }

    #[test]
    fn test_construction_rejects_invalid_descriptor() {
        let bad = LIFCell {
            rate: -1.0,
            ..Default::default()
        };
        let err = LIFCellGroup::new(10, &[plain_cell(), bad]).unwrap_err();
        assert!(matches!(err, GroupError::InvalidCell { gid: 11, .. }));
    }

    #[test]
    fn test_gid_offset_mapping() {
        let mut group = LIFCellGroup::new(100, &vec![plain_cell(); 3]).unwrap();
        group.enqueue_events(&[ev(102, 1.0, 20.0)]).unwrap();
        group.advance(5.0, 0.1);

        let spikes = group.spikes();
        assert_eq!(spikes.len(), 1);
        assert_eq!(spikes[0].source.gid(), 102);
        assert_eq!(group.last_update(2), 3.0);
    }

    #[test]
    fn test_out_of_range_target_rejected_atomically() {
        let mut group = LIFCellGroup::new(0, &vec![plain_cell(); 2]).unwrap();
        let err = group
            .enqueue_events(&[ev(0, 1.0, 1.0), ev(2, 1.0, 1.0)])
            .unwrap_err();
        assert_eq!(
            err,
            GroupError::TargetOutOfRange {
                gid: 2,
                first_gid: 0,
                num_cells: 2
            }
        );
        // The valid half of the batch was not delivered either.
        group.advance(10.0, 0.1);
        assert_eq!(group.stats().queue_events_delivered, 0);
    }

    #[test]
    fn test_non_monotonic_batch_rejected_atomically() {
        let mut group = LIFCellGroup::new(0, &[plain_cell()]).unwrap();
        group.enqueue_events(&[ev(0, 5.0, 1.0)]).unwrap();

        let err = group.enqueue_events(&[ev(0, 3.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            GroupError::NonMonotonicEvent {
                gid: 0,
                time: 3.0,
                watermark: 5.0
            }
        );

        // Later batches are still accepted.
        group.enqueue_events(&[ev(0, 6.0, 1.0)]).unwrap();
        group.advance(10.0, 0.1);
        assert_eq!(group.stats().queue_events_delivered, 2);
    }

    #[test]
    fn test_tie_break_delivers_ascending_weight() {
        // Two events at the same instant: ascending-weight order means the
        // small one lands first (no spike), then the big one fires — both
        // delivered. Descending order would fire first and discard the rest.
        let mut group = LIFCellGroup::new(0, &[plain_cell()]).unwrap();
        group
            .enqueue_events(&[ev(0, 1.0, 11.0), ev(0, 1.0, 1.0)])
            .unwrap();
        group.advance(5.0, 0.1);

        assert_eq!(group.stats().queue_events_delivered, 2);
        assert_eq!(group.stats().events_discarded, 0);
        assert_eq!(group.spikes().len(), 1);
    }

    #[test]
    fn test_reset_round_trip() {
        let mut group = LIFCellGroup::new(0, &[plain_cell()]).unwrap();
        group.enqueue_events(&[ev(0, 1.0, 20.0)]).unwrap();
        group.advance(2.0, 0.1);
        group.enqueue_events(&[ev(0, 8.0, 1.0)]).unwrap();

        let voltage = group.voltage(0);
        let last_update = group.last_update(0);
        assert_eq!(group.spikes().len(), 1);

        group.reset();

        assert!(group.spikes().is_empty());
        assert_eq!(group.voltage(0), voltage);
        assert_eq!(group.last_update(0), last_update);
        // Queues and watermarks cleared: an early time is accepted again.
        group.enqueue_events(&[ev(0, 0.5, 1.0)]).unwrap();
    }

    #[test]
    fn test_capability_stubs_are_no_ops() {
        let mut group = LIFCellGroup::new(0, &[plain_cell()]).unwrap();
        assert_eq!(group.cell_kind(), CellKind::Lif);
        group.add_sampler(CellAddress::new(0, 0), Box::new(|_, _, _| {}), 0.0);
        group.set_binning_policy(BinningKind::Regular, 0.1);
        assert!(group.probes().is_empty());
    }
}
