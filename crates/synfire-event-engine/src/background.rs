// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-neuron background Poisson input.
//!
//! The `n_poiss` external sources of a cell superpose into a single Poisson
//! process with mean inter-arrival `1 / (rate * n_poiss)`. Draws are
//! counter-based ([`synfire_neural::rng`]): the accumulated event time after
//! k draws is a pure function of (gid, k), independent of scheduling.

use synfire_neural::models::LIFCell;
use synfire_neural::rng::{background_key, poisson_interarrival};
use synfire_neural::types::SimTime;

/// Background-generator state for one neuron.
#[derive(Debug, Clone)]
pub struct BackgroundSource {
    key: u64,
    /// Mean inter-arrival; infinite when the cell draws no background.
    mean: f64,
    delay: SimTime,
    weight: f64,
    /// Accumulated arrival time of the most recent draw.
    next_time: SimTime,
    /// Draws taken so far. Strictly +1 per draw; a (key, counter) pair is
    /// never reused.
    counter: u64,
}

impl BackgroundSource {
    /// Build from a descriptor, seeding exactly one draw when the cell has
    /// background input enabled.
    pub fn new(gid: u32, cell: &LIFCell) -> Self {
        let mut source = Self {
            key: background_key(gid),
            mean: cell.background_mean_interarrival(),
            delay: cell.d_poiss,
            weight: cell.w_poiss,
            next_time: 0.0,
            counter: 0,
        };
        if source.enabled() {
            source.sample_next();
        }
        source
    }

    pub fn enabled(&self) -> bool {
        self.mean.is_finite()
    }

    /// Advance to the next arrival: draw one inter-arrival interval and
    /// accumulate it. Called when the current arrival is consumed, never on
    /// a mere query.
    pub fn sample_next(&mut self) {
        let interval = poisson_interarrival(self.mean, self.key, self.counter);
        self.counter += 1;
        self.next_time += interval;
    }

    /// Delivery time of the pending background event (arrival + delay) iff
    /// strictly before `horizon`. Pure query: does not draw.
    pub fn next_event_before(&self, horizon: SimTime) -> Option<SimTime> {
        if !self.enabled() {
            return None;
        }
        let t = self.next_time + self.delay;
        (t < horizon).then_some(t)
    }

    /// Weight carried by every event of this stream.
    pub fn event_weight(&self) -> f64 {
        self.weight
    }

    pub fn draws(&self) -> u64 {
        self.counter
    }

    #[cfg(test)]
    pub(crate) fn with_state(next_time: SimTime, delay: SimTime, weight: f64, mean: f64) -> Self {
        Self {
            key: background_key(0),
            mean,
            delay,
            weight,
            next_time,
            counter: 1,
        }
    }
}
