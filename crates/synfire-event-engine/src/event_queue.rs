// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-neuron queue of pending synaptic events.
//!
//! The driver delivers batches in non-decreasing time epochs; the queue
//! tracks a delivery watermark so a violating batch can be rejected instead
//! of silently corrupting the time-ordered merge.

use std::collections::VecDeque;

use synfire_neural::types::{SimTime, SynapticEvent};

/// Time-ordered pending input for one neuron.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<SynapticEvent>,
    /// Largest delivery time accepted so far; new input below it is rejected
    /// at the group boundary.
    delivered_until: Option<SimTime>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an event at `time` keeps the queue time-ordered.
    pub fn accepts(&self, time: SimTime) -> bool {
        self.delivered_until.map_or(true, |w| time >= w)
    }

    /// Largest delivery time accepted so far.
    pub fn delivered_until(&self) -> Option<SimTime> {
        self.delivered_until
    }

    /// Append an event. Caller checks `accepts` first; the group enqueue
    /// path validates whole batches atomically before pushing anything.
    pub fn push_back(&mut self, event: SynapticEvent) {
        self.delivered_until = Some(event.time);
        self.events.push_back(event);
    }

    /// Delivery time of the pending head, if any.
    pub fn head_time(&self) -> Option<SimTime> {
        self.events.front().map(|e| e.time)
    }

    /// Remove and return the head iff it is strictly before `horizon`.
    pub fn pop_front_if_before(&mut self, horizon: SimTime) -> Option<SynapticEvent> {
        if self.head_time()? < horizon {
            self.events.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all pending events and the watermark (back to constructed
    /// state).
    pub fn reset(&mut self) {
        self.events.clear();
        self.delivered_until = None;
    }
}

/// Stable delivery order for a batch: time ascending, weight ascending as
/// the tie-break.
pub fn sort_batch(batch: &mut [SynapticEvent]) {
    batch.sort_by(|a, b| a.delivery_order(b));
}
