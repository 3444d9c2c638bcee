// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Chronological merge of the two per-neuron event streams.
//!
//! Min-of-two selection between the synaptic-queue head and the pending
//! background arrival, ties broken toward the queue (the same tie-break used
//! when sorting delivery batches). The background generator only advances
//! when its event is actually consumed, keeping draw counters aligned with
//! emitted events.

use synfire_neural::types::{CellAddress, SimTime, SynapticEvent};

use crate::background::BackgroundSource;
use crate::event_queue::EventQueue;

/// Which stream produced a merged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Queue,
    Background,
}

/// Pop the chronologically next event strictly before `horizon`, or `None`
/// when neither stream has one.
pub fn next_event(
    gid: u32,
    queue: &mut EventQueue,
    background: &mut BackgroundSource,
    horizon: SimTime,
) -> Option<(SynapticEvent, EventSource)> {
    let t_queue = queue.head_time().filter(|&t| t < horizon);
    let t_background = background.next_event_before(horizon);

    match (t_queue, t_background) {
        (Some(tq), Some(tb)) if tq <= tb => pop_queue(queue, horizon),
        (_, Some(tb)) => Some((consume_background(gid, background, tb), EventSource::Background)),
        (Some(_), None) => pop_queue(queue, horizon),
        (None, None) => None,
    }
}

fn pop_queue(queue: &mut EventQueue, horizon: SimTime) -> Option<(SynapticEvent, EventSource)> {
    queue
        .pop_front_if_before(horizon)
        .map(|ev| (ev, EventSource::Queue))
}

fn consume_background(
    gid: u32,
    background: &mut BackgroundSource,
    delivery_time: SimTime,
) -> SynapticEvent {
    let event = SynapticEvent::new(
        CellAddress::new(gid, 0),
        delivery_time,
        background.event_weight(),
    );
    background.sample_next();
    event
}
