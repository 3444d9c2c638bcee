// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Event and spike records flowing through the kernel.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::ids::CellAddress;

/// Continuous simulation time in milliseconds.
///
/// f64 throughout: the exact solver accumulates sums of exponentials and
/// Poisson offsets, and the no-discretization-error contract depends on the
/// wider mantissa.
pub type SimTime = f64;

/// A synaptic event delivered to one cell.
///
/// Produced by the routing collaborator (or synthesized from background
/// input), owned by the target's event queue once enqueued, consumed exactly
/// once by the merger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynapticEvent {
    pub target: CellAddress,
    pub time: SimTime,
    pub weight: f64,
}

impl SynapticEvent {
    pub fn new(target: CellAddress, time: SimTime, weight: f64) -> Self {
        Self {
            target,
            time,
            weight,
        }
    }

    /// Total order used for batch delivery: time ascending, then weight
    /// ascending as the tie-break.
    pub fn delivery_order(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then(self.weight.total_cmp(&other.weight))
    }
}

/// A threshold crossing emitted by a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub source: CellAddress,
    pub time: SimTime,
}
