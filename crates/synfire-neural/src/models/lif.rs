// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # LIF (Leaky Integrate-and-Fire) point-neuron descriptor
//!
//! Between events the membrane potential obeys a pure linear decay, so the
//! state machine integrates it analytically:
//!
//! ```text
//! Decay between events:
//!     V(t) = V(t0) * exp(-(t - t0) / tau_m)
//!
//! Jump on a synaptic event with weight w:
//!     V <- V + w / c_m
//!
//! Firing check:
//!     if V >= v_th: emit spike, V <- e_l, suppress input for t_ref
//! ```
//!
//! `e_l` is the reset (and initial) potential only; the decay target is 0,
//! exactly as written above.

use serde::{Deserialize, Serialize};

use crate::types::{CellError, Result};

/// Immutable LIF cell parameters, fixed at group construction.
///
/// Units follow the usual convention: ms for times, pF for capacitance,
/// mV for voltages, kHz for the background rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LIFCell {
    /// Membrane time constant [ms]
    pub tau_m: f64,
    /// Membrane capacitance [pF]
    pub c_m: f64,
    /// Firing threshold [mV]
    pub v_th: f64,
    /// Resting/reset potential [mV]
    pub e_l: f64,
    /// Refractory duration after a spike [ms]
    pub t_ref: f64,
    /// Number of synthetic background sources converging on this cell
    pub n_poiss: u32,
    /// Weight of one background event
    pub w_poiss: f64,
    /// Delivery delay of background events [ms]
    pub d_poiss: f64,
    /// Rate of a single background source [kHz]
    pub rate: f64,
}

impl Default for LIFCell {
    fn default() -> Self {
        Self {
            tau_m: 10.0,
            c_m: 20.0,
            v_th: 10.0,
            e_l: 0.0,
            t_ref: 2.0,
            n_poiss: 0,
            w_poiss: 0.0,
            d_poiss: 0.0,
            rate: 0.0,
        }
    }
}

impl LIFCell {
    /// Check the descriptor invariants.
    ///
    /// Called once per cell at group construction; a violation aborts group
    /// creation.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("tau_m", self.tau_m),
            ("c_m", self.c_m),
            ("v_th", self.v_th),
            ("e_l", self.e_l),
            ("t_ref", self.t_ref),
            ("w_poiss", self.w_poiss),
            ("d_poiss", self.d_poiss),
            ("rate", self.rate),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CellError::NonFinite { field, value });
            }
        }

        let positive = [("tau_m", self.tau_m), ("c_m", self.c_m)];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(CellError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("t_ref", self.t_ref),
            ("w_poiss", self.w_poiss),
            ("d_poiss", self.d_poiss),
            ("rate", self.rate),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(CellError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Whether this cell draws any background input at all.
    pub fn background_enabled(&self) -> bool {
        self.n_poiss > 0 && self.rate > 0.0
    }

    /// Mean inter-arrival of the superposed background stream,
    /// `1 / (rate * n_poiss)`; infinite when background is disabled.
    pub fn background_mean_interarrival(&self) -> f64 {
        if self.background_enabled() {
            1.0 / (self.rate * self.n_poiss as f64)
        } else {
            f64::INFINITY
        }
    }
}
