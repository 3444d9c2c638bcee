// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Exact membrane-potential update algorithms
//!
//! Pure functions used by the event-driven state machine. Between events the
//! LIF equation is a linear decay, so the solution is closed-form and no
//! timestep enters the computation.

/// Decay a membrane potential over `elapsed` ms.
///
/// `V(t0 + elapsed) = V(t0) * exp(-elapsed / tau_m)`
#[inline]
pub fn decay_potential(voltage: f64, elapsed: f64, tau_m: f64) -> f64 {
    voltage * (-elapsed / tau_m).exp()
}

/// Apply the instantaneous jump caused by a synaptic event.
#[inline]
pub fn synaptic_jump(voltage: f64, weight: f64, c_m: f64) -> f64 {
    voltage + weight / c_m
}

/// Firing condition. The threshold itself fires.
#[inline]
pub fn crossed_threshold(voltage: f64, v_th: f64) -> bool {
    voltage >= v_th
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_is_exact_exponential() {
        let v = decay_potential(2.0, 10.0, 10.0);
        assert!((v - 2.0 * (-1.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_zero_elapsed_is_identity() {
        assert_eq!(decay_potential(1.5, 0.0, 10.0), 1.5);
    }

    #[test]
    fn test_decay_composes() {
        // Decaying 3 then 4 ms equals decaying 7 ms in one step.
        let split = decay_potential(decay_potential(1.0, 3.0, 5.0), 4.0, 5.0);
        let whole = decay_potential(1.0, 7.0, 5.0);
        assert!((split - whole).abs() < 1e-15);
    }

    #[test]
    fn test_synaptic_jump_scales_by_capacitance() {
        assert!((synaptic_jump(0.5, 4.0, 20.0) - 0.7).abs() < 1e-15);
        // Inhibitory weights pull the potential down.
        assert!((synaptic_jump(0.5, -4.0, 20.0) - 0.3).abs() < 1e-15);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(crossed_threshold(10.0, 10.0));
        assert!(crossed_threshold(10.1, 10.0));
        assert!(!crossed_threshold(9.999, 10.0));
    }
}
