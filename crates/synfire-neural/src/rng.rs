// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Counter-based pseudo-random sampling
//!
//! Every draw is a pure function of an explicit (key, counter) pair, so the
//! full background-input history of any neuron can be recomputed without
//! replaying the simulation: the same sequence comes out regardless of call
//! interleaving, thread count, or how the network is partitioned into
//! groups. This is what makes bit-reproducible runs and stateless
//! checkpoint/replay possible.
//!
//! Keys are namespaced by a reserved stream tag per draw purpose, so a
//! (key, counter) pair can never collide across components even when they
//! sample for the same neuron.

/// Reserved stream tags.
///
/// One tag per draw purpose; tags are never reused. A component owns the
/// counters of its own stream and nothing else.
pub mod stream {
    /// Background Poisson input of a cell group.
    pub const BACKGROUND: u64 = 1;
}

/// splitmix64 finalizer. Full-avalanche 64-bit mix.
#[inline]
fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Derive the draw key for one neuron within one stream.
///
/// Distinct streams and distinct gids produce distinct keys by
/// construction; the golden-ratio multiplier spreads the tag across the
/// whole word before the gid is folded in.
#[inline]
pub fn stream_key(stream: u64, gid: u32) -> u64 {
    mix64(stream.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ u64::from(gid))
}

/// Draw key of a neuron's background-input stream.
#[inline]
pub fn background_key(gid: u32) -> u64 {
    stream_key(stream::BACKGROUND, gid)
}

/// Uniform draw in the open interval (0, 1).
///
/// Pure function of (key, counter). The open interval matters: the value is
/// fed to `ln`, so 0 and 1 must be unreachable.
#[inline]
pub fn uniform_f64(key: u64, counter: u64) -> f64 {
    let bits = mix64(key ^ mix64(counter.wrapping_add(0x2545_f491_4f6c_dd1d)));
    // Top 53 bits, offset by half a ulp into (0, 1).
    ((bits >> 11) as f64 + 0.5) * (1.0 / 9007199254740992.0)
}

/// Exponential inter-arrival interval with the given mean
/// (inverse-transform sampling of the Poisson process).
///
/// Returns a strictly positive, finite interval for any finite positive
/// mean; an infinite mean (disabled stream) yields an infinite interval.
#[inline]
pub fn poisson_interarrival(mean: f64, key: u64, counter: u64) -> f64 {
    -mean * uniform_f64(key, counter).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_counter_same_value() {
        let key = background_key(42);
        assert_eq!(uniform_f64(key, 7), uniform_f64(key, 7));
        assert_eq!(
            poisson_interarrival(2.0, key, 7),
            poisson_interarrival(2.0, key, 7)
        );
    }

    #[test]
    fn test_counters_give_distinct_values() {
        let key = background_key(0);
        let a = uniform_f64(key, 0);
        let b = uniform_f64(key, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_streams_are_separated() {
        // Same gid, different stream tag: different keys.
        assert_ne!(stream_key(1, 5), stream_key(2, 5));
        // Same stream, different gid: different keys.
        assert_ne!(background_key(5), background_key(6));
    }

    #[test]
    fn test_uniform_in_open_interval() {
        for gid in 0..16 {
            let key = background_key(gid);
            for counter in 0..1000 {
                let u = uniform_f64(key, counter);
                assert!(u > 0.0 && u < 1.0, "u = {u} out of (0, 1)");
            }
        }
    }

    #[test]
    fn test_interarrival_positive_finite() {
        let key = background_key(3);
        for counter in 0..1000 {
            let dt = poisson_interarrival(0.25, key, counter);
            assert!(dt > 0.0 && dt.is_finite());
        }
    }

    #[test]
    fn test_empirical_mean_matches_nominal() {
        // Deterministic draws, so this is a fixed arithmetic check, not a
        // flaky statistical one.
        let key = background_key(11);
        let n = 50_000u64;
        let mean = 2.0;
        let sum: f64 = (0..n).map(|c| poisson_interarrival(mean, key, c)).sum();
        let empirical = sum / n as f64;
        assert!(
            (empirical - mean).abs() < 0.05 * mean,
            "empirical mean {empirical} too far from {mean}"
        );
    }
}
