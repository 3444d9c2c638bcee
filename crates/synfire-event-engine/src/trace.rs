// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic per-event trace channel.
//!
//! Off by default. `SYNFIRE_TRACE_EVENTS=1` emits a `tracing::trace!` record
//! for every processed event; `SYNFIRE_TRACE_NEURON=<gid>` restricts it to
//! one neuron. Not part of the functional contract.

use std::sync::OnceLock;

use synfire_neural::types::SimTime;

use crate::merge::EventSource;

struct EventTraceCfg {
    enabled: bool,
    neuron_filter: Option<u32>,
}

fn event_trace_cfg() -> &'static EventTraceCfg {
    static CFG: OnceLock<EventTraceCfg> = OnceLock::new();
    CFG.get_or_init(|| {
        let enabled = std::env::var("SYNFIRE_TRACE_EVENTS")
            .ok()
            .as_deref()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let neuron_filter = std::env::var("SYNFIRE_TRACE_NEURON")
            .ok()
            .and_then(|v| v.parse().ok());

        EventTraceCfg {
            enabled,
            neuron_filter,
        }
    })
}

#[inline]
pub(crate) fn trace_event(gid: u32, time: SimTime, source: EventSource, voltage: f64) {
    let cfg = event_trace_cfg();
    if !cfg.enabled {
        return;
    }
    if cfg.neuron_filter.is_some_and(|filter| filter != gid) {
        return;
    }
    tracing::trace!(gid, time, ?source, voltage, "event applied");
}
