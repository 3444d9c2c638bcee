// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Two-population driver loop: a background-driven source population whose
//! spikes are routed (with delay and weight) into a relay population.
//!
//! ```bash
//! cargo run --example background_drive
//! SYNFIRE_TRACE_EVENTS=1 SYNFIRE_TRACE_NEURON=0 \
//!     RUST_LOG=trace cargo run --example background_drive
//! ```

use synfire_event_engine::{CellGroup, LIFCellGroup};
use synfire_neural::models::LIFCell;
use synfire_neural::types::{CellAddress, SynapticEvent};

const POPULATION: u32 = 50;
const EPOCH_MS: f64 = 20.0;
const EPOCHS: u32 = 50;
const ROUTE_DELAY_MS: f64 = 1.5;
const ROUTE_WEIGHT: f64 = 250.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let source_cells = vec![
        LIFCell {
            n_poiss: 800,
            rate: 0.002,
            w_poiss: 15.0,
            d_poiss: 1.0,
            ..Default::default()
        };
        POPULATION as usize
    ];
    let relay_cells = vec![LIFCell::default(); POPULATION as usize];

    let mut source = LIFCellGroup::new(0, &source_cells)?;
    let mut relay = LIFCellGroup::new(POPULATION, &relay_cells)?;

    let mut routed: Vec<SynapticEvent> = Vec::new();
    let mut source_total = 0usize;
    let mut relay_total = 0usize;

    for epoch in 0..EPOCHS {
        let tfinal = f64::from(epoch + 1) * EPOCH_MS;

        // Deliver the previous epoch's routed spikes, then advance both
        // populations to the epoch boundary.
        relay.enqueue_events(&routed)?;
        routed.clear();

        source.advance(tfinal, 0.0);
        relay.advance(tfinal, 0.0);

        // Route each source spike onto the relay neuron with the same
        // local index.
        for spike in source.spikes() {
            let target = CellAddress::new(spike.source.gid() + POPULATION, 0);
            routed.push(SynapticEvent::new(
                target,
                spike.time + ROUTE_DELAY_MS,
                ROUTE_WEIGHT,
            ));
        }

        source_total += source.spikes().len();
        relay_total += relay.spikes().len();
        tracing::debug!(
            epoch,
            tfinal,
            source_spikes = source.spikes().len(),
            relay_spikes = relay.spikes().len(),
            "epoch complete"
        );
        source.clear_spikes();
        relay.clear_spikes();
    }

    tracing::info!(
        source_total,
        relay_total,
        background_events = source.stats().background_events_delivered,
        avg_events_per_epoch = source.stats().avg_events_per_advance(),
        "run complete"
    );

    Ok(())
}
