// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Workspace-level determinism suite: identical networks produce identical
//! spike trains regardless of group partitioning or repetition, driven
//! entirely through the public prelude.

use synfire::prelude::*;

fn background_cell() -> LIFCell {
    LIFCell {
        n_poiss: 800,
        rate: 0.002,
        w_poiss: 15.0,
        d_poiss: 1.0,
        ..Default::default()
    }
}

/// Spikes sorted into a canonical (gid, time) order so that different group
/// decompositions can be compared.
fn canonical(spikes: &[Spike]) -> Vec<(u32, f64)> {
    let mut out: Vec<(u32, f64)> = spikes.iter().map(|s| (s.source.gid(), s.time)).collect();
    out.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
    out
}

fn run_epochs(group: &mut LIFCellGroup, epoch: f64, epochs: u32) -> Vec<Spike> {
    let mut all = Vec::new();
    for k in 0..epochs {
        group.advance(f64::from(k + 1) * epoch, 0.1);
        all.extend_from_slice(group.spikes());
        group.clear_spikes();
    }
    all
}

#[test]
fn test_partitioning_does_not_change_spikes() {
    let cells = vec![background_cell(); 8];

    // One group owning [0, 8).
    let mut whole = LIFCellGroup::new(0, &cells).unwrap();
    let whole_spikes = run_epochs(&mut whole, 25.0, 20);

    // The same neurons split into [0, 4) and [4, 8).
    let mut left = LIFCellGroup::new(0, &cells[..4]).unwrap();
    let mut right = LIFCellGroup::new(4, &cells[4..]).unwrap();
    let mut split_spikes = run_epochs(&mut left, 25.0, 20);
    split_spikes.extend(run_epochs(&mut right, 25.0, 20));

    assert!(!whole_spikes.is_empty());
    assert_eq!(canonical(&whole_spikes), canonical(&split_spikes));
}

#[test]
fn test_repeated_runs_are_identical() {
    let cells = vec![background_cell(); 6];
    let batch = vec![
        SynapticEvent::new(CellAddress::new(2, 0), 3.0, 40.0),
        SynapticEvent::new(CellAddress::new(5, 0), 3.0, 40.0),
    ];

    let run = || {
        let mut group = LIFCellGroup::new(0, &cells).unwrap();
        group.enqueue_events(&batch).unwrap();
        run_epochs(&mut group, 50.0, 10)
    };

    let first = run();
    let second = run();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_external_and_background_input_interleave() {
    // One strongly driven external event early on must not disturb the
    // background stream: the tail of the run matches a purely
    // background-driven cell after its own refractory handling.
    let cells = vec![background_cell(); 1];

    let mut driven = LIFCellGroup::new(0, &cells).unwrap();
    driven
        .enqueue_events(&[SynapticEvent::new(CellAddress::new(0, 0), 0.5, 300.0)])
        .unwrap();
    driven.advance(400.0, 0.1);

    let mut plain = LIFCellGroup::new(0, &cells).unwrap();
    plain.advance(400.0, 0.1);

    // Both consumed the identical background draw sequence: every arrival
    // before the horizon is consumed exactly once, delivered or discarded.
    assert_eq!(
        driven.stats().background_events_delivered + driven.stats().events_discarded,
        plain.stats().background_events_delivered + plain.stats().events_discarded
    );
    assert_eq!(driven.stats().queue_events_delivered, 1);
    // The driven cell spiked at the external event.
    assert_eq!(driven.spikes().first().map(|s| s.time), Some(0.5));
}

#[test]
fn test_umbrella_exports() {
    assert!(!synfire::VERSION.is_empty());
    let group = LIFCellGroup::new(0, &[LIFCell::default()]).unwrap();
    assert_eq!(group.cell_kind(), CellKind::Lif);
    assert_eq!(group.num_cells(), 1);
    assert_eq!(group.first_gid(), 0);
}
