// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Identity types for neurons and connection endpoints

use core::fmt;

use serde::{Deserialize, Serialize};

/// Neuron ID (globally unique across the entire simulation)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NeuronId(pub u32);

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron({})", self.0)
    }
}

/// Address of a connection endpoint: a neuron plus a port index on it.
///
/// Point neurons expose a single port (0); the port exists so that routing
/// tables can address multi-compartment kinds through the same type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CellAddress {
    pub neuron: NeuronId,
    pub port: u32,
}

impl CellAddress {
    pub fn new(gid: u32, port: u32) -> Self {
        Self {
            neuron: NeuronId(gid),
            port,
        }
    }

    pub fn gid(&self) -> u32 {
        self.neuron.0
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.neuron, self.port)
    }
}
