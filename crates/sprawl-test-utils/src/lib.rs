//! Test utilities and fixtures for Sprawl development.
//!
//! Provides forced [`DrawSource`] implementations ([`FixedDraws`],
//! [`ScriptedDraws`]) and grid/rule fixtures for building test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use sprawl_core::TickId;
use sprawl_rule::{CellDraws, DrawSource};

pub use fixtures::{
    centred_grid, grid_from_codes, isolated_rule, reference_landscape, zero_stimulus_rule,
};

/// Hands every cell, at every tick, the same draws.
///
/// `FixedDraws::zeros()` passes every gate whose threshold is positive
/// and contributes no noise.
#[derive(Clone, Copy, Debug)]
pub struct FixedDraws(pub CellDraws);

impl FixedDraws {
    pub fn zeros() -> Self {
        Self(CellDraws::uniform(0.0))
    }

    /// Draws just below 1: fails every gate with a threshold below 1.
    pub fn near_one() -> Self {
        Self(CellDraws::uniform(1.0 - f64::EPSILON))
    }
}

impl DrawSource for FixedDraws {
    fn cell_draws(&self, _tick: TickId, _cell: usize) -> CellDraws {
        self.0
    }
}

/// Per-cell scripted draws with a fallback for unscripted cells.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    cells: HashMap<usize, CellDraws>,
    fallback: CellDraws,
}

impl ScriptedDraws {
    pub fn new(fallback: CellDraws) -> Self {
        Self {
            cells: HashMap::new(),
            fallback,
        }
    }

    /// Script the draws for one cell (all ticks).
    pub fn set(mut self, cell: usize, draws: CellDraws) -> Self {
        self.cells.insert(cell, draws);
        self
    }
}

impl DrawSource for ScriptedDraws {
    fn cell_draws(&self, _tick: TickId, cell: usize) -> CellDraws {
        self.cells.get(&cell).copied().unwrap_or(self.fallback)
    }
}
