//! Benchmark profiles for the Sprawl simulation.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), reference rule
//! - [`stress_profile`]: 316x316 grid (~100K cells), parallel execution
//! - [`landscape`]: deterministic mixed land-use map

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sprawl_core::{Category, CategoryGrid, Grid};
use sprawl_engine::SimulationConfig;
use sprawl_rule::{Execution, TransitionRule};

/// Reference benchmark profile: 100x100 grid, sequential reference rule.
pub fn reference_profile(seed: u64) -> (SimulationConfig, CategoryGrid) {
    let config = SimulationConfig {
        seed,
        ..Default::default()
    };
    (config, landscape(100, 100, seed))
}

/// Stress benchmark profile: 316x316 grid, rows evaluated in parallel.
pub fn stress_profile(seed: u64) -> (SimulationConfig, CategoryGrid) {
    let config = SimulationConfig {
        rule: TransitionRule::reference().with_execution(Execution::Parallel),
        seed,
        ..Default::default()
    };
    (config, landscape(316, 316, seed))
}

/// A deterministic landscape shaped loosely like a delta region: sea
/// along the top rows, water channels, a few urban cores with a
/// semi-urban fringe, and agriculture or nature elsewhere.
///
/// # Panics
///
/// Panics if `rows` or `cols` is zero.
pub fn landscape(rows: u32, cols: u32, seed: u64) -> CategoryGrid {
    let cores: Vec<(i64, i64)> = (0..4u64)
        .map(|i| {
            let h = seed.wrapping_add(i).wrapping_mul(6364136223846793007);
            let r = (h >> 33) % u64::from(rows);
            let c = (h >> 13) % u64::from(cols);
            (r as i64, c as i64)
        })
        .collect();

    Grid::from_fn(rows, cols, |r, c| {
        let (ri, ci) = (i64::from(r), i64::from(c));
        let near = cores
            .iter()
            .map(|&(cr, cc)| (cr - ri).abs().max((cc - ci).abs()))
            .min()
            .unwrap_or(i64::MAX);
        if r < rows / 20 {
            Category::Sea
        } else if near <= 1 {
            Category::Urban
        } else if near <= 3 {
            Category::SemiUrban
        } else if c % 29 == 7 {
            Category::Water
        } else if r % 31 == 11 {
            Category::Infrastructure
        } else if (r / 8 + c / 8) % 5 == 0 {
            Category::Nature
        } else if (r / 8 + c / 8) % 7 == 1 {
            Category::Recreation
        } else {
            Category::Agriculture
        }
    })
    .expect("benchmark grid shape must be non-zero")
}
