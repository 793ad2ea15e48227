//! Reusable grid and rule fixtures.
//!
//! - [`grid_from_codes`]: build a category grid from raw 1–8 codes.
//! - [`centred_grid`]: one category in the middle, another everywhere else.
//! - [`reference_landscape`]: a deterministic mixed landscape.
//! - [`zero_stimulus_rule`]: all coefficients, rates and noise at 0.
//! - [`isolated_rule`]: one urban coefficient and full urban growth.

use sprawl_core::{Category, CategoryGrid, Grid};
use sprawl_rule::{CoefficientTable, Coefficients, GrowthRates, TransitionRule};

/// Build a grid from canonical category codes.
///
/// # Panics
///
/// Panics on unknown codes or a length mismatch: fixtures are test-only.
pub fn grid_from_codes(rows: u32, cols: u32, codes: &[u8]) -> CategoryGrid {
    let cells = codes
        .iter()
        .map(|&c| Category::try_from(c).expect("fixture code must be 1-8"))
        .collect();
    Grid::from_vec(rows, cols, cells).expect("fixture shape must match codes")
}

/// A `size × size` grid with `centre` in the middle cell and `rest` elsewhere.
pub fn centred_grid(size: u32, centre: Category, rest: Category) -> CategoryGrid {
    let mid = size / 2;
    Grid::from_fn(size, size, |r, c| if r == mid && c == mid { centre } else { rest })
        .expect("fixture size must be non-zero")
}

/// A deterministic landscape using all eight categories.
pub fn reference_landscape(rows: u32, cols: u32) -> CategoryGrid {
    Grid::from_fn(rows, cols, |r, c| {
        let k = (r.wrapping_mul(2_654_435_761) ^ c.wrapping_mul(40_503)) % 16;
        match k {
            0 | 1 => Category::Urban,
            2 | 3 => Category::SemiUrban,
            4 => Category::Infrastructure,
            5 => Category::Recreation,
            6..=10 => Category::Agriculture,
            11 | 12 => Category::Nature,
            13 | 14 => Category::Water,
            _ => Category::Sea,
        }
    })
    .expect("fixture shape must be non-zero")
}

/// All coefficients, growth rates and noise set to 0.
pub fn zero_stimulus_rule() -> TransitionRule {
    TransitionRule::builder()
        .coefficients(Coefficients::default())
        .growth_rates(GrowthRates::default())
        .noise_amplitude(0.0)
        .build()
        .expect("zero rule is valid")
}

/// Only `source` contributes to urban transitions, with weight `weight`;
/// urban growth rate 1, semi-urban growth 0, no noise.
pub fn isolated_rule(source: Category, weight: f64) -> TransitionRule {
    TransitionRule::builder()
        .coefficients(Coefficients {
            urban: CoefficientTable::zeros().with(source, weight),
            semi_urban: CoefficientTable::zeros(),
        })
        .growth_rates(GrowthRates {
            urban: 1.0,
            semi_urban: 0.0,
        })
        .noise_amplitude(0.0)
        .build()
        .expect("isolated rule is valid")
}
