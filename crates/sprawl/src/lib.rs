//! Sprawl: a stochastic cellular automaton for urban and semi-urban growth.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sprawl sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use sprawl::prelude::*;
//!
//! let map = "\
//! ncols 4
//! nrows 4
//! xllcorner 0
//! yllcorner 0
//! cellsize 100
//! 5 5 5 5
//! 5 2 3 5
//! 5 5 5 6
//! 7 7 6 6
//! ";
//! let raw = read_ascii_grid(map.as_bytes()).unwrap();
//! let initial = load_categories(&raw, &LookupTable::identity(), None).unwrap();
//!
//! let config = SimulationConfig { seed: 42, ..Default::default() };
//! let mut sim = Simulation::new(config, initial).unwrap();
//! let summary = sim.run(&mut NullSink).unwrap();
//! assert_eq!(summary.final_tick, TickId(20));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sprawl-core` | Categories, outcomes, grids, tick IDs |
//! | [`space`] | `sprawl-space` | Moore window neighbour counting |
//! | [`rule`] | `sprawl-rule` | Coefficients, draws, the transition rule |
//! | [`raster`] | `sprawl-raster` | ASCII grid I/O and lookup tables |
//! | [`engine`] | `sprawl-engine` | Simulation driver and sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`sprawl-core`).
pub use sprawl_core as types;

/// Neighbourhood aggregation (`sprawl-space`).
pub use sprawl_space as space;

/// The transition rule (`sprawl-rule`).
///
/// Build one with [`rule::TransitionRule::builder`] or take the reference
/// Randstad calibration from [`rule::TransitionRule::reference`].
pub use sprawl_rule as rule;

/// Raster input and output (`sprawl-raster`).
pub use sprawl_raster as raster;

/// Simulation driver (`sprawl-engine`).
pub use sprawl_engine as engine;

/// Common imports for typical Sprawl usage.
pub mod prelude {
    // Core types
    pub use sprawl_core::{Category, CategoryGrid, Contest, Grid, Outcome, Target, TickId};

    // Space
    pub use sprawl_space::{EdgeBehavior, MooreWindow};

    // Rule
    pub use sprawl_rule::{
        ChaChaDraws, Coefficients, DrawSource, Execution, GrowthRates, ProbabilityBound,
        StepDiagnostics, TransitionRule,
    };

    // Raster
    pub use sprawl_raster::{
        load_categories, read_ascii_grid, write_ascii_grid, LookupTable, RasterError,
        RasterHeader,
    };

    // Engine
    pub use sprawl_engine::{
        DiagnosticSink, MemorySink, NullSink, Simulation, SimulationConfig, StepMetrics,
    };
}
