//! Simulation driver for Sprawl.
//!
//! [`Simulation`] owns the current category grid and advances it one
//! tick at a time with a [`TransitionRule`](sprawl_rule::TransitionRule).
//! Ticks are strictly sequential; each reads only the grid the previous
//! tick produced. Per-step layers flow to a [`DiagnosticSink`].
//!
//! # Quick start
//!
//! ```
//! use sprawl_core::{Category, Grid};
//! use sprawl_engine::{MemorySink, Simulation, SimulationConfig};
//!
//! let mut initial = Grid::filled(8, 8, Category::Agriculture).unwrap();
//! *initial.get_mut(4, 4).unwrap() = Category::Urban;
//!
//! let config = SimulationConfig { seed: 7, steps: 5, ..Default::default() };
//! let mut sim = Simulation::new(config, initial).unwrap();
//! let mut sink = MemorySink::new();
//! let summary = sim.run(&mut sink).unwrap();
//!
//! assert_eq!(summary.steps, 5);
//! assert_eq!(sink.grids().len(), 6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod metrics;
pub mod simulation;
pub mod sink;

pub use config::{ConfigError, SimulationConfig, DEFAULT_STEPS};
pub use hash::grid_hash;
pub use metrics::StepMetrics;
pub use simulation::{RunSummary, Simulation, StepReport};
pub use sink::{ChannelSink, DiagnosticSink, MemorySink, NullSink, SinkError, SinkEvent};
