//! The step loop.
//!
//! [`Simulation`] owns the current grid and replaces it wholesale each
//! tick. All mutating methods take `&mut self`; nothing is shared with
//! background threads except what a [`DiagnosticSink`] chooses to send.

use std::time::Instant;

use sprawl_core::{CategoryGrid, Contest, TickId};
use sprawl_rule::{ChaChaDraws, StepDiagnostics};
use tracing::{debug, info, info_span};

use crate::config::{ConfigError, SimulationConfig};
use crate::hash::grid_hash;
use crate::metrics::StepMetrics;
use crate::sink::{DiagnosticSink, SinkError};

// ── StepReport ─────────────────────────────────────────────────────

/// Result of one [`Simulation::step()`] call.
#[derive(Clone, Debug)]
pub struct StepReport {
    /// The tick just produced.
    pub tick: TickId,
    /// Counts and timing for this step.
    pub metrics: StepMetrics,
    /// Every intermediate layer, when diagnostics are enabled.
    pub diagnostics: Option<StepDiagnostics>,
}

/// Totals over one [`Simulation::run()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps executed.
    pub steps: u64,
    /// Tick of the final grid.
    pub final_tick: TickId,
    /// [`grid_hash`] of the final grid.
    pub final_hash: u64,
    /// Sum of [`StepMetrics::converted`] over the run.
    pub converted: usize,
    /// Sum of [`StepMetrics::to_urban`] over the run.
    pub to_urban: usize,
    /// Sum of [`StepMetrics::to_semi_urban`] over the run.
    pub to_semi_urban: usize,
    /// Wall-clock time for the run, in microseconds.
    pub elapsed_us: u64,
}

// ── Simulation ─────────────────────────────────────────────────────

/// A land-use map advancing under one transition rule.
///
/// Created from a [`SimulationConfig`] and an initial grid via
/// [`new()`](Simulation::new). The draw source is keyed by the seed, so
/// two simulations with the same config and initial grid produce the
/// same sequence of grids whatever their execution mode.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    initial: CategoryGrid,
    grid: CategoryGrid,
    draws: ChaChaDraws,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config` against `initial` and return a simulation at tick 0.
    pub fn new(config: SimulationConfig, initial: CategoryGrid) -> Result<Self, ConfigError> {
        config.validate(&initial)?;
        let draws = ChaChaDraws::new(config.seed);
        Ok(Self {
            grid: initial.clone(),
            initial,
            draws,
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
            config,
        })
    }

    /// Advance one tick.
    ///
    /// Infallible: every input was validated at construction.
    pub fn step(&mut self) -> StepReport {
        let start = Instant::now();
        let tick = self.tick.next();
        let rule = &self.config.rule;

        let (next, diagnostics, converted, contested) = if self.config.record_diagnostics {
            let diag = rule.step_with_diagnostics(&self.grid, &self.draws, tick);
            let converted = diag.converted_count();
            let contested = diag.contested_count();
            (diag.after.clone(), Some(diag), converted, contested)
        } else {
            let (next, evaluations) = rule.step_with_evaluations(&self.grid, &self.draws, tick);
            let converted = evaluations.count(|e| e.outcome.is_transition());
            let contested =
                evaluations.count(|e| matches!(e.contest, Contest::Urban | Contest::SemiUrban));
            (next, None, converted, contested)
        };

        let mut metrics = StepMetrics::tally(&self.grid, &next, converted, contested);
        metrics.total_us = start.elapsed().as_micros() as u64;
        debug!(
            tick = tick.0,
            converted = metrics.converted,
            to_urban = metrics.to_urban,
            to_semi_urban = metrics.to_semi_urban,
            contested = metrics.contested,
            total_us = metrics.total_us,
            "step"
        );

        self.grid = next;
        self.tick = tick;
        self.last_metrics = metrics.clone();
        StepReport {
            tick,
            metrics,
            diagnostics,
        }
    }

    /// Run `config.steps` ticks from the current state, feeding `sink`.
    ///
    /// The sink first receives the current grid, then for every step its
    /// diagnostics (if enabled) followed by the new grid.
    ///
    /// # Errors
    ///
    /// Stops at the first [`SinkError`]; the simulation keeps the state
    /// reached by the last completed step.
    pub fn run(&mut self, sink: &mut dyn DiagnosticSink) -> Result<RunSummary, SinkError> {
        let span = info_span!("run", seed = self.seed(), steps = self.config.steps);
        let _guard = span.enter();
        let start = Instant::now();
        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            from_tick = self.tick.0,
            diagnostics = self.config.record_diagnostics,
            "simulation started"
        );

        sink.record_grid(self.tick, &self.grid)?;
        let mut summary = RunSummary {
            steps: 0,
            final_tick: self.tick,
            final_hash: 0,
            converted: 0,
            to_urban: 0,
            to_semi_urban: 0,
            elapsed_us: 0,
        };
        for _ in 0..self.config.steps {
            let report = self.step();
            if let Some(diag) = &report.diagnostics {
                sink.record(diag)?;
            }
            sink.record_grid(report.tick, &self.grid)?;
            summary.steps += 1;
            summary.converted += report.metrics.converted;
            summary.to_urban += report.metrics.to_urban;
            summary.to_semi_urban += report.metrics.to_semi_urban;
        }

        summary.final_tick = self.tick;
        summary.final_hash = grid_hash(&self.grid);
        summary.elapsed_us = start.elapsed().as_micros() as u64;
        info!(
            final_tick = summary.final_tick.0,
            to_urban = summary.to_urban,
            to_semi_urban = summary.to_semi_urban,
            hash = %format!("{:016x}", summary.final_hash),
            elapsed_us = summary.elapsed_us,
            "simulation finished"
        );
        Ok(summary)
    }

    /// Return to the initial grid at tick 0 with a new seed.
    pub fn reset(&mut self, seed: u64) -> &CategoryGrid {
        self.config.seed = seed;
        self.draws = ChaChaDraws::new(seed);
        self.grid = self.initial.clone();
        self.tick = TickId::default();
        self.last_metrics = StepMetrics::default();
        &self.grid
    }

    /// The current grid.
    pub fn grid(&self) -> &CategoryGrid {
        &self.grid
    }

    /// The grid the simulation started from.
    pub fn initial(&self) -> &CategoryGrid {
        &self.initial
    }

    /// Current tick (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The current seed.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, NullSink};
    use sprawl_core::{Category, Grid};

    fn seeded_grid() -> CategoryGrid {
        Grid::from_fn(6, 6, |r, c| {
            if (r, c) == (3, 3) {
                Category::Urban
            } else if r == 0 {
                Category::Sea
            } else {
                Category::Agriculture
            }
        })
        .unwrap()
    }

    fn config(seed: u64, steps: u64, record_diagnostics: bool) -> SimulationConfig {
        SimulationConfig {
            seed,
            steps,
            record_diagnostics,
            ..Default::default()
        }
    }

    #[test]
    fn new_starts_at_tick_zero() {
        let sim = Simulation::new(config(1, 3, false), seeded_grid()).unwrap();
        assert_eq!(sim.current_tick(), TickId(0));
        assert_eq!(sim.grid(), sim.initial());
        assert_eq!(sim.seed(), 1);
    }

    #[test]
    fn new_rejects_zero_steps() {
        let err = Simulation::new(config(1, 0, false), seeded_grid()).unwrap_err();
        assert_eq!(err, ConfigError::ZeroSteps);
    }

    #[test]
    fn step_advances_tick() {
        let mut sim = Simulation::new(config(1, 3, false), seeded_grid()).unwrap();
        let report = sim.step();
        assert_eq!(report.tick, TickId(1));
        assert!(report.diagnostics.is_none());
        assert_eq!(sim.current_tick(), TickId(1));
        assert_eq!(sim.last_metrics(), &report.metrics);
    }

    #[test]
    fn diagnostics_match_plain_step() {
        let mut plain = Simulation::new(config(9, 5, false), seeded_grid()).unwrap();
        let mut diag = Simulation::new(config(9, 5, true), seeded_grid()).unwrap();
        for _ in 0..5 {
            let a = plain.step();
            let b = diag.step();
            let layers = b.diagnostics.expect("diagnostics enabled");
            assert_eq!(&layers.after, diag.grid());
            assert_eq!(plain.grid(), diag.grid());
            assert_eq!(a.metrics.converted, b.metrics.converted);
            assert_eq!(a.metrics.contested, b.metrics.contested);
            assert_eq!(a.metrics.to_urban, layers.gained(Category::Urban));
        }
    }

    #[test]
    fn run_executes_configured_steps() {
        let mut sim = Simulation::new(config(4, 7, false), seeded_grid()).unwrap();
        let summary = sim.run(&mut NullSink).unwrap();
        assert_eq!(summary.steps, 7);
        assert_eq!(summary.final_tick, TickId(7));
        assert_eq!(summary.final_hash, grid_hash(sim.grid()));
    }

    #[test]
    fn run_records_initial_and_every_step() {
        let mut sim = Simulation::new(config(4, 3, true), seeded_grid()).unwrap();
        let mut sink = MemorySink::new();
        sim.run(&mut sink).unwrap();
        assert_eq!(sink.grids().len(), 4);
        assert_eq!(sink.diagnostics().len(), 3);
        assert_eq!(sink.grids()[0].1, seeded_grid());
        for (i, diag) in sink.diagnostics().iter().enumerate() {
            assert_eq!(diag.tick, TickId(i as u64 + 1));
            assert_eq!(diag.before, sink.grids()[i].1);
            assert_eq!(diag.after, sink.grids()[i + 1].1);
        }
    }

    #[test]
    fn reset_replays_identically() {
        let mut sim = Simulation::new(config(21, 10, false), seeded_grid()).unwrap();
        let first = sim.run(&mut NullSink).unwrap();
        let grid = sim.reset(21).clone();
        assert_eq!(grid, seeded_grid());
        assert_eq!(sim.current_tick(), TickId(0));
        let second = sim.run(&mut NullSink).unwrap();
        assert_eq!(first.final_hash, second.final_hash);
    }

    #[test]
    fn reset_with_new_seed_changes_seed() {
        let mut sim = Simulation::new(config(21, 1, false), seeded_grid()).unwrap();
        sim.step();
        sim.reset(22);
        assert_eq!(sim.seed(), 22);
        assert_eq!(sim.config().seed, 22);
    }
}
