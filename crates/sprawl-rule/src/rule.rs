//! The complete per-step transition rule.
//!
//! [`TransitionRule`] bundles the coefficient tables, growth rates, noise
//! amplitude, probability bound and neighbourhood window, and maps one
//! category grid to the next.
//!
//! Constructed via the builder pattern: [`TransitionRule::builder`].

use rayon::prelude::*;
use sprawl_core::{Category, CategoryGrid, Contest, Grid, Outcome, Target, TickId};
use sprawl_space::{EdgeBehavior, MooreWindow};

use crate::coefficients::{Coefficients, GrowthRates};
use crate::diagnostics::StepDiagnostics;
use crate::draws::{CellDraws, DrawSource};
use crate::probability::{transition_probability, ProbabilityBound, DEFAULT_NOISE_AMPLITUDE};
use crate::realize::realize;
use crate::resolve::resolve;
use crate::update::commit;

/// How cells are scheduled within a step.
///
/// Both modes produce bit-identical grids for the same draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// Evaluate cells on the calling thread in row-major order.
    #[default]
    Sequential,
    /// Evaluate rows concurrently on the rayon thread pool.
    Parallel,
}

/// Everything the rule computed for one cell in one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellEvaluation {
    /// Probability of converting to urban.
    pub p_urban: f64,
    /// Probability of converting to semi-urban.
    pub p_semi_urban: f64,
    /// The resolved decision.
    pub outcome: Outcome,
    /// Raw conflict-resolution layer value.
    pub contest: Contest,
}

impl CellEvaluation {
    const IDLE: Self = Self {
        p_urban: 0.0,
        p_semi_urban: 0.0,
        outcome: Outcome::NoChange,
        contest: Contest::Idle,
    };
}

/// A validated transition rule.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRule {
    coefficients: Coefficients,
    growth: GrowthRates,
    noise_amplitude: f64,
    bound: ProbabilityBound,
    window: MooreWindow,
    execution: Execution,
}

/// Builder for [`TransitionRule`].
///
/// Every setting has a default matching the reference Randstad rule set.
pub struct TransitionRuleBuilder {
    coefficients: Coefficients,
    growth: GrowthRates,
    noise_amplitude: f64,
    bound: ProbabilityBound,
    edge: EdgeBehavior,
    execution: Execution,
}

impl TransitionRule {
    /// Create a new builder for configuring a `TransitionRule`.
    pub fn builder() -> TransitionRuleBuilder {
        TransitionRuleBuilder {
            coefficients: Coefficients::reference(),
            growth: GrowthRates::reference(),
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            bound: ProbabilityBound::Unclamped,
            edge: EdgeBehavior::Absorb,
            execution: Execution::Sequential,
        }
    }

    /// The reference Randstad rule with default settings.
    pub fn reference() -> Self {
        Self {
            coefficients: Coefficients::reference(),
            growth: GrowthRates::reference(),
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            bound: ProbabilityBound::Unclamped,
            window: MooreWindow::new(EdgeBehavior::Absorb),
            execution: Execution::Sequential,
        }
    }

    /// Coefficient tables.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Baseline growth rates.
    pub fn growth_rates(&self) -> &GrowthRates {
        &self.growth
    }

    /// Upper bound of the noise term.
    pub fn noise_amplitude(&self) -> f64 {
        self.noise_amplitude
    }

    /// Probability bound.
    pub fn probability_bound(&self) -> ProbabilityBound {
        self.bound
    }

    /// Neighbourhood window.
    pub fn window(&self) -> MooreWindow {
        self.window
    }

    /// Scheduling mode.
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Return a copy scheduled with `execution`.
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Decide one cell from its category, neighbour counts and draws.
    pub fn evaluate_cell(
        &self,
        category: Category,
        urban_neighbours: u8,
        semi_urban_neighbours: u8,
        draws: &CellDraws,
    ) -> CellEvaluation {
        let noise = draws.noise * self.noise_amplitude;
        let p_urban = transition_probability(
            self.coefficients.urban.weight(category),
            urban_neighbours,
            noise,
            self.bound,
        );
        let p_semi_urban = transition_probability(
            self.coefficients.semi_urban.weight(category),
            semi_urban_neighbours,
            noise,
            self.bound,
        );
        let realization = realize(&self.growth, p_urban, p_semi_urban, draws);
        let (outcome, contest) = resolve(realization, p_urban, p_semi_urban);
        CellEvaluation {
            p_urban,
            p_semi_urban,
            outcome,
            contest,
        }
    }

    /// Evaluate every cell of `grid` for the step that produces `tick`.
    pub fn evaluate<D: DrawSource + ?Sized>(
        &self,
        grid: &CategoryGrid,
        draws: &D,
        tick: TickId,
    ) -> Grid<CellEvaluation> {
        let urban = grid.indicator(Target::Urban);
        let semi_urban = grid.indicator(Target::SemiUrban);
        let cols = grid.cols() as usize;
        let mut out = grid.map(|_| CellEvaluation::IDLE);

        let eval_row = |row: usize, slots: &mut [CellEvaluation]| {
            let mut urban_n = vec![0u8; cols];
            let mut semi_n = vec![0u8; cols];
            self.window.row_totals(&urban, row as u32, &mut urban_n);
            self.window.row_totals(&semi_urban, row as u32, &mut semi_n);
            let base = row * cols;
            for (col, slot) in slots.iter_mut().enumerate() {
                let index = base + col;
                let cell_draws = draws.cell_draws(tick, index);
                *slot = self.evaluate_cell(grid[index], urban_n[col], semi_n[col], &cell_draws);
            }
        };

        match self.execution {
            Execution::Sequential => out
                .cells_mut()
                .chunks_mut(cols)
                .enumerate()
                .for_each(|(row, slots)| eval_row(row, slots)),
            Execution::Parallel => out
                .cells_mut()
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(|(row, slots)| eval_row(row, slots)),
        }
        out
    }

    /// Produce the grid for `tick` from the grid of the previous tick.
    ///
    /// `grid` is not modified. The result depends only on `grid`, the
    /// rule, and the draws addressed at `tick`.
    pub fn step<D: DrawSource + ?Sized>(
        &self,
        grid: &CategoryGrid,
        draws: &D,
        tick: TickId,
    ) -> CategoryGrid {
        self.step_with_evaluations(grid, draws, tick).0
    }

    /// Like [`step`](Self::step), also returning the per-cell evaluations
    /// the next grid was committed from.
    pub fn step_with_evaluations<D: DrawSource + ?Sized>(
        &self,
        grid: &CategoryGrid,
        draws: &D,
        tick: TickId,
    ) -> (CategoryGrid, Grid<CellEvaluation>) {
        let evaluations = self.evaluate(grid, draws, tick);
        let outcomes = evaluations.map(|e| e.outcome);
        let next = commit(grid, &outcomes).expect("evaluation grid mirrors the input shape");
        (next, evaluations)
    }

    /// Like [`step`](Self::step), also returning every diagnostic layer.
    pub fn step_with_diagnostics<D: DrawSource + ?Sized>(
        &self,
        grid: &CategoryGrid,
        draws: &D,
        tick: TickId,
    ) -> StepDiagnostics {
        let (after, evaluations) = self.step_with_evaluations(grid, draws, tick);
        StepDiagnostics {
            tick,
            before: grid.clone(),
            urban_probability: evaluations.map(|e| e.p_urban),
            semi_urban_probability: evaluations.map(|e| e.p_semi_urban),
            contest: evaluations.map(|e| e.contest),
            converted: evaluations.map(|e| e.outcome.is_transition()),
            after,
        }
    }
}

impl Default for TransitionRule {
    fn default() -> Self {
        Self::reference()
    }
}

impl TransitionRuleBuilder {
    /// Set both coefficient tables (default: reference Randstad tables).
    pub fn coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Set the growth rates (default: reference Randstad rates).
    pub fn growth_rates(mut self, growth: GrowthRates) -> Self {
        self.growth = growth;
        self
    }

    /// Set the noise amplitude (default: 0.001). Must be finite and >= 0.
    ///
    /// The noise term for a cell is a uniform draw scaled by this value;
    /// 0 disables noise.
    pub fn noise_amplitude(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude;
        self
    }

    /// Set the probability bound (default: Unclamped).
    pub fn probability_bound(mut self, bound: ProbabilityBound) -> Self {
        self.bound = bound;
        self
    }

    /// Set the window edge behavior (default: Absorb).
    pub fn edge_behavior(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Set the scheduling mode (default: Sequential).
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Build the rule, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - any coefficient is outside `[0, 1]` or not finite
    /// - any growth rate is outside `[0, 1]` or not finite
    /// - `noise_amplitude` is negative or not finite
    pub fn build(self) -> Result<TransitionRule, String> {
        self.coefficients.validate()?;
        self.growth.validate()?;
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(format!(
                "noise_amplitude must be finite and >= 0, got {}",
                self.noise_amplitude
            ));
        }
        Ok(TransitionRule {
            coefficients: self.coefficients,
            growth: self.growth,
            noise_amplitude: self.noise_amplitude,
            bound: self.bound,
            window: MooreWindow::new(self.edge),
            execution: self.execution,
        })
    }
}
