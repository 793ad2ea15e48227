//! Per-step diagnostic layers.

use sprawl_core::{Category, CategoryGrid, Contest, Grid, TickId};

/// Every intermediate layer of one step, for reporting.
///
/// `before` and `after` are kept as separate grids so the pre-update and
/// post-update states of the same step can both be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct StepDiagnostics {
    /// The tick this step produced.
    pub tick: TickId,
    /// Category grid the step read.
    pub before: CategoryGrid,
    /// Probability of conversion to urban, per cell.
    pub urban_probability: Grid<f64>,
    /// Probability of conversion to semi-urban, per cell.
    pub semi_urban_probability: Grid<f64>,
    /// Raw conflict-resolution result, per cell.
    pub contest: Grid<Contest>,
    /// `true` where the resolver selected a transition.
    ///
    /// A cell already holding the selected category is still marked.
    pub converted: Grid<bool>,
    /// Category grid the step produced.
    pub after: CategoryGrid,
}

impl StepDiagnostics {
    /// Number of cells the resolver selected for a transition.
    pub fn converted_count(&self) -> usize {
        self.converted.count(|&c| c)
    }

    /// Number of cells whose category actually changed.
    pub fn changed_count(&self) -> usize {
        self.before
            .cells()
            .iter()
            .zip(self.after.cells())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Number of cells that became `category` this step.
    pub fn gained(&self, category: Category) -> usize {
        self.before
            .cells()
            .iter()
            .zip(self.after.cells())
            .filter(|&(&a, &b)| a != category && b == category)
            .count()
    }

    /// Number of cells where both targets were realized.
    pub fn contested_count(&self) -> usize {
        self.contest
            .count(|c| matches!(c, Contest::Urban | Contest::SemiUrban))
    }
}
