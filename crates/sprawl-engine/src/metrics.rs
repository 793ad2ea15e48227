//! Per-step metrics.

use sprawl_core::{Category, CategoryGrid};

/// Counts and timing collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
    /// Cells the resolver selected for a transition.
    pub converted: usize,
    /// Cells that became urban.
    pub to_urban: usize,
    /// Cells that became semi-urban.
    pub to_semi_urban: usize,
    /// Cells where both targets were realized.
    pub contested: usize,
}

impl StepMetrics {
    /// Fill in the category gains from the grids on either side of a step.
    pub(crate) fn tally(
        before: &CategoryGrid,
        after: &CategoryGrid,
        converted: usize,
        contested: usize,
    ) -> Self {
        let mut to_urban = 0;
        let mut to_semi_urban = 0;
        for (&b, &a) in before.cells().iter().zip(after.cells()) {
            if b == a {
                continue;
            }
            match a {
                Category::Urban => to_urban += 1,
                Category::SemiUrban => to_semi_urban += 1,
                _ => {}
            }
        }
        Self {
            total_us: 0,
            converted,
            to_urban,
            to_semi_urban,
            contested,
        }
    }

    /// Cells whose category changed.
    pub fn changed(&self) -> usize {
        self.to_urban + self.to_semi_urban
    }
}
