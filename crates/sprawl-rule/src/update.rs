//! Simultaneous commit of resolved outcomes.

use sprawl_core::{CategoryGrid, Grid, GridError, Outcome};

/// Apply every cell's outcome to `previous`, producing the next grid.
///
/// `previous` is left untouched. Cells with [`Outcome::NoChange`] keep
/// their exact prior category.
pub fn commit(previous: &CategoryGrid, outcomes: &Grid<Outcome>) -> Result<CategoryGrid, GridError> {
    previous.zip_map(outcomes, |&category, &outcome| outcome.apply(category))
}
