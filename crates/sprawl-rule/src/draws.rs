//! Addressable random draws.
//!
//! Each cell consumes five uniform variates per step: one for the noise
//! term and one per gate (growth and transition, for each target). A
//! [`DrawSource`] hands them out by `(tick, cell index)` instead of by
//! draw order, so the result of a step does not depend on which thread
//! evaluated which cell, or in what order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sprawl_core::TickId;

/// The five uniform variates in `[0, 1)` one cell consumes in one step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellDraws {
    /// Scaled by the noise amplitude to form the noise term.
    pub noise: f64,
    /// Compared against the urban growth rate.
    pub urban_growth: f64,
    /// Compared against the urban transition probability.
    pub urban_transition: f64,
    /// Compared against the semi-urban growth rate.
    pub semi_urban_growth: f64,
    /// Compared against the semi-urban transition probability.
    pub semi_urban_transition: f64,
}

impl CellDraws {
    /// Every variate set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            noise: value,
            urban_growth: value,
            urban_transition: value,
            semi_urban_growth: value,
            semi_urban_transition: value,
        }
    }
}

/// A source of per-cell random variates.
///
/// Implementations must be pure functions of `(tick, cell)`: asking twice
/// for the same address returns the same draws.
pub trait DrawSource: Send + Sync {
    /// Draws for cell `cell` (row-major flat index) at `tick`.
    fn cell_draws(&self, tick: TickId, cell: usize) -> CellDraws;
}

impl<D: DrawSource + ?Sized> DrawSource for &D {
    fn cell_draws(&self, tick: TickId, cell: usize) -> CellDraws {
        (**self).cell_draws(tick, cell)
    }
}

impl<D: DrawSource + ?Sized> DrawSource for Box<D> {
    fn cell_draws(&self, tick: TickId, cell: usize) -> CellDraws {
        (**self).cell_draws(tick, cell)
    }
}

/// ChaCha8 keystream words consumed per cell: five `f64` draws of two words each.
const WORDS_PER_CELL: u128 = 10;

/// Seeded, counter-addressed draws backed by ChaCha8.
///
/// The seed keys the cipher, the tick selects the stream, and the cell
/// index selects the word position within that stream. Draws for any
/// cell can be produced independently of every other cell.
#[derive(Clone, Debug)]
pub struct ChaChaDraws {
    seed: u64,
    base: ChaCha8Rng,
}

impl ChaChaDraws {
    /// Create a draw source for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            base: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DrawSource for ChaChaDraws {
    fn cell_draws(&self, tick: TickId, cell: usize) -> CellDraws {
        let mut rng = self.base.clone();
        rng.set_stream(tick.0);
        rng.set_word_pos(cell as u128 * WORDS_PER_CELL);
        CellDraws {
            noise: rng.random(),
            urban_growth: rng.random(),
            urban_transition: rng.random(),
            semi_urban_growth: rng.random(),
            semi_urban_transition: rng.random(),
        }
    }
}
