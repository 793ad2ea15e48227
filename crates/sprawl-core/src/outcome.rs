//! Per-cell transition outcomes.

use crate::category::{Category, Target};

/// The resolved decision for one cell in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The cell becomes urban.
    ToUrban,
    /// The cell becomes semi-urban.
    ToSemiUrban,
    /// The cell keeps its previous category.
    NoChange,
}

impl Outcome {
    /// The outcome that selects `target`.
    pub fn to(target: Target) -> Self {
        match target {
            Target::Urban => Self::ToUrban,
            Target::SemiUrban => Self::ToSemiUrban,
        }
    }

    /// The category the cell holds after committing this outcome.
    pub fn apply(self, previous: Category) -> Category {
        match self {
            Self::ToUrban => Category::Urban,
            Self::ToSemiUrban => Category::SemiUrban,
            Self::NoChange => previous,
        }
    }

    /// Returns `true` unless this is [`Outcome::NoChange`].
    pub fn is_transition(self) -> bool {
        self != Self::NoChange
    }
}

/// Raw conflict-resolution result, reported as a diagnostic layer.
///
/// Distinguishes cells where both targets were realized (and which one
/// won) from cells where only one target fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Contest {
    /// Both targets realized; urban had the strictly higher probability.
    Urban,
    /// Both targets realized; semi-urban won or tied.
    SemiUrban,
    /// Exactly one target realized, no contest needed.
    Unresolved,
    /// Neither target realized.
    Idle,
}

impl Contest {
    /// Stable numeric code used when writing the layer to a raster.
    pub fn code(self) -> u8 {
        match self {
            Self::Urban => 2,
            Self::SemiUrban => 3,
            Self::Unresolved => 99,
            Self::Idle => 100,
        }
    }
}
