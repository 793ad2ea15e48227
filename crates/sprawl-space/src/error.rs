//! Error types for window queries.

use std::fmt;

/// Errors arising from spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending `(row, col)`.
        coord: (u32, u32),
        /// The grid shape `(rows, cols)`.
        shape: (u32, u32),
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, shape } => write!(
                f,
                "coordinate ({}, {}) out of bounds: [0, {}) x [0, {})",
                coord.0, coord.1, shape.0, shape.1
            ),
        }
    }
}

impl std::error::Error for SpaceError {}
