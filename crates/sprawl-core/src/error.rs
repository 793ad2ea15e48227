//! Error types shared across the Sprawl workspace.
//!
//! The per-step transition function is infallible; everything here is
//! raised while loading or constructing inputs, before the step loop.

use std::error::Error;
use std::fmt;

/// Errors from mapping raw values onto the eight defined categories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryError {
    /// A numeric code outside 1–8.
    UnknownCode {
        /// The offending code.
        code: i64,
    },
    /// A category name that matches none of the eight classes.
    UnknownName {
        /// The offending name.
        name: String,
    },
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCode { code } => write!(f, "unknown category code {code}"),
            Self::UnknownName { name } => write!(f, "unknown category name '{name}'"),
        }
    }
}

impl Error for CategoryError {}

/// Errors from grid construction and shape checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns is zero.
    EmptyShape,
    /// `rows * cols` does not fit in `usize`.
    DimensionTooLarge {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
    /// The backing buffer does not hold `rows * cols` cells.
    LengthMismatch {
        /// Cells required by the shape.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },
    /// Two grids that must share a shape do not.
    ShapeMismatch {
        /// The reference shape `(rows, cols)`.
        expected: (u32, u32),
        /// The shape encountered.
        found: (u32, u32),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { rows, cols } => {
                write!(f, "grid shape {rows}x{cols} is too large")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "grid needs {expected} cells, got {found}")
            }
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "grid shape {}x{} does not match expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for GridError {}
