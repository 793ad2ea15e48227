//! Error types for raster loading and writing.

use std::fmt;
use std::io;

use sprawl_core::GridError;

/// Errors that can occur while reading, mapping or writing rasters.
///
/// All of these are raised before the first simulation step.
#[derive(Debug)]
pub enum RasterError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The header is missing a required key or has an unparsable value.
    MalformedHeader {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A cell token is not an integer.
    MalformedCell {
        /// Row of the offending cell.
        row: u32,
        /// Column of the offending cell.
        col: u32,
        /// The token as read.
        token: String,
    },
    /// The body holds a different number of cells than the header declares.
    CellCount {
        /// `nrows * ncols` from the header.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },
    /// A cell holds the NODATA value; every cell must carry a category.
    NoData {
        /// Row of the offending cell.
        row: u32,
        /// Column of the offending cell.
        col: u32,
    },
    /// A raw code has no entry in the lookup table.
    UnmappedCode {
        /// The raw code.
        code: i64,
        /// Row of the first cell holding it.
        row: u32,
        /// Column of the first cell holding it.
        col: u32,
    },
    /// The raster shape differs from the shape the caller expects.
    ShapeMismatch {
        /// Expected `(rows, cols)`.
        expected: (u32, u32),
        /// Shape found in the raster.
        found: (u32, u32),
    },
    /// A lookup-table line could not be parsed.
    MalformedTable {
        /// 1-based line number.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedHeader { detail } => write!(f, "malformed raster header: {detail}"),
            Self::MalformedCell { row, col, token } => {
                write!(f, "cell ({row}, {col}) is not an integer: '{token}'")
            }
            Self::CellCount { expected, found } => {
                write!(f, "raster declares {expected} cells but holds {found}")
            }
            Self::NoData { row, col } => write!(f, "cell ({row}, {col}) holds NODATA"),
            Self::UnmappedCode { code, row, col } => write!(
                f,
                "code {code} at cell ({row}, {col}) has no entry in the lookup table"
            ),
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "raster is {}x{} but {}x{} was expected",
                found.0, found.1, expected.0, expected.1
            ),
            Self::MalformedTable { line, detail } => {
                write!(f, "lookup table line {line}: {detail}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RasterError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for RasterError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
