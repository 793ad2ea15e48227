//! ESRI ASCII grid reader.
//!
//! [`read_ascii_grid`] reads from any `Read` source, so tests can pass
//! `&[u8]` and the CLI a `BufReader<File>`. Header keys are matched
//! case-insensitively; the body is any whitespace-separated run of
//! integers in row-major order, top row first.

use std::io::Read;

use sprawl_core::Grid;

use crate::error::RasterError;
use crate::header::{HeaderKeys, RasterHeader};

/// A raster as read from disk: header plus raw integer codes.
///
/// Codes are not yet mapped to categories; see
/// [`load_categories`](crate::load_categories).
#[derive(Clone, Debug, PartialEq)]
pub struct RawRaster {
    header: RasterHeader,
    values: Grid<i64>,
}

impl RawRaster {
    /// Wrap an in-memory grid of raw codes with a unit header.
    pub fn from_grid(values: Grid<i64>, nodata: Option<i64>) -> Self {
        let (rows, cols) = values.shape();
        Self {
            header: RasterHeader::unit(rows, cols).with_nodata(nodata),
            values,
        }
    }

    /// The parsed header.
    pub fn header(&self) -> &RasterHeader {
        &self.header
    }

    /// The raw codes, row-major.
    pub fn values(&self) -> &Grid<i64> {
        &self.values
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        self.values.shape()
    }

    /// Split into header and values.
    pub fn into_parts(self) -> (RasterHeader, Grid<i64>) {
        (self.header, self.values)
    }
}

/// Read an ESRI ASCII grid.
///
/// # Errors
///
/// [`RasterError::Io`] on read failure, [`RasterError::MalformedHeader`]
/// when a required key is missing or unparsable,
/// [`RasterError::CellCount`] when the body does not hold exactly
/// `nrows * ncols` tokens, and [`RasterError::MalformedCell`] for the
/// first non-integer token.
///
/// # Examples
///
/// ```
/// use sprawl_raster::read_ascii_grid;
///
/// let text = "ncols 2\nnrows 1\nxllcorner 0\nyllcorner 0\ncellsize 100\n5 2\n";
/// let raster = read_ascii_grid(text.as_bytes()).unwrap();
/// assert_eq!(raster.shape(), (1, 2));
/// assert_eq!(raster.values().cells(), &[5, 2]);
/// ```
pub fn read_ascii_grid<R: Read>(mut reader: R) -> Result<RawRaster, RasterError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let lines: Vec<&str> = text.lines().collect();
    let mut header = RasterHeader::unit(1, 1);
    let mut seen = HeaderKeys::default();
    let mut body_start = lines.len();
    for (i, line) in lines.iter().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(key) = parts.next() else {
            continue;
        };
        let value = parts.next().unwrap_or("");
        if !header.apply(&mut seen, key, value)? {
            body_start = i;
            break;
        }
    }
    seen.check()?;

    let tokens: Vec<&str> = lines[body_start..]
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect();
    let expected = header.cell_count();
    if tokens.len() != expected {
        return Err(RasterError::CellCount {
            expected,
            found: tokens.len(),
        });
    }

    let ncols = header.ncols as usize;
    let mut cells = Vec::with_capacity(expected);
    for (k, token) in tokens.iter().enumerate() {
        let value = token.parse::<i64>().map_err(|_| RasterError::MalformedCell {
            row: (k / ncols) as u32,
            col: (k % ncols) as u32,
            token: (*token).to_string(),
        })?;
        cells.push(value);
    }

    let values = Grid::from_vec(header.nrows, header.ncols, cells)?;
    Ok(RawRaster { header, values })
}
