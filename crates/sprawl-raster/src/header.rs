//! ESRI ASCII grid header.
//!
//! The georeferencing fields are carried through untouched so that output
//! layers line up with the input map. No projection handling is done.

use std::fmt;

use crate::error::RasterError;

/// Whether the lower-left coordinates name the corner or the centre of
/// the lower-left cell (`xllcorner` vs `xllcenter`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// `xllcorner` / `yllcorner`.
    #[default]
    Corner,
    /// `xllcenter` / `yllcenter`.
    Center,
}

/// Parsed header of an ESRI ASCII grid.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterHeader {
    /// Number of columns.
    pub ncols: u32,
    /// Number of rows.
    pub nrows: u32,
    /// Lower-left x coordinate.
    pub xll: f64,
    /// Lower-left y coordinate.
    pub yll: f64,
    /// Meaning of `xll` / `yll`.
    pub anchor: Anchor,
    /// Cell edge length in map units.
    pub cellsize: f64,
    /// Value marking missing cells, if declared.
    pub nodata: Option<i64>,
}

impl RasterHeader {
    /// A header for a `rows × cols` grid at the origin with unit cells.
    pub fn unit(rows: u32, cols: u32) -> Self {
        Self {
            ncols: cols,
            nrows: rows,
            xll: 0.0,
            yll: 0.0,
            anchor: Anchor::Corner,
            cellsize: 1.0,
            nodata: None,
        }
    }

    /// `(rows, cols)` as declared by the header.
    pub fn shape(&self) -> (u32, u32) {
        (self.nrows, self.ncols)
    }

    /// Number of cells the header declares.
    pub fn cell_count(&self) -> usize {
        self.nrows as usize * self.ncols as usize
    }

    /// Copy of this header with a different NODATA declaration.
    pub fn with_nodata(&self, nodata: Option<i64>) -> Self {
        Self {
            nodata,
            ..self.clone()
        }
    }

    /// Apply one `key value` header line. Returns `Ok(false)` when `key`
    /// is not a header key, i.e. the body has started.
    pub(crate) fn apply(
        &mut self,
        seen: &mut HeaderKeys,
        key: &str,
        value: &str,
    ) -> Result<bool, RasterError> {
        match key.to_ascii_lowercase().as_str() {
            "ncols" => {
                self.ncols = parse_dimension(key, value)?;
                seen.ncols = true;
            }
            "nrows" => {
                self.nrows = parse_dimension(key, value)?;
                seen.nrows = true;
            }
            "xllcorner" | "xllcenter" => {
                self.xll = parse_float(key, value)?;
                self.anchor = anchor_of(key);
                seen.xll = true;
            }
            "yllcorner" | "yllcenter" => {
                self.yll = parse_float(key, value)?;
                seen.yll = true;
            }
            "cellsize" => {
                let size = parse_float(key, value)?;
                if size <= 0.0 {
                    return Err(malformed(format!("cellsize must be positive, got {size}")));
                }
                self.cellsize = size;
                seen.cellsize = true;
            }
            "nodata_value" => {
                let nodata = value
                    .parse::<i64>()
                    .map_err(|_| malformed(format!("NODATA_value '{value}' is not an integer")))?;
                self.nodata = Some(nodata);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl fmt::Display for RasterHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.anchor {
            Anchor::Corner => "corner",
            Anchor::Center => "center",
        };
        writeln!(f, "ncols {}", self.ncols)?;
        writeln!(f, "nrows {}", self.nrows)?;
        writeln!(f, "xll{suffix} {}", self.xll)?;
        writeln!(f, "yll{suffix} {}", self.yll)?;
        writeln!(f, "cellsize {}", self.cellsize)?;
        if let Some(nodata) = self.nodata {
            writeln!(f, "NODATA_value {nodata}")?;
        }
        Ok(())
    }
}

/// Tracks which required keys have been seen.
#[derive(Default)]
pub(crate) struct HeaderKeys {
    ncols: bool,
    nrows: bool,
    xll: bool,
    yll: bool,
    cellsize: bool,
}

impl HeaderKeys {
    /// Fail on the first required key that never appeared.
    pub(crate) fn check(&self) -> Result<(), RasterError> {
        let required = [
            (self.ncols, "ncols"),
            (self.nrows, "nrows"),
            (self.xll, "xllcorner/xllcenter"),
            (self.yll, "yllcorner/yllcenter"),
            (self.cellsize, "cellsize"),
        ];
        match required.iter().find(|(seen, _)| !seen) {
            Some((_, name)) => Err(malformed(format!("missing {name}"))),
            None => Ok(()),
        }
    }
}

fn anchor_of(key: &str) -> Anchor {
    if key.to_ascii_lowercase().ends_with("center") {
        Anchor::Center
    } else {
        Anchor::Corner
    }
}

fn parse_dimension(key: &str, value: &str) -> Result<u32, RasterError> {
    match value.parse::<u32>() {
        Ok(0) => Err(malformed(format!("{key} must be at least 1"))),
        Ok(n) => Ok(n),
        Err(_) => Err(malformed(format!("{key} '{value}' is not a positive integer"))),
    }
}

fn parse_float(key: &str, value: &str) -> Result<f64, RasterError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| malformed(format!("{key} '{value}' is not a finite number")))
}

fn malformed(detail: String) -> RasterError {
    RasterError::MalformedHeader { detail }
}
