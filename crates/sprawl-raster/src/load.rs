//! Load-time validation of raw rasters into category grids.

use sprawl_core::{CategoryGrid, Grid};

use crate::error::RasterError;
use crate::lookup::LookupTable;
use crate::reader::RawRaster;

/// Map every cell of `raw` through `table`.
///
/// When `expected_shape` is given, the raster must match it exactly,
/// e.g. when a second map must line up with a clone map.
///
/// # Errors
///
/// - [`RasterError::ShapeMismatch`] when the shape differs from `expected_shape`
/// - [`RasterError::NoData`] for the first cell holding the header's NODATA value
/// - [`RasterError::UnmappedCode`] for the first code the table does not map
pub fn load_categories(
    raw: &RawRaster,
    table: &LookupTable,
    expected_shape: Option<(u32, u32)>,
) -> Result<CategoryGrid, RasterError> {
    let found = raw.shape();
    if let Some(expected) = expected_shape {
        if expected != found {
            return Err(RasterError::ShapeMismatch { expected, found });
        }
    }

    let values = raw.values();
    let nodata = raw.header().nodata;
    let mut cells = Vec::with_capacity(values.len());
    for (i, &code) in values.cells().iter().enumerate() {
        let (row, col) = locate(values, i);
        if nodata == Some(code) {
            return Err(RasterError::NoData { row, col });
        }
        let category = table
            .lookup(code)
            .ok_or(RasterError::UnmappedCode { code, row, col })?;
        cells.push(category);
    }
    Ok(Grid::from_vec(found.0, found.1, cells)?)
}

fn locate(values: &Grid<i64>, index: usize) -> (u32, u32) {
    let cols = values.cols() as usize;
    ((index / cols) as u32, (index % cols) as u32)
}
