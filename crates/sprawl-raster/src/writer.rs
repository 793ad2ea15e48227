//! ESRI ASCII grid writer.
//!
//! [`write_ascii_grid`] streams any grid whose cells implement
//! [`RasterValue`] to a `Write` sink. Category, contest, indicator,
//! count and probability layers are all supported.

use std::io::Write;

use sprawl_core::{Category, Contest, Grid};

use crate::error::RasterError;
use crate::header::RasterHeader;

/// A cell value that can be written as one raster token.
pub trait RasterValue {
    /// Append the token for this value to `out`.
    fn write_token(&self, out: &mut String);
}

impl RasterValue for Category {
    fn write_token(&self, out: &mut String) {
        push_int(out, i64::from(self.code()));
    }
}

/// Contest layers use the numeric diagnostic codes (2, 3, 99, 100).
impl RasterValue for Contest {
    fn write_token(&self, out: &mut String) {
        push_int(out, i64::from(self.code()));
    }
}

/// Indicators are written as 1 / 0.
impl RasterValue for bool {
    fn write_token(&self, out: &mut String) {
        out.push(if *self { '1' } else { '0' });
    }
}

impl RasterValue for u8 {
    fn write_token(&self, out: &mut String) {
        push_int(out, i64::from(*self));
    }
}

impl RasterValue for i64 {
    fn write_token(&self, out: &mut String) {
        push_int(out, *self);
    }
}

impl RasterValue for f64 {
    fn write_token(&self, out: &mut String) {
        use std::fmt::Write as _;
        let _ = write!(out, "{self}");
    }
}

fn push_int(out: &mut String, value: i64) {
    use std::fmt::Write as _;
    let _ = write!(out, "{value}");
}

/// Write `grid` as an ESRI ASCII grid.
///
/// `header` supplies the georeferencing; its `ncols`/`nrows` are
/// replaced by the grid's own shape.
///
/// # Examples
///
/// ```
/// use sprawl_core::{Category, Grid};
/// use sprawl_raster::{read_ascii_grid, write_ascii_grid, RasterHeader};
///
/// let grid = Grid::filled(2, 2, Category::Nature).unwrap();
/// let mut buf = Vec::new();
/// write_ascii_grid(&mut buf, &RasterHeader::unit(2, 2), &grid).unwrap();
///
/// let back = read_ascii_grid(buf.as_slice()).unwrap();
/// assert_eq!(back.values().cells(), &[6, 6, 6, 6]);
/// ```
pub fn write_ascii_grid<W: Write, T: RasterValue>(
    mut writer: W,
    header: &RasterHeader,
    grid: &Grid<T>,
) -> Result<(), RasterError> {
    let header = RasterHeader {
        nrows: grid.rows(),
        ncols: grid.cols(),
        ..header.clone()
    };
    write!(writer, "{header}")?;

    let mut line = String::new();
    for row in grid.rows_iter() {
        line.clear();
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            value.write_token(&mut line);
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Anchor;

    fn body(buf: &[u8]) -> Vec<String> {
        let text = std::str::from_utf8(buf).unwrap();
        text.lines()
            .skip_while(|l| l.chars().next().is_some_and(|c| c.is_ascii_alphabetic()))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn contest_codes_written() {
        let grid = Grid::from_vec(
            1,
            4,
            vec![Contest::Urban, Contest::SemiUrban, Contest::Unresolved, Contest::Idle],
        )
        .unwrap();
        let mut buf = Vec::new();
        write_ascii_grid(&mut buf, &RasterHeader::unit(1, 1), &grid).unwrap();
        assert_eq!(body(&buf), vec!["2 3 99 100"]);
    }

    #[test]
    fn indicator_written_as_bits() {
        let grid = Grid::from_vec(2, 2, vec![true, false, false, true]).unwrap();
        let mut buf = Vec::new();
        write_ascii_grid(&mut buf, &RasterHeader::unit(2, 2), &grid).unwrap();
        assert_eq!(body(&buf), vec!["1 0", "0 1"]);
    }

    #[test]
    fn header_shape_follows_grid() {
        let header = RasterHeader {
            xll: 10.0,
            anchor: Anchor::Center,
            cellsize: 25.0,
            ..RasterHeader::unit(9, 9)
        };
        let grid = Grid::filled(1, 3, 4u8).unwrap();
        let mut buf = Vec::new();
        write_ascii_grid(&mut buf, &header, &grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("ncols 3\nnrows 1\nxllcenter 10\n"));
        assert!(text.contains("cellsize 25\n"));
    }

    #[test]
    fn io_error_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let grid = Grid::filled(1, 1, true).unwrap();
        let err = write_ascii_grid(Broken, &RasterHeader::unit(1, 1), &grid).unwrap_err();
        assert!(matches!(err, RasterError::Io(_)));
    }
}
