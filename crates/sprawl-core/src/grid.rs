//! Row-major two-dimensional grids.
//!
//! A [`Grid`] owns its cells and never changes shape after construction.
//! Each simulation step reads one grid and produces a fresh one; nothing
//! in the workspace mutates a grid it did not create.

use std::ops::Index;

use crate::category::{Category, Target};
use crate::error::GridError;

/// A fixed-shape, row-major 2D array of cells.
///
/// Cell `(row, col)` lives at flat index `row * cols + col`. That flat
/// index is the stable key random draw sources use to address a cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: u32,
    cols: u32,
    cells: Vec<T>,
}

/// A grid of land-use categories: the simulation state for one tick.
pub type CategoryGrid = Grid<Category>;

fn checked_len(rows: u32, cols: u32) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyShape);
    }
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or(GridError::DimensionTooLarge { rows, cols })
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// Returns `Err` if either dimension is zero or `cells.len()` is not
    /// exactly `rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, cells: Vec<T>) -> Result<Self, GridError> {
        let expected = checked_len(rows, cols)?;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(
        rows: u32,
        cols: u32,
        mut f: impl FnMut(u32, u32) -> T,
    ) -> Result<Self, GridError> {
        let len = checked_len(rows, cols)?;
        let mut cells = Vec::with_capacity(len);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty shapes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid, returning its row-major buffer.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Flat index of `(row, col)`, or `None` if out of bounds.
    pub fn index_of(&self, row: u32, col: u32) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    /// `(row, col)` of a flat index, or `None` if out of bounds.
    pub fn coords_of(&self, index: usize) -> Option<(u32, u32)> {
        if index < self.cells.len() {
            let cols = self.cols as usize;
            Some(((index / cols) as u32, (index % cols) as u32))
        } else {
            None
        }
    }

    /// The cell at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Option<&T> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `(row, col)`.
    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut T> {
        self.index_of(row, col).map(move |i| &mut self.cells[i])
    }

    /// All cells in row-major order, mutably.
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate over rows as slices.
    pub fn rows_iter(&self) -> std::slice::ChunksExact<'_, T> {
        self.cells.chunks_exact(self.cols as usize)
    }

    /// Returns `true` if `other` has the same shape.
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.shape() == other.shape()
    }

    /// `Err(ShapeMismatch)` unless `other` has the same shape.
    pub fn ensure_same_shape<U>(&self, other: &Grid<U>) -> Result<(), GridError> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            })
        }
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Apply `f(row, col, cell)` to every cell, producing a grid of the same shape.
    pub fn map_indexed<U>(&self, mut f: impl FnMut(u32, u32, &T) -> U) -> Grid<U> {
        let cols = self.cols as usize;
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .enumerate()
                .map(|(i, v)| f((i / cols) as u32, (i % cols) as u32, v))
                .collect(),
        }
    }

    /// Combine two same-shaped grids cell by cell.
    pub fn zip_map<U, V>(
        &self,
        other: &Grid<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<Grid<V>, GridError> {
        self.ensure_same_shape(other)?;
        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(other.cells.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    /// Number of cells satisfying `pred`.
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|v| pred(v)).count()
    }
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(rows: u32, cols: u32, value: T) -> Result<Self, GridError> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![value; len],
        })
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (u32, u32)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row as usize * self.cols as usize + col as usize]
    }
}

impl Grid<Category> {
    /// Boolean indicator grid: `true` where the cell currently holds `target`.
    pub fn indicator(&self, target: Target) -> Grid<bool> {
        let category = target.category();
        self.map(|&c| c == category)
    }

    /// Number of cells holding `category`.
    pub fn count_category(&self, category: Category) -> usize {
        self.count(|&c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::from_vec(2, 3, vec![0u8; 6]).is_ok());
        assert_eq!(
            Grid::from_vec(2, 3, vec![0u8; 5]),
            Err(GridError::LengthMismatch {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn empty_shapes_rejected() {
        assert_eq!(Grid::filled(0, 4, 1u8), Err(GridError::EmptyShape));
        assert_eq!(Grid::<u8>::from_vec(3, 0, vec![]), Err(GridError::EmptyShape));
    }

    #[test]
    fn row_major_layout() {
        let g = Grid::from_fn(2, 3, |r, c| r * 10 + c).unwrap();
        assert_eq!(g.cells(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(g[(1, 2)], 12);
        assert_eq!(g.get(1, 0), Some(&10));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.index_of(1, 1), Some(4));
        assert_eq!(g.coords_of(4), Some((1, 1)));
        assert_eq!(g.coords_of(6), None);
        let rows: Vec<&[u32]> = g.rows_iter().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[10, 11, 12][..]]);
    }

    #[test]
    fn indicator_marks_target_cells() {
        let g = Grid::from_vec(
            1,
            4,
            vec![
                Category::Urban,
                Category::SemiUrban,
                Category::Water,
                Category::Urban,
            ],
        )
        .unwrap();
        assert_eq!(
            g.indicator(Target::Urban).cells(),
            &[true, false, false, true]
        );
        assert_eq!(
            g.indicator(Target::SemiUrban).cells(),
            &[false, true, false, false]
        );
        assert_eq!(g.count_category(Category::Urban), 2);
    }

    #[test]
    fn zip_map_rejects_shape_mismatch() {
        let a = Grid::filled(2, 2, 1u8).unwrap();
        let b = Grid::filled(2, 3, 1u8).unwrap();
        assert_eq!(
            a.zip_map(&b, |x, y| x + y),
            Err(GridError::ShapeMismatch {
                expected: (2, 2),
                found: (2, 3)
            })
        );
        let c = Grid::filled(2, 2, 2u8).unwrap();
        assert_eq!(a.zip_map(&c, |x, y| x + y).unwrap().cells(), &[3, 3, 3, 3]);
    }

    proptest! {
        #[test]
        fn index_and_coords_are_inverse(rows in 1u32..20, cols in 1u32..20, seed in 0usize..400) {
            let g = Grid::filled(rows, cols, 0u8).unwrap();
            let i = seed % g.len();
            let (r, c) = g.coords_of(i).unwrap();
            prop_assert_eq!(g.index_of(r, c), Some(i));
        }
    }
}
