//! 3×3 Moore window aggregation over indicator grids.

use smallvec::SmallVec;
use sprawl_core::Grid;

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A square window three cells on a side, centred on the cell under
/// evaluation and excluding it.
///
/// A cell is never its own neighbour. Under [`EdgeBehavior::Wrap`], an
/// axis shorter than three cells folds offsets back onto the centre;
/// those are dropped, while distinct cells reached from several offsets
/// are counted once per offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MooreWindow {
    edge: EdgeBehavior,
}

impl MooreWindow {
    /// Side length of the window, in cells.
    pub const SIDE: u32 = 3;

    /// Largest possible neighbour count.
    pub const MAX_NEIGHBOURS: u8 = 8;

    /// Create a window with the given edge behavior.
    pub fn new(edge: EdgeBehavior) -> Self {
        Self { edge }
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Flat indices of the neighbours of `(row, col)` in a `rows × cols` grid.
    ///
    /// The caller guarantees `(row, col)` is in bounds. The centre is
    /// never returned, even when a wrapped offset lands on it.
    pub fn neighbours(&self, rows: u32, cols: u32, row: u32, col: u32) -> SmallVec<[usize; 8]> {
        let centre = row as usize * cols as usize + col as usize;
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let nr = self.edge.resolve_axis(i64::from(row) + dr, rows);
            let nc = self.edge.resolve_axis(i64::from(col) + dc, cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                let index = nr as usize * cols as usize + nc as usize;
                if index != centre {
                    result.push(index);
                }
            }
        }
        result
    }

    /// Number of `true` cells in the window around `(row, col)`, excluding
    /// the cell itself.
    pub fn count(&self, indicator: &Grid<bool>, row: u32, col: u32) -> Result<u8, SpaceError> {
        if indicator.index_of(row, col).is_none() {
            return Err(SpaceError::CoordOutOfBounds {
                coord: (row, col),
                shape: indicator.shape(),
            });
        }
        Ok(self.count_in_bounds(indicator, row, col))
    }

    /// Neighbour counts for every cell of `indicator`.
    pub fn totals(&self, indicator: &Grid<bool>) -> Grid<u8> {
        indicator.map_indexed(|row, col, _| self.count_in_bounds(indicator, row, col))
    }

    /// Neighbour counts for one row, written into `out` (length `cols`).
    pub fn row_totals(&self, indicator: &Grid<bool>, row: u32, out: &mut [u8]) {
        debug_assert_eq!(out.len(), indicator.cols() as usize);
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = self.count_in_bounds(indicator, row, col as u32);
        }
    }

    fn count_in_bounds(&self, indicator: &Grid<bool>, row: u32, col: u32) -> u8 {
        let cells = indicator.cells();
        self.neighbours(indicator.rows(), indicator.cols(), row, col)
            .into_iter()
            .filter(|&i| cells[i])
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: u32, cols: u32, cells: &[u8]) -> Grid<bool> {
        Grid::from_vec(rows, cols, cells.iter().map(|&v| v != 0).collect()).unwrap()
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_absorb_interior() {
        let w = MooreWindow::new(EdgeBehavior::Absorb);
        assert_eq!(w.neighbours(5, 5, 2, 2).len(), 8);
    }

    #[test]
    fn neighbours_absorb_corner() {
        let w = MooreWindow::new(EdgeBehavior::Absorb);
        let n = w.neighbours(5, 5, 0, 0);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&5)); // (1,0)
        assert!(n.contains(&1)); // (0,1)
        assert!(n.contains(&6)); // (1,1)
    }

    #[test]
    fn neighbours_absorb_edge() {
        let w = MooreWindow::new(EdgeBehavior::Absorb);
        assert_eq!(w.neighbours(5, 5, 0, 2).len(), 5);
    }

    #[test]
    fn neighbours_wrap_corner() {
        let w = MooreWindow::new(EdgeBehavior::Wrap);
        let n = w.neighbours(5, 5, 0, 0);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&24)); // NW wraps on both axes
        assert!(n.contains(&20)); // N wraps
        assert!(n.contains(&4)); // W wraps
    }

    #[test]
    fn single_cell_absorb_has_no_neighbours() {
        let w = MooreWindow::new(EdgeBehavior::Absorb);
        assert!(w.neighbours(1, 1, 0, 0).is_empty());
    }

    #[test]
    fn single_cell_wrap_has_no_neighbours() {
        let w = MooreWindow::new(EdgeBehavior::Wrap);
        assert!(w.neighbours(1, 1, 0, 0).is_empty());
        let g = Grid::filled(1, 1, true).unwrap();
        assert_eq!(w.count(&g, 0, 0).unwrap(), 0);
    }

    #[test]
    fn narrow_wrap_never_counts_the_centre() {
        let w = MooreWindow::new(EdgeBehavior::Wrap);
        for (rows, cols) in [(1, 1), (1, 2), (2, 1), (2, 2), (1, 4), (2, 5)] {
            for r in 0..rows {
                for c in 0..cols {
                    let me = (r * cols + c) as usize;
                    assert!(
                        !w.neighbours(rows, cols, r, c).contains(&me),
                        "({r}, {c}) in {rows}x{cols}"
                    );
                }
            }
            let lone = Grid::from_fn(rows, cols, |r, c| (r, c) == (0, 0)).unwrap();
            assert_eq!(w.count(&lone, 0, 0).unwrap(), 0, "{rows}x{cols}");
        }
    }

    // ── Counting tests ──────────────────────────────────────────

    #[test]
    fn centre_is_not_its_own_neighbour() {
        let g = grid(3, 3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]);
        let w = MooreWindow::default();
        assert_eq!(w.count(&g, 1, 1).unwrap(), 0);
        for (r, c) in [(0, 0), (0, 1), (2, 2), (1, 0)] {
            assert_eq!(w.count(&g, r, c).unwrap(), 1);
        }
    }

    #[test]
    fn window_is_clipped_at_edges() {
        let g = Grid::filled(3, 4, true).unwrap();
        let totals = MooreWindow::default().totals(&g);
        assert_eq!(totals.cells(), &[3, 5, 5, 3, 5, 8, 8, 5, 3, 5, 5, 3]);
    }

    #[test]
    fn window_does_not_reach_two_cells_away() {
        let g = grid(1, 5, &[1, 0, 0, 0, 1]);
        let totals = MooreWindow::default().totals(&g);
        assert_eq!(totals.cells(), &[0, 1, 0, 1, 0]);
    }

    #[test]
    fn wrap_counts_across_the_seam() {
        let g = grid(1, 5, &[1, 0, 0, 0, 0]);
        let totals = MooreWindow::new(EdgeBehavior::Wrap).totals(&g);
        // Single row wraps vertically onto itself: each horizontal
        // neighbour is visited from three row offsets, the centre never.
        assert_eq!(totals.cells(), &[0, 3, 0, 0, 3]);
    }

    #[test]
    fn count_out_of_bounds_errors() {
        let g = Grid::filled(2, 2, false).unwrap();
        assert_eq!(
            MooreWindow::default().count(&g, 2, 0),
            Err(SpaceError::CoordOutOfBounds {
                coord: (2, 0),
                shape: (2, 2)
            })
        );
    }

    #[test]
    fn row_totals_match_totals() {
        let g = grid(3, 3, &[1, 0, 1, 0, 1, 0, 1, 1, 0]);
        let w = MooreWindow::default();
        let all = w.totals(&g);
        for row in 0..3 {
            let mut out = [0u8; 3];
            w.row_totals(&g, row, &mut out);
            assert_eq!(&out[..], &all.cells()[row as usize * 3..row as usize * 3 + 3]);
        }
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![Just(EdgeBehavior::Absorb), Just(EdgeBehavior::Wrap)]
    }

    proptest! {
        #[test]
        fn count_equals_brute_force_window_sum_minus_self(
            rows in 1u32..8,
            cols in 1u32..8,
            bits in proptest::collection::vec(any::<bool>(), 64),
        ) {
            let g = Grid::from_fn(rows, cols, |r, c| bits[(r * 8 + c) as usize]).unwrap();
            let w = MooreWindow::new(EdgeBehavior::Absorb);
            for r in 0..rows {
                for c in 0..cols {
                    let mut sum = 0u8;
                    for rr in r.saturating_sub(1)..=(r + 1).min(rows - 1) {
                        for cc in c.saturating_sub(1)..=(c + 1).min(cols - 1) {
                            sum += g[(rr, cc)] as u8;
                        }
                    }
                    prop_assert_eq!(w.count(&g, r, c).unwrap(), sum - g[(r, c)] as u8);
                }
            }
        }

        #[test]
        fn neighbours_symmetric(
            rows in 3u32..10,
            cols in 3u32..10,
            edge in arb_edge(),
            r in 0u32..10, c in 0u32..10,
        ) {
            let r = r % rows;
            let c = c % cols;
            let w = MooreWindow::new(edge);
            let me = (r * cols + c) as usize;
            for nb in w.neighbours(rows, cols, r, c) {
                let (nr, nc) = ((nb / cols as usize) as u32, (nb % cols as usize) as u32);
                prop_assert!(w.neighbours(rows, cols, nr, nc).contains(&me));
            }
        }

        #[test]
        fn counts_never_exceed_eight(
            rows in 1u32..6,
            cols in 1u32..6,
            edge in arb_edge(),
        ) {
            let g = Grid::filled(rows, cols, true).unwrap();
            let totals = MooreWindow::new(edge).totals(&g);
            prop_assert!(totals.cells().iter().all(|&n| n <= MooreWindow::MAX_NEIGHBOURS));
        }
    }
}
