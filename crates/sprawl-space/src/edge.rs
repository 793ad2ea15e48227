//! Spatial edge (boundary) behavior for neighbourhood windows.

/// How a window handles cells that fall outside the grid.
///
/// # Examples
///
/// ```
/// use sprawl_core::Grid;
/// use sprawl_space::{EdgeBehavior, MooreWindow};
///
/// let all = Grid::filled(4, 4, true).unwrap();
///
/// // Absorb: corner sees 3 neighbours, interior sees 8.
/// let absorb = MooreWindow::new(EdgeBehavior::Absorb);
/// assert_eq!(absorb.count(&all, 0, 0).unwrap(), 3);
/// assert_eq!(absorb.count(&all, 1, 1).unwrap(), 8);
///
/// // Wrap: every cell sees 8 neighbours (torus).
/// let wrap = MooreWindow::new(EdgeBehavior::Wrap);
/// assert_eq!(wrap.count(&all, 0, 0).unwrap(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds cells are omitted (clipped window, fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds cells wrap to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve a single axis value. Returns `None` for Absorb out-of-bounds.
    pub(crate) fn resolve_axis(self, val: i64, len: u32) -> Option<u32> {
        let n = i64::from(len);
        if (0..n).contains(&val) {
            return Some(val as u32);
        }
        match self {
            Self::Absorb => None,
            Self::Wrap => Some(val.rem_euclid(n) as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(2, 5), Some(2));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(0, 5), Some(0));
    }

    #[test]
    fn resolve_axis_absorb_out_of_bounds() {
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(-1, 5), None);
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(5, 5), None);
    }

    #[test]
    fn resolve_axis_wrap() {
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(-1, 5), Some(4));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(5, 5), Some(0));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(7, 5), Some(2));
    }
}
