//! Neighbour-weighted transition probabilities.

/// Upper bound of the per-cell noise term: noise is uniform in `[0, 0.001)`.
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.001;

/// Whether transition probabilities are capped at 1.
///
/// The reference rule leaves them unbounded: a weighted neighbour sum
/// above 1 simply guarantees the transition gate passes. Clamping gives
/// the same gate result for uniform draws in `[0, 1)`, but keeps the
/// reported probability layers within `[0, 1]` and changes which target
/// wins a contested cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbabilityBound {
    /// Report the raw weighted sum.
    #[default]
    Unclamped,
    /// Cap the probability at 1.
    Clamped,
}

impl ProbabilityBound {
    /// Apply the bound to a raw probability.
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Self::Unclamped => p,
            Self::Clamped => p.min(1.0),
        }
    }
}

/// `weight * neighbours + noise`, bounded according to `bound`.
///
/// `weight` is the coefficient-table entry for the cell's current
/// category; `neighbours` is the count of target cells in its window.
pub fn transition_probability(
    weight: f64,
    neighbours: u8,
    noise: f64,
    bound: ProbabilityBound,
) -> f64 {
    bound.apply(weight * f64::from(neighbours) + noise)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_sum_plus_noise() {
        let p = transition_probability(0.25, 3, 0.0005, ProbabilityBound::Unclamped);
        assert!((p - 0.7505).abs() < 1e-12);
    }

    #[test]
    fn isolated_cell_only_sees_noise() {
        let p = transition_probability(0.3448, 0, 0.0007, ProbabilityBound::Unclamped);
        assert_eq!(p, 0.0007);
    }

    #[test]
    fn unclamped_may_exceed_one() {
        let p = transition_probability(0.8240, 8, 0.0, ProbabilityBound::Unclamped);
        assert!((p - 6.592).abs() < 1e-12);
    }

    #[test]
    fn clamped_caps_at_one() {
        assert_eq!(
            transition_probability(0.8240, 8, 0.0, ProbabilityBound::Clamped),
            1.0
        );
        assert_eq!(
            transition_probability(0.1, 2, 0.0, ProbabilityBound::Clamped),
            0.2
        );
    }
}
