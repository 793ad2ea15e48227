//! Two-stage stochastic gating.

use crate::coefficients::GrowthRates;
use crate::draws::CellDraws;

/// Which targets passed both their gates for one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Realization {
    /// Urban growth and transition gates both passed.
    pub urban: bool,
    /// Semi-urban growth and transition gates both passed.
    pub semi_urban: bool,
}

/// Evaluate the growth and transition gates for both targets.
///
/// A target is realized only when `growth draw < growth rate` AND
/// `transition draw < transition probability` in the same step.
pub fn realize(
    growth: &GrowthRates,
    p_urban: f64,
    p_semi_urban: f64,
    draws: &CellDraws,
) -> Realization {
    let urban_growth = draws.urban_growth < growth.urban;
    let urban_transition = draws.urban_transition < p_urban;
    let semi_growth = draws.semi_urban_growth < growth.semi_urban;
    let semi_transition = draws.semi_urban_transition < p_semi_urban;
    Realization {
        urban: urban_growth && urban_transition,
        semi_urban: semi_growth && semi_transition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(urban: f64, semi_urban: f64) -> GrowthRates {
        GrowthRates { urban, semi_urban }
    }

    #[test]
    fn both_gates_required() {
        let d = CellDraws {
            noise: 0.0,
            urban_growth: 0.2,
            urban_transition: 0.2,
            semi_urban_growth: 0.2,
            semi_urban_transition: 0.2,
        };
        // Growth passes, transition fails.
        assert!(!realize(&rates(0.5, 0.5), 0.1, 0.1, &d).urban);
        // Transition passes, growth fails.
        assert!(!realize(&rates(0.1, 0.1), 0.5, 0.5, &d).urban);
        // Both pass.
        let r = realize(&rates(0.5, 0.5), 0.5, 0.5, &d);
        assert!(r.urban && r.semi_urban);
    }

    #[test]
    fn gates_are_strict() {
        let d = CellDraws::uniform(0.5);
        let r = realize(&rates(0.5, 1.0), 1.0, 0.5, &d);
        assert!(!r.urban, "draw equal to growth rate must fail");
        assert!(!r.semi_urban, "draw equal to probability must fail");
    }

    #[test]
    fn zero_rates_never_realize() {
        let d = CellDraws::uniform(0.0);
        let r = realize(&rates(0.0, 0.0), 10.0, 10.0, &d);
        assert_eq!(r, Realization::default());
    }

    #[test]
    fn probability_above_one_always_passes_transition_gate() {
        let d = CellDraws::uniform(0.999_999);
        let r = realize(&rates(1.0, 1.0), 1.3, 2.0, &d);
        assert!(r.urban && r.semi_urban);
    }

    #[test]
    fn targets_use_their_own_draws() {
        let d = CellDraws {
            noise: 0.0,
            urban_growth: 0.1,
            urban_transition: 0.1,
            semi_urban_growth: 0.9,
            semi_urban_transition: 0.1,
        };
        let r = realize(&rates(0.5, 0.5), 0.5, 0.5, &d);
        assert!(r.urban);
        assert!(!r.semi_urban);
    }
}
