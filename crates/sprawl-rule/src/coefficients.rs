//! Per-category transition coefficients and baseline growth rates.

use sprawl_core::{Category, Target};

/// Per-neighbour transition weight for one target, keyed by the cell's
/// current category.
///
/// Every category has an entry, so a lookup can never miss. Categories
/// the reference rule set leaves out (e.g. urban → urban) weigh 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoefficientTable {
    weights: [f64; Category::COUNT],
}

impl CoefficientTable {
    /// A table with every weight set to 0.
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Return a copy with `category` weighted by `weight`.
    pub fn with(mut self, category: Category, weight: f64) -> Self {
        self.weights[category.index()] = weight;
        self
    }

    /// Set the weight for `category`.
    pub fn set(&mut self, category: Category, weight: f64) {
        self.weights[category.index()] = weight;
    }

    /// The weight applied when the current cell holds `category`.
    pub fn weight(&self, category: Category) -> f64 {
        self.weights[category.index()]
    }

    /// `(category, weight)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.weight(c)))
    }

    /// Check every weight is finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        for (category, w) in self.iter() {
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(format!(
                    "coefficient for {category} must be within [0, 1], got {w}"
                ));
            }
        }
        Ok(())
    }
}

/// The two coefficient tables, one per target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    /// Weights for conversion to urban.
    pub urban: CoefficientTable,
    /// Weights for conversion to semi-urban.
    pub semi_urban: CoefficientTable,
}

impl Coefficients {
    /// The calibrated Randstad rule set.
    pub fn reference() -> Self {
        use Category::*;
        Self {
            urban: CoefficientTable::zeros()
                .with(Infrastructure, 0.0555)
                .with(SemiUrban, 0.4430)
                .with(Recreation, 0.0454)
                .with(Agriculture, 0.3448)
                .with(Nature, 0.0203)
                .with(Water, 0.0189)
                .with(Sea, 0.0),
            semi_urban: CoefficientTable::zeros()
                .with(Infrastructure, 0.0160)
                .with(Urban, 0.0403)
                .with(Recreation, 0.0358)
                .with(Agriculture, 0.8240)
                .with(Nature, 0.0347)
                .with(Water, 0.0304)
                .with(Sea, 0.0013),
        }
    }

    /// The table for `target`.
    pub fn table(&self, target: Target) -> &CoefficientTable {
        match target {
            Target::Urban => &self.urban,
            Target::SemiUrban => &self.semi_urban,
        }
    }

    /// Mutable access to the table for `target`.
    pub fn table_mut(&mut self, target: Target) -> &mut CoefficientTable {
        match target {
            Target::Urban => &mut self.urban,
            Target::SemiUrban => &mut self.semi_urban,
        }
    }

    /// Validate both tables.
    pub fn validate(&self) -> Result<(), String> {
        self.urban
            .validate()
            .map_err(|e| format!("urban table: {e}"))?;
        self.semi_urban
            .validate()
            .map_err(|e| format!("semi-urban table: {e}"))
    }
}

/// Neighbour-independent baseline conversion probabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GrowthRates {
    /// Baseline probability for conversion to urban.
    pub urban: f64,
    /// Baseline probability for conversion to semi-urban.
    pub semi_urban: f64,
}

impl GrowthRates {
    /// The calibrated Randstad growth rates.
    pub fn reference() -> Self {
        Self {
            urban: 0.00795,
            semi_urban: 0.097,
        }
    }

    /// The rate for `target`.
    pub fn rate(&self, target: Target) -> f64 {
        match target {
            Target::Urban => self.urban,
            Target::SemiUrban => self.semi_urban,
        }
    }

    /// Check both rates are finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        for target in Target::ALL {
            let rate = self.rate(target);
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(format!(
                    "{target} growth rate must be within [0, 1], got {rate}"
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_tables_match_rule_set() {
        let c = Coefficients::reference();
        assert_eq!(c.urban.weight(Category::Agriculture), 0.3448);
        assert_eq!(c.urban.weight(Category::SemiUrban), 0.4430);
        assert_eq!(c.urban.weight(Category::Urban), 0.0);
        assert_eq!(c.urban.weight(Category::Sea), 0.0);
        assert_eq!(c.semi_urban.weight(Category::Agriculture), 0.8240);
        assert_eq!(c.semi_urban.weight(Category::Urban), 0.0403);
        assert_eq!(c.semi_urban.weight(Category::SemiUrban), 0.0);
        assert_eq!(c.semi_urban.weight(Category::Sea), 0.0013);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn reference_growth_rates() {
        let g = GrowthRates::reference();
        assert_eq!(g.rate(Target::Urban), 0.00795);
        assert_eq!(g.rate(Target::SemiUrban), 0.097);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn table_lookup_by_target() {
        let mut c = Coefficients::default();
        c.table_mut(Target::SemiUrban).set(Category::Nature, 0.5);
        assert_eq!(c.table(Target::SemiUrban).weight(Category::Nature), 0.5);
        assert_eq!(c.table(Target::Urban).weight(Category::Nature), 0.0);
    }

    #[test]
    fn validate_rejects_out_of_range_weights() {
        let t = CoefficientTable::zeros().with(Category::Water, 1.5);
        let err = t.validate().unwrap_err();
        assert!(err.contains("water"), "{err}");
        assert!(CoefficientTable::zeros()
            .with(Category::Sea, f64::NAN)
            .validate()
            .is_err());
        assert!(CoefficientTable::zeros()
            .with(Category::Sea, -0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn validate_rejects_bad_growth_rates() {
        let g = GrowthRates {
            urban: 0.1,
            semi_urban: 2.0,
        };
        assert!(g.validate().unwrap_err().contains("semi-urban"));
    }
}
