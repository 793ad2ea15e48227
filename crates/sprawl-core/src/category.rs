//! Land-use categories and transition targets.

use std::fmt;

use crate::error::CategoryError;

/// One of the eight land-use classes a cell may hold.
///
/// Codes follow the reference rule set (1–8). The numeric code is an
/// identity only; weights are never derived from it; they come from
/// explicit coefficient-table lookups keyed by the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Roads, rail and other infrastructure (code 1).
    Infrastructure,
    /// Dense built-up area (code 2).
    Urban,
    /// Low-density built-up area (code 3).
    SemiUrban,
    /// Parks and recreation (code 4).
    Recreation,
    /// Agricultural land (code 5).
    Agriculture,
    /// Nature reserves, forest, heath (code 6).
    Nature,
    /// Inland water (code 7).
    Water,
    /// Sea (code 8).
    Sea,
}

impl Category {
    /// Number of defined categories.
    pub const COUNT: usize = 8;

    /// All categories in code order.
    pub const ALL: [Category; Self::COUNT] = [
        Self::Infrastructure,
        Self::Urban,
        Self::SemiUrban,
        Self::Recreation,
        Self::Agriculture,
        Self::Nature,
        Self::Water,
        Self::Sea,
    ];

    /// The canonical code (1–8) of this category.
    pub fn code(self) -> u8 {
        match self {
            Self::Infrastructure => 1,
            Self::Urban => 2,
            Self::SemiUrban => 3,
            Self::Recreation => 4,
            Self::Agriculture => 5,
            Self::Nature => 6,
            Self::Water => 7,
            Self::Sea => 8,
        }
    }

    /// Dense zero-based slot, used for table storage only.
    pub fn index(self) -> usize {
        self.code() as usize - 1
    }

    /// Look up a category by its canonical code.
    ///
    /// Accepts any integer width so raster values can be checked before
    /// narrowing; anything outside 1–8 is rejected.
    pub fn from_code(code: i64) -> Result<Self, CategoryError> {
        match code {
            1 => Ok(Self::Infrastructure),
            2 => Ok(Self::Urban),
            3 => Ok(Self::SemiUrban),
            4 => Ok(Self::Recreation),
            5 => Ok(Self::Agriculture),
            6 => Ok(Self::Nature),
            7 => Ok(Self::Water),
            8 => Ok(Self::Sea),
            other => Err(CategoryError::UnknownCode { code: other }),
        }
    }

    /// Look up a category by its lowercase name (`"semi-urban"`, `"sea"`, ...).
    pub fn from_name(name: &str) -> Result<Self, CategoryError> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CategoryError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Human-readable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Urban => "urban",
            Self::SemiUrban => "semi-urban",
            Self::Recreation => "recreation",
            Self::Agriculture => "agriculture",
            Self::Nature => "nature",
            Self::Water => "water",
            Self::Sea => "sea",
        }
    }

    /// Returns `true` for the two categories a cell can transition into.
    pub fn is_target(self) -> bool {
        matches!(self, Self::Urban | Self::SemiUrban)
    }
}

impl TryFrom<u8> for Category {
    type Error = CategoryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(code))
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c.code()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A category a cell may transition into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Conversion to [`Category::Urban`].
    Urban,
    /// Conversion to [`Category::SemiUrban`].
    SemiUrban,
}

impl Target {
    /// Both targets, urban first.
    pub const ALL: [Target; 2] = [Self::Urban, Self::SemiUrban];

    /// The category a cell holds after this transition.
    pub fn category(self) -> Category {
        match self {
            Self::Urban => Category::Urban,
            Self::SemiUrban => Category::SemiUrban,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.category().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn codes_are_one_through_eight() {
        let codes: Vec<u8> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn index_is_dense() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(
            Category::from_code(0),
            Err(CategoryError::UnknownCode { code: 0 })
        );
        assert!(Category::from_code(9).is_err());
        assert!(Category::from_code(-1).is_err());
        assert!(Category::try_from(99u8).is_err());
    }

    #[test]
    fn names_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_name(c.name()), Ok(c));
        }
        assert_eq!(Category::from_name(" Semi-Urban "), Ok(Category::SemiUrban));
        assert!(Category::from_name("suburb").is_err());
    }

    #[test]
    fn only_urban_and_semi_urban_are_targets() {
        let targets: Vec<Category> = Category::ALL.into_iter().filter(|c| c.is_target()).collect();
        assert_eq!(targets, vec![Category::Urban, Category::SemiUrban]);
        assert_eq!(Target::Urban.category(), Category::Urban);
        assert_eq!(Target::SemiUrban.category(), Category::SemiUrban);
    }

    proptest! {
        #[test]
        fn from_code_accepts_exactly_defined_codes(code in -20i64..30) {
            let parsed = Category::from_code(code);
            prop_assert_eq!(parsed.is_ok(), (1..=8).contains(&code));
            if let Ok(c) = parsed {
                prop_assert_eq!(i64::from(c.code()), code);
            }
        }
    }
}
