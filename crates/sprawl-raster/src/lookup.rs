//! Nominal lookup from raw raster codes to categories.
//!
//! A table is an ordered list of rules. Each rule maps either a single
//! code or an inclusive `[lo,hi]` range to one category; the first rule
//! that matches a code wins. Text form, one rule per line:
//!
//! ```text
//! # raw code -> category
//! 1        2
//! [10,19]  agriculture
//! 255      sea
//! ```
//!
//! The right-hand side is a category code (1-8) or a category name.

use std::fmt;
use std::io::Read;

use indexmap::IndexMap;
use sprawl_core::Category;

use crate::error::RasterError;

/// Left-hand side of a lookup rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// Matches exactly one code.
    Exact(i64),
    /// Matches every code in `lo..=hi`.
    Range {
        /// Inclusive lower bound.
        lo: i64,
        /// Inclusive upper bound.
        hi: i64,
    },
}

impl LookupKey {
    /// Whether `code` falls under this key.
    pub fn matches(self, code: i64) -> bool {
        match self {
            Self::Exact(k) => k == code,
            Self::Range { lo, hi } => (lo..=hi).contains(&code),
        }
    }

    fn parse(token: &str) -> Result<Self, String> {
        if let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            let (lo, hi) = inner
                .split_once(',')
                .ok_or_else(|| format!("range '{token}' needs the form [lo,hi]"))?;
            let lo = parse_int(lo.trim())?;
            let hi = parse_int(hi.trim())?;
            if lo > hi {
                return Err(format!("range '{token}' is empty"));
            }
            return Ok(Self::Range { lo, hi });
        }
        parse_int(token).map(Self::Exact)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(k) => write!(f, "{k}"),
            Self::Range { lo, hi } => write!(f, "[{lo},{hi}]"),
        }
    }
}

/// Ordered raw-code → category rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupTable {
    rules: IndexMap<LookupKey, Category>,
}

impl LookupTable {
    /// An empty table; every code is unmapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps codes 1-8 onto themselves.
    pub fn identity() -> Self {
        let mut table = Self::new();
        for category in Category::ALL {
            table.insert(LookupKey::Exact(i64::from(category.code())), category);
        }
        table
    }

    /// Add a rule at the end, or re-target an existing key in place.
    /// Returns the category the key mapped to before.
    pub fn insert(&mut self, key: LookupKey, category: Category) -> Option<Category> {
        self.rules.insert(key, category)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: LookupKey, category: Category) -> Self {
        self.insert(key, category);
        self
    }

    /// The category for `code`, from the first matching rule.
    pub fn lookup(&self, code: i64) -> Option<Category> {
        self.rules
            .iter()
            .find(|(key, _)| key.matches(code))
            .map(|(_, &category)| category)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in match order.
    pub fn iter(&self) -> impl Iterator<Item = (LookupKey, Category)> + '_ {
        self.rules.iter().map(|(&k, &c)| (k, c))
    }

    /// Parse the text form. Blank lines and `#` comments are ignored;
    /// a key listed twice is an error.
    pub fn parse(text: &str) -> Result<Self, RasterError> {
        let mut table = Self::new();
        for (i, raw) in text.lines().enumerate() {
            let line = match raw.split_once('#') {
                Some((before, _)) => before,
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }
            let err = |detail: String| RasterError::MalformedTable { line: i + 1, detail };

            let mut parts = line.split_whitespace();
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(err(format!("expected '<key> <category>', got '{line}'")));
            };
            let key = LookupKey::parse(key).map_err(err)?;
            let category = parse_category(value).map_err(err)?;
            if table.rules.contains_key(&key) {
                return Err(err(format!("key {key} listed twice")));
            }
            table.insert(key, category);
        }
        Ok(table)
    }

    /// Read and parse a table from any `Read` source.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, RasterError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, category) in self.iter() {
            writeln!(f, "{key} {}", category.code())?;
        }
        Ok(())
    }
}

fn parse_int(token: &str) -> Result<i64, String> {
    token
        .parse::<i64>()
        .map_err(|_| format!("'{token}' is not an integer"))
}

fn parse_category(token: &str) -> Result<Category, String> {
    match token.parse::<i64>() {
        Ok(code) => Category::from_code(code).map_err(|e| e.to_string()),
        Err(_) => Category::from_name(token).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identity_maps_all_eight() {
        let table = LookupTable::identity();
        assert_eq!(table.len(), Category::COUNT);
        for category in Category::ALL {
            assert_eq!(table.lookup(i64::from(category.code())), Some(category));
        }
        assert_eq!(table.lookup(0), None);
        assert_eq!(table.lookup(9), None);
    }

    #[test]
    fn parse_codes_names_ranges_and_comments() {
        let text = "\
# header comment
1 2          # inline
[10,19] agriculture

255 sea
";
        let table = LookupTable::parse(text).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup(1), Some(Category::Urban));
        assert_eq!(table.lookup(10), Some(Category::Agriculture));
        assert_eq!(table.lookup(19), Some(Category::Agriculture));
        assert_eq!(table.lookup(20), None);
        assert_eq!(table.lookup(255), Some(Category::Sea));
    }

    #[test]
    fn first_match_wins() {
        let table = LookupTable::new()
            .with(LookupKey::Range { lo: 0, hi: 9 }, Category::Nature)
            .with(LookupKey::Exact(5), Category::Water);
        assert_eq!(table.lookup(5), Some(Category::Nature));
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = LookupTable::parse("1 2\n1 3\n").unwrap_err();
        match err {
            RasterError::MalformedTable { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn unknown_category_rejected() {
        assert!(matches!(
            LookupTable::parse("1 9\n"),
            Err(RasterError::MalformedTable { line: 1, .. })
        ));
        assert!(matches!(
            LookupTable::parse("1 downtown\n"),
            Err(RasterError::MalformedTable { line: 1, .. })
        ));
    }

    #[test]
    fn malformed_ranges_rejected() {
        for bad in ["[5,1] 2", "[5] 2", "[a,b] 2", "1 2 3", "7"] {
            assert!(
                LookupTable::parse(bad).is_err(),
                "'{bad}' should not parse"
            );
        }
    }

    #[test]
    fn display_parses_back() {
        let table = LookupTable::new()
            .with(LookupKey::Range { lo: -3, hi: 0 }, Category::Sea)
            .with(LookupKey::Exact(42), Category::Infrastructure);
        let reparsed = LookupTable::parse(&table.to_string()).unwrap();
        assert_eq!(reparsed, table);
    }

    proptest! {
        #[test]
        fn range_matches_exactly_its_bounds(lo in -1000i64..1000, len in 0i64..100, code in -1200i64..1200) {
            let hi = lo + len;
            let table = LookupTable::new().with(LookupKey::Range { lo, hi }, Category::Water);
            let expected = (lo..=hi).contains(&code).then_some(Category::Water);
            prop_assert_eq!(table.lookup(code), expected);
        }
    }
}
