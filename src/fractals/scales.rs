//! Fractal scale table and lookup
//!
//! The table maps each fractal category to the difficulty scales it occupies.
//! It is embedded from `templates/fractal_data.json` and validated on load:
//! every scale must lie in `0..=100` and belong to at most one category.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::SkillError;

/// Embedded fractal scale table (category name to list of scales).
pub const FRACTAL_DATA_JSON: &str = include_str!("../templates/fractal_data.json");

/// Lowest valid fractal scale.
pub const MIN_SCALE: u8 = 0;

/// Highest valid fractal scale.
pub const MAX_SCALE: u8 = 100;

/// Result of looking up a scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleLookup {
    /// The scale belongs to a known category.
    Known {
        /// Parsed scale value.
        scale: u8,
        /// Category name from the table.
        category: String,
    },
    /// The input was not a number, was out of range, or no category covers it.
    Unknown {
        /// The input as received, trimmed.
        input: String,
    },
}

impl ScaleLookup {
    /// Token used in terse mode when the scale is unknown.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Returns the bare category name, or `"Unknown"`.
    pub fn terse(&self) -> &str {
        match self {
            Self::Known { category, .. } => category.as_str(),
            Self::Unknown { .. } => Self::UNKNOWN,
        }
    }

    /// Returns a full sentence suitable for speaking to the user.
    pub fn verbose(&self) -> String {
        match self {
            Self::Known { scale, category } => {
                format!("The fractal at scale {scale} is {category}.")
            }
            Self::Unknown { input } if input.is_empty() => {
                "No fractal is known to exist at that scale.".to_string()
            }
            Self::Unknown { input } => format!("No fractal is known to exist at scale {input}."),
        }
    }

    /// Returns true if the lookup found a category.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}

impl fmt::Display for ScaleLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.terse())
    }
}

/// Validated mapping between fractal categories and scales.
#[derive(Debug, Clone)]
pub struct ScaleTable {
    categories: BTreeMap<String, Vec<u8>>,
    by_scale: BTreeMap<u8, String>,
}

impl ScaleTable {
    /// Loads the embedded table.
    pub fn load() -> Result<Self, SkillError> {
        Self::from_json(FRACTAL_DATA_JSON)
    }

    /// Builds a table from JSON of the form `{"Category": [1, 2, 3], ...}`.
    ///
    /// Rejects scales outside `0..=100` and scales claimed by two categories.
    /// A scale repeated within one category is accepted once.
    pub fn from_json(json: &str) -> Result<Self, SkillError> {
        let raw: BTreeMap<String, Vec<i64>> = serde_json::from_str(json)
            .map_err(|e| SkillError::InvalidScaleTable(e.to_string()))?;

        let mut categories = BTreeMap::new();
        let mut by_scale: BTreeMap<u8, String> = BTreeMap::new();

        for (category, values) in raw {
            let mut scales = Vec::with_capacity(values.len());
            for value in values {
                let scale = u8::try_from(value)
                    .ok()
                    .filter(|scale| *scale <= MAX_SCALE)
                    .ok_or_else(|| {
                        SkillError::InvalidScaleTable(format!(
                            "scale {value} of {category} is outside {MIN_SCALE}..={MAX_SCALE}"
                        ))
                    })?;

                if let Some(owner) = by_scale.get(&scale) {
                    if owner != &category {
                        return Err(SkillError::InvalidScaleTable(format!(
                            "scale {scale} is claimed by both {owner} and {category}"
                        )));
                    }
                    continue;
                }

                by_scale.insert(scale, category.clone());
                scales.push(scale);
            }
            categories.insert(category, scales);
        }

        Ok(Self {
            categories,
            by_scale,
        })
    }

    /// Returns the category occupying `scale`, if any.
    pub fn category_at(&self, scale: u8) -> Option<&str> {
        self.by_scale.get(&scale).map(String::as_str)
    }

    /// Resolves user-supplied scale text to a category.
    pub fn resolve(&self, input: &str) -> ScaleLookup {
        let input = input.trim();
        let scale = input
            .parse::<i64>()
            .ok()
            .and_then(|value| u8::try_from(value).ok())
            .filter(|scale| *scale <= MAX_SCALE);

        match scale.and_then(|scale| self.category_at(scale).map(|c| (scale, c))) {
            Some((scale, category)) => ScaleLookup::Known {
                scale,
                category: category.to_string(),
            },
            None => ScaleLookup::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Iterates categories in name order with their scales.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.categories
            .iter()
            .map(|(name, scales)| (name.as_str(), scales.as_slice()))
    }

    /// Number of scales covered by the table.
    pub fn len(&self) -> usize {
        self.by_scale.len()
    }

    /// Returns true if no scale is covered.
    pub fn is_empty(&self) -> bool {
        self.by_scale.is_empty()
    }
}

/// Global scale table instance
static SCALE_TABLE: OnceLock<ScaleTable> = OnceLock::new();

/// Returns the embedded scale table, loading it on first use.
pub fn scale_table() -> &'static ScaleTable {
    SCALE_TABLE.get_or_init(|| ScaleTable::load().expect("Failed to load fractal scale table"))
}

/// Resolves a scale against the embedded table.
pub fn resolve_scale(input: &str) -> ScaleLookup {
    scale_table().resolve(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_covers_every_scale_once() {
        let table = ScaleTable::load().unwrap();
        assert_eq!(table.len(), 100);
        for scale in 1..=MAX_SCALE {
            assert!(table.category_at(scale).is_some(), "scale {scale} unmapped");
        }
        let total: usize = table.categories().map(|(_, scales)| scales.len()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn resolves_known_scales() {
        assert_eq!(
            resolve_scale("56"),
            ScaleLookup::Known {
                scale: 56,
                category: "Molten Furnace".to_string()
            }
        );
        assert_eq!(resolve_scale(" 100 ").terse(), "Sunqua Peak");
        assert_eq!(resolve_scale("020").terse(), "Solid Ocean");
    }

    #[test]
    fn invalid_input_is_unknown() {
        for input in ["101", "-1", "abc", "20.5", "", "9999999999999999999999"] {
            let lookup = resolve_scale(input);
            assert!(!lookup.is_known(), "{input} should be unknown");
            assert_eq!(lookup.terse(), "Unknown");
        }
    }

    #[test]
    fn in_range_scale_without_category_is_unknown() {
        // The embedded table starts at scale 1.
        assert_eq!(
            resolve_scale("0"),
            ScaleLookup::Unknown {
                input: "0".to_string()
            }
        );
    }

    #[test]
    fn verbose_phrasing() {
        let table = ScaleTable::from_json(r#"{"Aetherblade": [20]}"#).unwrap();
        assert_eq!(
            table.resolve("20").verbose(),
            "The fractal at scale 20 is Aetherblade."
        );
        assert_eq!(
            table.resolve("banana").verbose(),
            "No fractal is known to exist at scale banana."
        );
        assert_eq!(
            table.resolve("   ").verbose(),
            "No fractal is known to exist at that scale."
        );
    }

    #[test]
    fn rejects_overlapping_categories() {
        let err = ScaleTable::from_json(r#"{"Chaos": [1, 2], "Nightmare": [2, 3]}"#).unwrap_err();
        assert!(matches!(err, SkillError::InvalidScaleTable(_)));
        assert!(err.to_string().contains("scale 2"));
    }

    #[test]
    fn rejects_out_of_range_scales() {
        for json in [r#"{"Chaos": [101]}"#, r#"{"Chaos": [-1]}"#] {
            let err = ScaleTable::from_json(json).unwrap_err();
            assert!(matches!(err, SkillError::InvalidScaleTable(_)));
        }
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ScaleTable::from_json(r#"{"Chaos": "thirteen"}"#).unwrap_err();
        assert!(matches!(err, SkillError::InvalidScaleTable(_)));
    }

    #[test]
    fn repeated_scale_within_category_is_kept_once() {
        let table = ScaleTable::from_json(r#"{"Chaos": [13, 13]}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.categories().next(), Some(("Chaos", &[13_u8][..])));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn in_range_lookup_matches_table(scale in 0_u8..=MAX_SCALE) {
                let table = scale_table();
                let lookup = resolve_scale(&scale.to_string());
                prop_assert_eq!(lookup.terse(), table.category_at(scale).unwrap_or("Unknown"));
                prop_assert_eq!(resolve_scale(&scale.to_string()), lookup);
            }

            #[test]
            fn out_of_range_is_unknown(value in prop_oneof![i64::MIN..0_i64, 101_i64..i64::MAX]) {
                prop_assert!(!resolve_scale(&value.to_string()).is_known());
            }

            #[test]
            fn arbitrary_text_never_panics(s in ".*") {
                let lookup = resolve_scale(&s);
                prop_assert!(!lookup.verbose().is_empty());
            }
        }
    }
}
