use crate::error::SiftError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Disallowed oils and additives, matched case-insensitively on word boundaries.
///
/// Misspellings included; keep the list verbatim so results stay comparable
/// across runs.
pub const DENYLIST: &[&str] = &[
    "GRAPESEED OIL",
    "SUNFLOWER OIL",
    "SOYBEAN OIL",
    "COTTONSEED OIL",
    "CORN OIL",
    "CANOLA OIL",
    "ORCANOLA OIL",
    "CANOLA AND/OR SUNFLOWER OIL",
    "NON-GMO EXPELLER PRESSED CANOLA OIL",
    "NON-HYDROGENATED CANOLA OIL",
    "ORGANIC EXPELLER PRESSED SOYBEAN OIL",
    "SOYBEAN OILS",
    "CANOLA OILS",
    "VEGATABLE OIL",
    "VEGATABLE OILS",
    "FRACTIONATED PALM KERNEL OIL",
    "FRACTIONATED PALM KERNEL OILS",
    "HYDROGENATED PALM KERNEL OIL",
    "PALM KERNEL OILS",
    "PALM KERNEL OIL",
    "HYDROGENATED",
    "COTTONSEED OILS",
    "COTTONSEED",
    "CORN SYRUP",
    "PALM OIL",
    "VEGETABLE OIL",
    "VEGETABLE OILS",
    "FD & C RED#40",
];

static STANDARD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&build_pattern(DENYLIST)).expect("built-in denylist is a valid pattern")
});

/// `(?i)\b(a|b|...)\b` with every phrase escaped
fn build_pattern(phrases: &[&str]) -> String {
    let alternatives: Vec<String> = phrases.iter().map(|p| regex::escape(p)).collect();
    format!(r"(?i)\b({})\b", alternatives.join("|"))
}

/// Rejects ingredient text that mentions any denylisted phrase
#[derive(Debug, Clone)]
pub struct IngredientFilter {
    regex: Regex,
}

impl IngredientFilter {
    /// Filter over a custom phrase list
    pub fn new(phrases: &[&str]) -> Result<Self, SiftError> {
        Ok(IngredientFilter {
            regex: Regex::new(&build_pattern(phrases))?,
        })
    }

    /// Filter over the built-in [`DENYLIST`]
    pub fn standard() -> Self {
        IngredientFilter {
            regex: STANDARD_REGEX.clone(),
        }
    }

    pub fn is_disallowed(&self, ingredients: &str) -> bool {
        self.regex.is_match(ingredients)
    }

    /// The first disallowed phrase found in `ingredients`, as written there
    pub fn find<'t>(&self, ingredients: &'t str) -> Option<&'t str> {
        self.regex.find(ingredients).map(|m| m.as_str())
    }
}

impl Default for IngredientFilter {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_inside_longer_list() {
        let filter = IngredientFilter::standard();
        assert!(filter.is_disallowed("WATER, CANOLA OIL, SALT"));
        assert_eq!(filter.find("WATER, CANOLA OIL, SALT"), Some("CANOLA OIL"));
    }

    #[test]
    fn test_case_insensitive() {
        let filter = IngredientFilter::standard();
        assert!(filter.is_disallowed("sugar, Corn Syrup, salt"));
        assert!(filter.is_disallowed("partially hydrogenated soybean oil"));
        assert!(filter.is_disallowed("COLOR (fd & c red#40)"));
    }

    #[test]
    fn test_whole_words_only() {
        let filter = IngredientFilter::standard();
        assert!(!filter.is_disallowed("WATER, SALT, OLIVE OIL"));
        assert!(!filter.is_disallowed("NONHYDROGENATEDX FAT"));
        assert!(!filter.is_disallowed("CORN OILY FLAVOR"));
        assert!(!filter.is_disallowed("POPCORN, SEA SALT"));
    }

    #[test]
    fn test_every_phrase_is_rejected() {
        let filter = IngredientFilter::standard();
        for phrase in DENYLIST {
            let text = format!("WATER, {}, SALT", phrase.to_lowercase());
            assert!(filter.is_disallowed(&text), "{} should be rejected", phrase);
        }
    }

    #[test]
    fn test_custom_phrases_are_escaped() {
        let filter = IngredientFilter::new(&["HIGH-FRUCTOSE SYRUP", "E.102"]).unwrap();
        assert!(filter.is_disallowed("water, high-fructose syrup"));
        assert!(filter.is_disallowed("COLOR: E.102"));
        assert!(!filter.is_disallowed("COLOR: E5102"));
        assert!(!filter.is_disallowed("CANOLA OIL"));
    }
}
