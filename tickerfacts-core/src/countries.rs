//! Country-name normalization table.
//!
//! Providers are inconsistent about country vocabulary ("USA", "U.S.",
//! "Korea, Republic of", ...). The map folds known variants into one
//! canonical display name; anything not in the table passes through
//! unchanged.

use std::collections::BTreeMap;

/// Default variant → canonical pairs, covering the spellings Yahoo has been
/// observed to return.
const DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("U.S.", "United States"),
    ("U.S.A.", "United States"),
    ("United States of America", "United States"),
    ("UK", "United Kingdom"),
    ("U.K.", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("Korea, Republic of", "South Korea"),
    ("Republic of Korea", "South Korea"),
    ("Korea", "South Korea"),
    ("Russian Federation", "Russia"),
    ("Viet Nam", "Vietnam"),
    ("Taiwan, Province of China", "Taiwan"),
    ("Hong Kong SAR", "Hong Kong"),
    ("Macao SAR", "Macau"),
    ("Czechia", "Czech Republic"),
    ("UAE", "United Arab Emirates"),
    ("Holland", "Netherlands"),
    ("The Netherlands", "Netherlands"),
];

/// Static mapping from provider-vocabulary country strings to display names.
#[derive(Debug, Clone)]
pub struct CountryMap {
    entries: BTreeMap<String, String>,
}

impl CountryMap {
    /// Build a map from explicit pairs (used by tests and callers with their
    /// own vocabulary).
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Normalize a raw provider country string.
    ///
    /// Known variants map to their canonical name; unknown strings are
    /// returned unchanged.
    pub fn normalize(&self, raw: &str) -> String {
        match self.entries.get(raw) {
            Some(canonical) => canonical.clone(),
            None => raw.to_string(),
        }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CountryMap {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_PAIRS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_variant_is_mapped() {
        let map = CountryMap::default();
        assert_eq!(map.normalize("USA"), "United States");
        assert_eq!(map.normalize("Korea, Republic of"), "South Korea");
    }

    #[test]
    fn unknown_country_passes_through() {
        let map = CountryMap::default();
        assert_eq!(map.normalize("Liechtenstein"), "Liechtenstein");
    }

    #[test]
    fn canonical_name_is_stable() {
        // Already-canonical names are not in the table and must not change.
        let map = CountryMap::default();
        assert_eq!(map.normalize("United States"), "United States");
    }

    #[test]
    fn custom_pairs_override_nothing_else() {
        let map = CountryMap::from_pairs([("Eire", "Ireland")]);
        assert_eq!(map.normalize("Eire"), "Ireland");
        assert_eq!(map.normalize("USA"), "USA");
    }
}
