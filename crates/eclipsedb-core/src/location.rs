// crates/eclipsedb-core/src/location.rs

use crate::alias::AliasRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A structured location derived from free-form user input.
///
/// `raw` always preserves the original input. The remaining fields are
/// best-effort: `region` and `country` are canonical display names when the
/// input was recognized, and `postal_code` is set only when the entire input
/// was a postal code. At least one field besides `raw` must be present for
/// the location to be usable; parsing guarantees this, but consumers of
/// hand-built values should check [`Location::is_usable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub raw: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl Location {
    /// Whether any field beyond the raw input was extracted.
    pub fn is_usable(&self) -> bool {
        self.city.is_some()
            || self.region.is_some()
            || self.country.is_some()
            || self.postal_code.is_some()
    }

    /// The set of lowercase words usable for visibility matching: the city
    /// and its words, the region and its words, the country plus every alias
    /// that canonicalizes to it and every macro-region label associated with
    /// it (so "United States" contributes "north america").
    ///
    /// The derivation is pure and recomputed per match; it is intentionally
    /// never cached on the location.
    pub fn token_set(&self) -> HashSet<String> {
        let registry = AliasRegistry::global();
        let mut tokens = HashSet::new();
        if let Some(city) = &self.city {
            for word in city.split_whitespace() {
                tokens.insert(word.to_lowercase());
            }
            tokens.insert(city.to_lowercase());
        }
        if let Some(region) = &self.region {
            tokens.insert(region.to_lowercase());
            for word in region.split_whitespace() {
                tokens.insert(word.to_lowercase());
            }
        }
        if let Some(country) = &self.country {
            tokens.insert(country.to_lowercase());
            for alias in registry.country_aliases(country) {
                tokens.insert(alias.to_string());
            }
            for label in registry.macro_regions_for(country) {
                tokens.insert((*label).to_string());
            }
        }
        tokens
    }

    /// Joins the non-empty city/region/country components for display.
    pub fn formatted(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
