// crates/eclipsedb-core/src/alias.rs

//! # Alias Registry
//!
//! Static mapping tables for country name variants, sub-national
//! region/province names and abbreviations, and broader macro-region labels.
//! The tables are built once behind a single-initialization guard and are
//! read-only afterwards, so the registry is safe to share across threads
//! without locking.
//!
//! Lookups are whitespace-normalized and folded before table access;
//! unmatched input returns `None`, never an error. Callers fall back to
//! treating the raw string as city text.

use crate::text::{fold_key, normalize_token};
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Canonical country list and aliases
// ---------------------------------------------------------------------------

const COUNTRY_CANONICAL: &[(&str, &str)] = &[
    ("united states", "United States"),
    ("united states of america", "United States"),
    ("usa", "United States"),
    ("us", "United States"),
    ("canada", "Canada"),
    ("mexico", "Mexico"),
    ("spain", "Spain"),
    ("france", "France"),
    ("united kingdom", "United Kingdom"),
    ("uk", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("ireland", "Ireland"),
    ("portugal", "Portugal"),
    ("brazil", "Brazil"),
    ("argentina", "Argentina"),
    ("chile", "Chile"),
    ("peru", "Peru"),
    ("greenland", "Greenland"),
    ("iceland", "Iceland"),
    ("morocco", "Morocco"),
    ("algeria", "Algeria"),
    ("libya", "Libya"),
    ("egypt", "Egypt"),
    ("saudi arabia", "Saudi Arabia"),
    ("uae", "United Arab Emirates"),
    ("united arab emirates", "United Arab Emirates"),
    ("oman", "Oman"),
    ("yemen", "Yemen"),
    ("india", "India"),
    ("bangladesh", "Bangladesh"),
    ("china", "China"),
    ("japan", "Japan"),
    ("south korea", "South Korea"),
    ("korea", "South Korea"),
    ("pakistan", "Pakistan"),
    ("nigeria", "Nigeria"),
    ("kenya", "Kenya"),
    ("south africa", "South Africa"),
    ("germany", "Germany"),
    ("italy", "Italy"),
    ("tunisia", "Tunisia"),
    ("new zealand", "New Zealand"),
    ("australia", "Australia"),
];

// Countries grouped into broader geographic tokens for fuzzy matching.
// Labels are stored lowercase because they only ever feed token sets.
const COUNTRY_MACRO_REGIONS: &[(&str, &[&str])] = &[
    ("United States", &["north america"]),
    ("Canada", &["north america"]),
    ("Mexico", &["north america"]),
    ("Greenland", &["north america", "arctic"]),
    ("Iceland", &["europe", "north atlantic"]),
    ("Spain", &["europe"]),
    ("France", &["europe"]),
    ("United Kingdom", &["europe"]),
    ("Ireland", &["europe"]),
    ("Portugal", &["europe"]),
    ("Germany", &["europe"]),
    ("Italy", &["europe"]),
    ("Morocco", &["africa", "north africa"]),
    ("Algeria", &["africa", "north africa"]),
    ("Libya", &["africa", "north africa"]),
    ("Tunisia", &["africa", "north africa"]),
    ("Egypt", &["africa", "north africa", "middle east"]),
    ("Saudi Arabia", &["asia", "middle east"]),
    ("United Arab Emirates", &["asia", "middle east"]),
    ("Oman", &["asia", "middle east"]),
    ("Yemen", &["asia", "middle east"]),
    ("India", &["asia", "south asia"]),
    ("Bangladesh", &["asia", "south asia"]),
    ("Pakistan", &["asia", "south asia"]),
    ("China", &["asia", "east asia"]),
    ("Japan", &["asia", "east asia"]),
    ("South Korea", &["asia", "east asia"]),
    ("Kenya", &["africa", "east africa"]),
    ("Nigeria", &["africa", "west africa"]),
    ("South Africa", &["africa"]),
    ("Brazil", &["south america"]),
    ("Argentina", &["south america"]),
    ("Chile", &["south america"]),
    ("Australia", &["oceania"]),
    ("New Zealand", &["oceania"]),
];

// ---------------------------------------------------------------------------
// Regions, states, and provinces with aliases
// ---------------------------------------------------------------------------

const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("Puerto Rico", "PR"),
];

const CANADA_PROVINCES: &[(&str, &str)] = &[
    ("Alberta", "AB"),
    ("British Columbia", "BC"),
    ("Manitoba", "MB"),
    ("New Brunswick", "NB"),
    ("Newfoundland and Labrador", "NL"),
    ("Northwest Territories", "NT"),
    ("Nova Scotia", "NS"),
    ("Nunavut", "NU"),
    ("Ontario", "ON"),
    ("Prince Edward Island", "PE"),
    ("Quebec", "QC"),
    ("Saskatchewan", "SK"),
    ("Yukon", "YT"),
];

const MEXICO_STATES: &[(&str, &str)] = &[
    ("Sinaloa", "SIN"),
    ("Coahuila", "COA"),
    ("Nuevo Leon", "NLE"),
    ("Durango", "DUR"),
];

const SPAIN_REGIONS: &[(&str, &str)] = &[
    ("Galicia", ""),
    ("Asturias", ""),
    ("Castile and Leon", ""),
    ("Basque Country", ""),
    ("Navarre", ""),
    ("Aragon", ""),
    ("Catalonia", ""),
];

const AUSTRALIA_STATES: &[(&str, &str)] = &[
    ("New South Wales", "NSW"),
    ("Queensland", "QLD"),
    ("Northern Territory", "NT"),
    ("Western Australia", "WA"),
    ("Victoria", "VIC"),
    ("South Australia", "SA"),
    ("Tasmania", "TAS"),
];

const NEW_ZEALAND_REGIONS: &[(&str, &str)] = &[
    ("North Island", ""),
    ("South Island", ""),
    ("Southland", ""),
    ("Otago", ""),
];

// Region-level labels that are not tied to a single country. They are useful
// for token-overlap matching but are never assigned as a location's primary
// region by the parser unless the user typed them.
const MACRO_LABELS: &[&str] = &[
    "North America",
    "South America",
    "Central America",
    "Europe",
    "Western Europe",
    "Eastern Europe",
    "Africa",
    "North Africa",
    "East Africa",
    "West Africa",
    "Middle East",
    "South Asia",
    "East Asia",
    "Oceania",
    "Arctic",
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Pure-lookup registry over the static tables above. No state mutation
/// after construction; obtain the shared instance via [`AliasRegistry::global`].
pub struct AliasRegistry {
    countries: HashMap<&'static str, &'static str>,
    regions: HashMap<String, (&'static str, Option<&'static str>)>,
    macro_regions: HashMap<&'static str, &'static [&'static str]>,
}

static REGISTRY: Lazy<AliasRegistry> = Lazy::new(AliasRegistry::build);

impl AliasRegistry {
    /// The process-wide registry, built on first access.
    pub fn global() -> &'static AliasRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        let countries = COUNTRY_CANONICAL.iter().copied().collect();

        let mut regions: HashMap<String, (&'static str, Option<&'static str>)> = HashMap::new();
        let mut add = |entries: &'static [(&'static str, &'static str)],
                       country: Option<&'static str>| {
            for (name, abbr) in entries {
                regions.insert(fold_key(name), (*name, country));
                if !abbr.is_empty() {
                    regions.insert(fold_key(abbr), (*name, country));
                }
            }
        };
        // Insertion order matters: a later table wins a colliding
        // abbreviation ("wa", "nt", "sa").
        add(US_STATES, Some("United States"));
        add(CANADA_PROVINCES, Some("Canada"));
        add(MEXICO_STATES, Some("Mexico"));
        add(SPAIN_REGIONS, Some("Spain"));
        add(AUSTRALIA_STATES, Some("Australia"));
        add(NEW_ZEALAND_REGIONS, Some("New Zealand"));
        for label in MACRO_LABELS {
            regions.insert(fold_key(label), (*label, None));
        }

        let macro_regions = COUNTRY_MACRO_REGIONS.iter().copied().collect();

        AliasRegistry {
            countries,
            regions,
            macro_regions,
        }
    }

    /// Resolve a country name or abbreviation to its canonical display name.
    pub fn canonical_country(&self, name: &str) -> Option<&'static str> {
        self.countries.get(normalize_token(name).as_str()).copied()
    }

    /// Resolve a region/province name or abbreviation to its canonical
    /// display name plus the country it belongs to, when one can be inferred.
    /// Macro-region labels resolve with no country.
    pub fn canonical_region(&self, name: &str) -> Option<(&'static str, Option<&'static str>)> {
        self.regions.get(normalize_token(name).as_str()).copied()
    }

    /// Broad geographic labels associated with a canonical country name.
    pub fn macro_regions_for(&self, country: &str) -> &[&'static str] {
        self.macro_regions.get(country).copied().unwrap_or(&[])
    }

    /// All alias strings that canonicalize to the given country.
    pub fn country_aliases<'a>(
        &'a self,
        canonical: &'a str,
    ) -> impl Iterator<Item = &'static str> + 'a {
        self.countries
            .iter()
            .filter(move |(_, v)| **v == canonical)
            .map(|(k, _)| *k)
    }

    /// Canonicalize a country name, or return the trimmed input unchanged
    /// when it is not recognized. Idempotent on canonical names.
    pub fn normalize_country(&self, name: &str) -> String {
        match self.canonical_country(name) {
            Some(canonical) => canonical.to_string(),
            None => name.trim().to_string(),
        }
    }

    /// Canonicalize a region name, or return the trimmed input unchanged.
    /// Idempotent on canonical names.
    pub fn normalize_region(&self, name: &str) -> String {
        match self.canonical_region(name) {
            Some((canonical, _)) => canonical.to_string(),
            None => name.trim().to_string(),
        }
    }
}
