// crates/eclipsedb-core/src/parser.rs

//! # Location Parsing
//!
//! Turns a free-form location string into a [`Location`]. The parser is
//! intentionally forgiving: it aims at matching the eclipse catalog rather
//! than providing precise geocoding. Blank input is the only error; every
//! other ambiguity falls back to a lower-confidence field.

use crate::alias::AliasRegistry;
use crate::error::{EclipseError, Result};
use crate::location::Location;
use crate::postal;
use crate::text::{equals_folded, normalize_token};
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_ABBR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Za-z]{2})$").unwrap());

/// Parse a free-form location string into structured components.
///
/// The heuristics run in a fixed order:
/// 1. An input shaped like a postal code short-circuits through the postal
///    resolver; the comma-split path never sees it.
/// 2. Comma-separated segments are classified right to left as country,
///    then region, then city, matching how "City, State, Country" is
///    conventionally written. City fragments reassemble left to right.
/// 3. A city-less parse falls back to the first segment as city, even when
///    that segment was already consumed as country or region.
/// 4. A trailing two-letter token on the city is peeled off when it names a
///    region and none was captured.
/// 5. A captured region infers its country when none was captured.
/// 6. Country and region are canonicalized once more, and a city that merely
///    restates the region or country is discarded.
///
/// # Errors
///
/// [`EclipseError::EmptyLocation`] when the input is blank or contains only
/// commas and whitespace.
pub fn parse_location(input: &str) -> Result<Location> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(EclipseError::EmptyLocation);
    }

    // Postal code shortcut. The postal field is set from the shape alone;
    // a failed table lookup just leaves region/country empty.
    if postal::is_postal_shape(raw) {
        let (region, country) = match postal::resolve_postal_code(raw) {
            Some((region, country)) => (Some(region.to_string()), Some(country.to_string())),
            None => (None, None),
        };
        return Ok(Location {
            raw: input.to_string(),
            city: None,
            region,
            country,
            postal_code: Some(raw.to_string()),
        });
    }

    let segments: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.is_empty() {
        return Err(EclipseError::EmptyLocation);
    }

    let registry = AliasRegistry::global();
    let mut city: Option<String> = None;
    let mut region: Option<String> = None;
    let mut country: Option<String> = None;

    for segment in segments.iter().rev() {
        let token = normalize_token(segment);
        if country.is_none() {
            if let Some(canonical) = registry.canonical_country(&token) {
                country = Some(canonical.to_string());
                continue;
            }
        }
        if region.is_none() {
            if let Some((canonical, inferred)) = registry.canonical_region(&token) {
                region = Some(canonical.to_string());
                if country.is_none() {
                    country = inferred.map(str::to_string);
                }
                continue;
            }
        }
        city = Some(match city {
            Some(rest) => format!("{segment} {rest}"),
            None => (*segment).to_string(),
        });
    }

    // A parse where every segment was consumed as country/region still needs
    // a city guess; reusing the first segment is the only case where city may
    // overlap a broader field.
    if city.is_none() {
        city = segments.first().map(|segment| (*segment).to_string());
    }

    // Peel a trailing state/province abbreviation off the city ("Austin TX").
    if region.is_none() {
        if let Some(current) = city.clone() {
            if let Some(candidate) = TRAILING_ABBR.captures(&current).and_then(|c| c.get(1)) {
                if let Some((canonical, inferred)) =
                    registry.canonical_region(&normalize_token(candidate.as_str()))
                {
                    region = Some(canonical.to_string());
                    let stripped = current[..candidate.start()]
                        .trim_matches(|c: char| c == ',' || c == ' ');
                    city = (!stripped.is_empty()).then(|| stripped.to_string());
                    if country.is_none() {
                        country = inferred.map(str::to_string);
                    }
                }
            }
        }
    }

    // A bare region mention still pins down a country when the tables know
    // which one it belongs to.
    if country.is_none() {
        if let Some(current) = &region {
            if let Some((_, Some(inferred))) = registry.canonical_region(current) {
                country = Some(inferred.to_string());
            }
        }
    }

    if let Some(current) = &city {
        let trimmed = current.trim();
        city = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
    if let (Some(c), Some(r)) = (&city, &region) {
        if equals_folded(c, r) {
            city = None;
        }
    }
    if let (Some(c), Some(co)) = (&city, &country) {
        if equals_folded(c, co) {
            city = None;
        }
    }

    let country = country.map(|c| registry.normalize_country(&c));
    let region = region.map(|r| registry.normalize_region(&r));

    Ok(Location {
        raw: input.to_string(),
        city,
        region,
        country,
        postal_code: None,
    })
}
