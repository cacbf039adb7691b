// crates/eclipsedb-core/src/matcher.rs

//! # Visibility Matching
//!
//! Decides whether a structured [`Location`] satisfies an event's
//! [`VisibilityWindow`], and selects the next qualifying event from a
//! date-ordered catalog.
//!
//! Matching is token-overlap based rather than exact field equality: the
//! window's country list acts as a coarse gate when present, the region list
//! is the refining signal, and macro-region labels match purely through
//! token overlap. That way "North America" on a window matches a user who
//! typed "USA" without either side holding the literal string of the other.

use crate::location::Location;
use crate::model::{EclipseEvent, VisibilityWindow};
use chrono::NaiveDate;
use std::collections::HashSet;

fn lowercase_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

/// Whether a single visibility window matches the location.
///
/// A window with neither countries nor regions matches every location,
/// modeling catalog entries whose visibility is effectively global.
pub fn window_matches(window: &VisibilityWindow, location: &Location) -> bool {
    let location_tokens = location.token_set();

    let country_tokens = lowercase_set(&window.countries);
    let region_tokens = lowercase_set(&window.regions);

    // Country match is optional if the window omits countries, otherwise
    // ensure overlap before region refinement runs at all.
    if !country_tokens.is_empty() {
        match &location.country {
            Some(country) => {
                if !country_tokens.contains(&country.to_lowercase())
                    && location_tokens.is_disjoint(&country_tokens)
                {
                    return false;
                }
            }
            // No explicit country supplied by the user; rely on token
            // overlap alone.
            None => {
                if location_tokens.is_disjoint(&country_tokens) {
                    return false;
                }
            }
        }
    }

    if region_tokens.is_empty() {
        return true;
    }

    if let Some(region) = &location.region {
        if region_tokens.contains(&region.to_lowercase()) {
            return true;
        }
    }
    if !location_tokens.is_disjoint(&region_tokens) {
        return true;
    }

    // A country-level match suffices when the user gave no finer region.
    if location.region.is_none() && !country_tokens.is_empty() {
        if let Some(country) = &location.country {
            if country_tokens.contains(&country.to_lowercase()) {
                return true;
            }
        }
    }

    false
}

/// Whether any of the event's windows matches the location.
pub fn is_visible_from(event: &EclipseEvent, location: &Location) -> bool {
    event
        .visibility
        .iter()
        .any(|window| window_matches(window, location))
}

/// The first window on the event that matches, in the event's own order.
/// Useful for building a human-readable visibility note.
pub fn matching_window<'a>(
    event: &'a EclipseEvent,
    location: &Location,
) -> Option<&'a VisibilityWindow> {
    event
        .visibility
        .iter()
        .find(|window| window_matches(window, location))
}

/// Scan a date-ascending event sequence and return the first event on or
/// after `reference_date` that is visible from the location. The input is
/// assumed pre-sorted; no sorting happens here.
pub fn next_visible_event<'a>(
    events: &'a [EclipseEvent],
    location: &Location,
    reference_date: NaiveDate,
) -> Option<&'a EclipseEvent> {
    events
        .iter()
        .filter(|event| event.occurs_on >= reference_date)
        .find(|event| is_visible_from(event, location))
}

/// The next visible solar and lunar eclipse, as a pair.
pub fn find_next_eclipses<'a>(
    solar: &'a [EclipseEvent],
    lunar: &'a [EclipseEvent],
    location: &Location,
    reference_date: NaiveDate,
) -> (Option<&'a EclipseEvent>, Option<&'a EclipseEvent>) {
    (
        next_visible_event(solar, location, reference_date),
        next_visible_event(lunar, location, reference_date),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EclipseKind;
    use crate::parser::parse_location;

    fn event(date: (i32, u32, u32), windows: Vec<VisibilityWindow>) -> EclipseEvent {
        EclipseEvent {
            occurs_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            kind: EclipseKind::Solar,
            subtype: "Total".to_string(),
            title: "Test Eclipse".to_string(),
            visibility: windows,
            peak_description: String::new(),
        }
    }

    fn window(countries: &[&str], regions: &[&str]) -> VisibilityWindow {
        VisibilityWindow::new(
            countries.iter().copied(),
            regions.iter().copied(),
            "",
        )
    }

    #[test]
    fn macro_region_label_matches_through_token_overlap() {
        let location = parse_location("Austin, TX, USA").unwrap();
        // "North America" never appears literally in the location.
        assert!(window_matches(&window(&[], &["North America"]), &location));
    }

    #[test]
    fn empty_window_matches_everything() {
        let empty = window(&[], &[]);
        assert!(window_matches(&empty, &parse_location("Tokyo, Japan").unwrap()));
        // Even a location with nothing but raw city text.
        assert!(window_matches(
            &empty,
            &parse_location("Shire of Hobbiton").unwrap()
        ));
    }

    #[test]
    fn country_gate_rejects_non_overlapping_locations() {
        let location = parse_location("Berlin, Germany").unwrap();
        assert!(!window_matches(&window(&["Chile"], &[]), &location));
        assert!(window_matches(&window(&["Germany"], &[]), &location));
        // Alias overlap passes the gate too.
        let by_alias = parse_location("usa").unwrap();
        assert!(window_matches(&window(&["United States"], &[]), &by_alias));
    }

    #[test]
    fn window_gate_rejects_region_only_location() {
        // Deliberate short-circuit: a user who only gives a region is
        // excluded by a window that lists countries with no token overlap,
        // even though the region tokens would match.
        let location = Location {
            raw: "Atlantica".to_string(),
            region: Some("Atlantica".to_string()),
            ..Location::default()
        };
        let w = window(&["Chile"], &["Atlantica"]);
        assert!(!window_matches(&w, &location));
    }

    #[test]
    fn region_refinement_requires_overlap() {
        let texas = parse_location("Austin, TX, USA").unwrap();
        assert!(window_matches(
            &window(&["United States"], &["Texas", "Oklahoma"]),
            &texas
        ));
        assert!(!window_matches(
            &window(&["United States"], &["Maine", "Vermont"]),
            &texas
        ));
    }

    #[test]
    fn country_level_match_suffices_without_user_region() {
        let location = parse_location("usa").unwrap();
        assert_eq!(location.region, None);
        assert!(window_matches(
            &window(&["United States"], &["Texas"]),
            &location
        ));
    }

    #[test]
    fn empty_strings_in_token_lists_never_match() {
        let location = parse_location("Austin, TX, USA").unwrap();
        assert!(!window_matches(&window(&[""], &[]), &location));
        assert!(window_matches(&window(&["United States", ""], &[]), &location));
    }

    #[test]
    fn matching_window_returns_first_in_event_order() {
        let location = parse_location("Austin, TX, USA").unwrap();
        let e = event(
            (2026, 8, 12),
            vec![
                window(&["Chile"], &[]),
                window(&[], &["North America"]),
                window(&[], &[]),
            ],
        );
        let selected = matching_window(&e, &location).unwrap();
        assert_eq!(selected.regions, vec!["North America".to_string()]);
    }

    #[test]
    fn next_visible_event_skips_past_events() {
        let location = parse_location("Austin, TX, USA").unwrap();
        let events = vec![
            event((2024, 4, 8), vec![window(&[], &["North America"])]),
            event((2026, 8, 12), vec![window(&[], &["Europe"])]),
            event((2027, 8, 2), vec![window(&[], &["North America"])]),
        ];
        let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let next = next_visible_event(&events, &location, reference).unwrap();
        assert_eq!(next.occurs_on, NaiveDate::from_ymd_opt(2027, 8, 2).unwrap());
    }

    #[test]
    fn no_event_on_or_after_reference_yields_none() {
        let location = parse_location("Austin, TX, USA").unwrap();
        let events = vec![event((2024, 4, 8), vec![window(&[], &[])])];
        let reference = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(next_visible_event(&events, &location, reference).is_none());
    }

    #[test]
    fn event_on_the_reference_date_counts() {
        let location = parse_location("Austin, TX, USA").unwrap();
        let events = vec![event((2026, 8, 12), vec![window(&[], &[])])];
        let reference = NaiveDate::from_ymd_opt(2026, 8, 12).unwrap();
        assert!(next_visible_event(&events, &location, reference).is_some());
    }

    #[test]
    fn find_next_eclipses_pairs_catalogs_independently() {
        let location = parse_location("Austin, TX, USA").unwrap();
        let solar = vec![event((2027, 8, 2), vec![window(&[], &["North America"])])];
        let lunar = vec![event((2026, 3, 3), vec![window(&[], &["Europe"])])];
        let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let (next_solar, next_lunar) = find_next_eclipses(&solar, &lunar, &location, reference);
        assert!(next_solar.is_some());
        assert!(next_lunar.is_none());
    }
}
