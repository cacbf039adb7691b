//! End-to-end flow: free-form text in, matched catalog events out.

use chrono::NaiveDate;
use eclipsedb_core::{
    find_next_eclipses, loader, matching_window, next_visible_event, parse_location, EclipseKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn bundled_catalogs_load_sorted_and_cached() {
    let solar = loader::solar_events().unwrap();
    let lunar = loader::lunar_events().unwrap();
    assert!(!solar.is_empty());
    assert!(!lunar.is_empty());
    assert!(solar.windows(2).all(|w| w[0].occurs_on <= w[1].occurs_on));
    assert!(lunar.iter().all(|e| e.kind == EclipseKind::Lunar));

    // Second access returns the same cached slice.
    let again = loader::solar_events().unwrap();
    assert_eq!(solar.len(), again.len());

    let all = loader::all_events().unwrap();
    assert_eq!(all.len(), solar.len() + lunar.len());
    assert!(all.windows(2).all(|w| w[0].occurs_on <= w[1].occurs_on));
}

#[test]
fn texas_sees_the_2026_total_solar_eclipse_next() {
    let location = parse_location("Austin, TX, USA").unwrap();
    let solar = loader::solar_events().unwrap();
    let lunar = loader::lunar_events().unwrap();

    let (next_solar, next_lunar) = find_next_eclipses(solar, lunar, &location, date(2026, 1, 1));

    // 2026-02-17 tracks over the far southern hemisphere; the August event
    // is the first whose approximated band covers North America.
    let next_solar = next_solar.unwrap();
    assert_eq!(next_solar.occurs_on, date(2026, 8, 12));
    let window = matching_window(next_solar, &location).unwrap();
    assert!(window
        .regions
        .iter()
        .any(|region| region == "North America"));

    // Lunar windows are global, so the nearest upcoming one wins.
    assert_eq!(next_lunar.unwrap().occurs_on, date(2026, 3, 3));
}

#[test]
fn postal_code_input_flows_through_to_matching() {
    let location = parse_location("78701").unwrap();
    assert_eq!(location.region.as_deref(), Some("Texas"));

    let solar = loader::solar_events().unwrap();
    let next = next_visible_event(solar, &location, date(2026, 1, 1)).unwrap();
    assert_eq!(next.occurs_on, date(2026, 8, 12));
}

#[test]
fn global_windows_match_an_unrecognized_city() {
    let location = parse_location("Ulaanbaatar").unwrap();
    assert_eq!(location.country, None);

    let lunar = loader::lunar_events().unwrap();
    let next = next_visible_event(lunar, &location, date(2025, 1, 1)).unwrap();
    assert_eq!(next.occurs_on, date(2025, 3, 14));
}

#[test]
fn exhausted_catalog_yields_none() {
    let location = parse_location("Austin, TX, USA").unwrap();
    let solar = loader::solar_events().unwrap();
    assert!(next_visible_event(solar, &location, date(2100, 1, 1)).is_none());
}
