//! Basic usage example for eclipsedb-rs
//!
//! This example demonstrates how to:
//! - Parse free-form location input
//! - Inspect the derived matching tokens
//! - Find the next visible solar and lunar eclipse
//! - Use the per-process catalog cache

use chrono::NaiveDate;
use eclipsedb_rs::loader;
use eclipsedb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== EclipseDB-RS Basic Usage Example ===\n");

    // Example 1: Parse a conventional "City, State, Country" string
    println!("--- Example 1: Parse a location ---");
    let location = parse_location("Austin, TX, USA")?;
    println!("City: {:?}", location.city);
    println!("Region: {:?}", location.region);
    println!("Country: {:?}", location.country);
    println!("Formatted: {}\n", location.formatted());

    // Example 2: Postal codes short-circuit the segment scan
    println!("--- Example 2: Postal codes ---");
    for code in ["78701", "K1A 0B1"] {
        let parsed = parse_location(code)?;
        println!(
            "{} -> region {:?}, country {:?}",
            code, parsed.region, parsed.country
        );
    }
    println!();

    // Example 3: Matching tokens include aliases and macro-regions
    println!("--- Example 3: Matching tokens ---");
    let mut tokens: Vec<_> = location.token_set().into_iter().collect();
    tokens.sort();
    println!("{tokens:?}\n");

    // Example 4: Next visible eclipses from the bundled catalogs
    println!("--- Example 4: Next visible eclipses ---");
    let solar = loader::solar_events()?;
    let lunar = loader::lunar_events()?;
    let reference = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
    let (next_solar, next_lunar) = find_next_eclipses(solar, lunar, &location, reference);
    match next_solar {
        Some(event) => {
            println!("Solar: {}", event.summary());
            if let Some(window) = matching_window(event, &location) {
                println!("  Visible: {}", window.notes);
            }
        }
        None => println!("No visible solar eclipse found"),
    }
    match next_lunar {
        Some(event) => println!("Lunar: {}", event.summary()),
        None => println!("No visible lunar eclipse found"),
    }
    println!();

    // Example 5: The catalog cache makes repeat loads free
    println!("--- Example 5: Catalog cache ---");
    let start = std::time::Instant::now();
    let _ = loader::solar_events()?;
    println!("Cached load time: {:?}", start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
