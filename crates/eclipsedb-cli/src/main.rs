//! eclipsedb-cli — Command-line interface for eclipsedb-core
//!
//! This binary answers "what is the next eclipse I can see from here?"
//! against the catalog bundled with the `eclipsedb-core` crate. It supports
//! finding the next visible solar and lunar eclipse for a free-form
//! location, inspecting how a location string is parsed, listing a catalog,
//! and printing catalog statistics.
//!
//! Usage examples
//! --------------
//!
//! - Next visible eclipses for a location
//!   $ eclipsedb-cli next "Austin, TX, USA"
//!   $ eclipsedb-cli next 78701 --date 2026-01-01
//!
//! - Show the structured parse of a location
//!   $ eclipsedb-cli parse "Ontario, Canada"
//!   $ eclipsedb-cli parse "K1A 0B1" --json
//!
//! - List a catalog
//!   $ eclipsedb-cli events solar
//!
//! - Show catalog statistics
//!   $ eclipsedb-cli stats
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the catalog CSVs bundled with `eclipsedb-core`.
//! Use `--data-dir <path>` to point at a directory holding alternate
//! `solar_eclipses_1900_2100.csv` / `lunar_eclipses_1900_2100.csv` files.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use eclipsedb_core::{
    find_next_eclipses, loader, matching_window, parse_location, CatalogStats, EclipseEvent,
    EclipseKind, Location,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct NextReport<'a> {
    location: &'a Location,
    reference_date: NaiveDate,
    solar: Option<&'a EclipseEvent>,
    lunar: Option<&'a EclipseEvent>,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let data_dir = args
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(loader::default_data_dir);

    match args.command {
        Commands::Next {
            location,
            date,
            json,
        } => {
            let parsed = parse_location(&location)?;
            let reference = date.unwrap_or_else(|| Local::now().date_naive());

            let solar = load_catalog(&data_dir, EclipseKind::Solar)?;
            let lunar = load_catalog(&data_dir, EclipseKind::Lunar)?;
            let (next_solar, next_lunar) = find_next_eclipses(&solar, &lunar, &parsed, reference);

            if json {
                let report = NextReport {
                    location: &parsed,
                    reference_date: reference,
                    solar: next_solar,
                    lunar: next_lunar,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Location: {}", display_name(&parsed));
                println!("Reference date: {reference}");
                print_next(next_solar, EclipseKind::Solar, &parsed);
                print_next(next_lunar, EclipseKind::Lunar, &parsed);
            }
        }

        Commands::Parse { location, json } => {
            let parsed = parse_location(&location)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("Raw: {}", parsed.raw);
                println!("City: {}", parsed.city.as_deref().unwrap_or("-"));
                println!("Region: {}", parsed.region.as_deref().unwrap_or("-"));
                println!("Country: {}", parsed.country.as_deref().unwrap_or("-"));
                println!(
                    "Postal code: {}",
                    parsed.postal_code.as_deref().unwrap_or("-")
                );
            }
        }

        Commands::Events { kind } => {
            let kind = EclipseKind::parse(&kind)?;
            let events = load_catalog(&data_dir, kind)?;
            if events.is_empty() {
                println!("No {} events in the catalog", kind.to_string().to_lowercase());
            } else {
                for event in &events {
                    println!("{}", event.summary());
                }
            }
        }

        Commands::Stats => {
            let stats = CatalogStats {
                solar: load_catalog(&data_dir, EclipseKind::Solar)?.len(),
                lunar: load_catalog(&data_dir, EclipseKind::Lunar)?.len(),
            };
            println!("Catalog statistics:");
            println!("  Solar eclipses: {}", stats.solar);
            println!("  Lunar eclipses: {}", stats.lunar);
        }
    }

    Ok(())
}

/// A printable name for the location: the formatted fields when any were
/// extracted, otherwise the raw input (e.g. an unresolvable postal code).
fn display_name(location: &Location) -> String {
    let formatted = location.formatted();
    if formatted.is_empty() {
        location.raw.clone()
    } else {
        formatted
    }
}

fn load_catalog(data_dir: &Path, kind: EclipseKind) -> anyhow::Result<Vec<EclipseEvent>> {
    let filename = match kind {
        EclipseKind::Solar => loader::SOLAR_CSV,
        EclipseKind::Lunar => loader::LUNAR_CSV,
    };
    loader::load_from_path(data_dir.join(filename), kind)
        .with_context(|| format!("failed to load the {kind} catalog"))
}

fn print_next(event: Option<&EclipseEvent>, kind: EclipseKind, location: &Location) {
    let label = kind.to_string().to_lowercase();
    match event {
        Some(event) => {
            println!("Next {label} eclipse: {}", event.summary());
            if let Some(window) = matching_window(event, location) {
                if !window.regions.is_empty() {
                    println!("  Regions: {}", window.regions.join(", "));
                }
                if !window.notes.is_empty() {
                    println!("  Visibility: {}", window.notes);
                }
            }
            if !event.peak_description.is_empty() {
                println!("  Peak: {}", event.peak_description);
            }
        }
        None => println!(
            "No upcoming {label} eclipse found for {}",
            display_name(location)
        ),
    }
}
