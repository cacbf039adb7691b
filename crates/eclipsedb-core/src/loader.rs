// crates/eclipsedb-core/src/loader.rs

//! # Catalog Loader
//!
//! Reads the bundled NASA GSFC catalog CSV exports into date-ascending
//! [`EclipseEvent`] sequences so lookups stay offline. Each row's coarse
//! visibility window is derived from the greatest-eclipse coordinates; rows
//! without coordinates (the lunar catalog) fall back to global visibility.
//!
//! The default catalogs are cached once per process; the matching core only
//! ever consumes the already-parsed records.

use crate::error::{EclipseError, Result};
use crate::model::{EclipseEvent, EclipseKind, VisibilityWindow};
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

static SOLAR_CACHE: OnceCell<Vec<EclipseEvent>> = OnceCell::new();
static LUNAR_CACHE: OnceCell<Vec<EclipseEvent>> = OnceCell::new();

pub const SOLAR_CSV: &str = "solar_eclipses_1900_2100.csv";
pub const LUNAR_CSV: &str = "lunar_eclipses_1900_2100.csv";

/// Directory holding the bundled catalog files, resolved relative to the
/// crate root so it works both from the workspace and as a dependency.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// The bundled solar catalog, loaded on first access and cached for the
/// lifetime of the process.
pub fn solar_events() -> Result<&'static [EclipseEvent]> {
    SOLAR_CACHE
        .get_or_try_init(|| load_from_path(default_data_dir().join(SOLAR_CSV), EclipseKind::Solar))
        .map(Vec::as_slice)
}

/// The bundled lunar catalog, loaded on first access and cached.
pub fn lunar_events() -> Result<&'static [EclipseEvent]> {
    LUNAR_CACHE
        .get_or_try_init(|| load_from_path(default_data_dir().join(LUNAR_CSV), EclipseKind::Lunar))
        .map(Vec::as_slice)
}

/// Both bundled catalogs merged into one date-ascending sequence.
pub fn all_events() -> Result<Vec<EclipseEvent>> {
    let mut events: Vec<EclipseEvent> = solar_events()?
        .iter()
        .chain(lunar_events()?.iter())
        .cloned()
        .collect();
    events.sort_by_key(|event| event.occurs_on);
    Ok(events)
}

/// Load a catalog file from an explicit path.
pub fn load_from_path(path: impl AsRef<Path>, kind: EclipseKind) -> Result<Vec<EclipseEvent>> {
    let reader = open_stream(path.as_ref())?;
    read_catalog(reader, kind)
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic reader so the caller doesn't care about compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        EclipseError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

/// Raw row mirroring the catalog CSV column layout. The lunar export has no
/// coordinate columns, so everything past the date is optional. This type is
/// not exposed from the public API.
#[derive(Debug, Deserialize)]
struct EclipseRow {
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Type", default)]
    subtype: Option<String>,
    #[serde(rename = "Saros", default)]
    saros: Option<String>,
    #[serde(rename = "Magnitude", default)]
    magnitude: Option<String>,
    #[serde(rename = "Latitude", default)]
    latitude: Option<String>,
    #[serde(rename = "Longitude", default)]
    longitude: Option<String>,
    #[serde(rename = "Duration", default)]
    duration: Option<String>,
}

/// Parse catalog rows from any reader. Rows with a missing or unparseable
/// date are skipped rather than failing the whole load; the result is sorted
/// date-ascending.
pub fn read_catalog<R: Read>(reader: R, kind: EclipseKind) -> Result<Vec<EclipseEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();

    for row in csv_reader.deserialize() {
        let row: EclipseRow = row?;
        let Some(occurs_on) = row
            .date
            .as_deref()
            .and_then(|value| value.trim().parse::<NaiveDate>().ok())
        else {
            continue;
        };

        let subtype = match row.subtype.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => title_case(value),
            _ => "Unknown".to_string(),
        };
        let saros = non_empty(row.saros.as_deref());
        let magnitude = non_empty(row.magnitude.as_deref());
        let duration = non_empty(row.duration.as_deref());
        let latitude = parse_float(row.latitude.as_deref());
        let longitude = parse_float(row.longitude.as_deref());

        let window =
            build_visibility_window(latitude, longitude, saros.as_deref(), magnitude.as_deref());

        events.push(EclipseEvent {
            occurs_on,
            kind,
            title: compose_title(occurs_on, &subtype, kind),
            peak_description: build_peak_description(
                kind,
                magnitude.as_deref(),
                duration.as_deref(),
                latitude,
                longitude,
                saros.as_deref(),
            ),
            subtype,
            visibility: vec![window],
        });
    }

    events.sort_by_key(|event| event.occurs_on);
    Ok(events)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_float(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

enum Axis {
    Lat,
    Lon,
}

fn format_coordinate(value: Option<f64>, axis: Axis) -> String {
    let Some(value) = value else {
        return "unknown".to_string();
    };
    let hemisphere = match axis {
        Axis::Lat => {
            if value >= 0.0 {
                "N"
            } else {
                "S"
            }
        }
        Axis::Lon => {
            if value >= 0.0 {
                "E"
            } else {
                "W"
            }
        }
    };
    format!("{:.1}° {}", value.abs(), hemisphere)
}

/// Map the greatest-eclipse point to coarse geographic labels the matcher
/// can overlap against user locations. Missing coordinates yield no labels
/// at all: a window with neither countries nor regions is treated as
/// globally visible by the matcher.
fn approximate_regions(latitude: Option<f64>, longitude: Option<f64>) -> Vec<&'static str> {
    let (Some(lat), Some(lon)) = (latitude, longitude) else {
        return Vec::new();
    };

    // Normalize longitude to [-180, 180) for simpler comparisons.
    let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;

    let mut regions: Vec<&'static str> = Vec::new();

    if (-170.0..=-30.0).contains(&lon) {
        if lat >= 15.0 {
            regions.push("North America");
        } else if lat <= -10.0 {
            regions.push("South America");
        } else {
            regions.extend(["North America", "South America"]);
        }
    } else if lon > -30.0 && lon <= 60.0 {
        if lat >= 35.0 {
            regions.push("Europe");
        } else if lat >= 0.0 {
            regions.extend(["North Africa", "Africa"]);
        } else {
            regions.push("Africa");
        }
    } else if lon > 60.0 && lon <= 120.0 {
        if lat >= 25.0 {
            regions.extend(["East Asia", "Asia"]);
        } else if lat >= -10.0 {
            regions.extend(["South Asia", "Asia"]);
        } else {
            regions.push("Oceania");
        }
    } else if lat >= 0.0 {
        regions.extend(["East Asia", "Asia"]);
    } else {
        regions.push("Oceania");
    }

    // Preserve order while removing duplicates.
    let mut seen = HashSet::new();
    regions
        .into_iter()
        .filter(|region| seen.insert(region.to_lowercase()))
        .collect()
}

fn normalize_duration(value: &str) -> Option<String> {
    let stripped = value.trim();
    if stripped.is_empty() {
        return None;
    }
    if stripped.starts_with('0') && stripped.len() > 1 {
        let trimmed = stripped.trim_start_matches('0');
        return Some(if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        });
    }
    Some(stripped.to_string())
}

fn build_peak_description(
    kind: EclipseKind,
    magnitude: Option<&str>,
    duration: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    saros: Option<&str>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(magnitude) = magnitude {
        parts.push(format!(
            "Magnitude {} obscuration of the {}.",
            magnitude,
            kind.body().to_lowercase()
        ));
    }

    if let Some(duration) = duration.and_then(normalize_duration) {
        parts.push(format!("Duration around {duration}."));
    }

    let lat_text = format_coordinate(latitude, Axis::Lat);
    let lon_text = format_coordinate(longitude, Axis::Lon);
    parts.push(format!("Greatest eclipse near {lat_text}, {lon_text}."));

    if let Some(saros) = saros {
        parts.push(format!("Saros cycle {saros}."));
    }

    parts.join(" ")
}

fn build_visibility_window(
    latitude: Option<f64>,
    longitude: Option<f64>,
    saros: Option<&str>,
    magnitude: Option<&str>,
) -> VisibilityWindow {
    let regions = approximate_regions(latitude, longitude);
    let lat_text = format_coordinate(latitude, Axis::Lat);
    let lon_text = format_coordinate(longitude, Axis::Lon);

    let mut note_parts = vec![format!("Greatest eclipse at {lat_text}, {lon_text}")];
    if let Some(magnitude) = magnitude {
        note_parts.push(format!("magnitude {magnitude}"));
    }
    if let Some(saros) = saros {
        note_parts.push(format!("Saros {saros}"));
    }

    VisibilityWindow::new(std::iter::empty::<String>(), regions, note_parts.join("; "))
}

fn compose_title(occurs_on: NaiveDate, subtype: &str, kind: EclipseKind) -> String {
    format!(
        "{} {} {} Eclipse",
        occurs_on.format("%B %d, %Y"),
        subtype,
        kind
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn americas_band_splits_on_latitude() {
        assert_eq!(
            approximate_regions(Some(25.3), Some(-104.1)),
            vec!["North America"]
        );
        assert_eq!(
            approximate_regions(Some(-22.0), Some(-114.5)),
            vec!["South America"]
        );
        assert_eq!(
            approximate_regions(Some(5.0), Some(-60.0)),
            vec!["North America", "South America"]
        );
    }

    #[test]
    fn eastern_bands_and_wraparound() {
        assert_eq!(approximate_regions(Some(48.0), Some(10.0)), vec!["Europe"]);
        assert_eq!(
            approximate_regions(Some(20.0), Some(5.0)),
            vec!["North Africa", "Africa"]
        );
        assert_eq!(
            approximate_regions(Some(30.0), Some(100.0)),
            vec!["East Asia", "Asia"]
        );
        assert_eq!(approximate_regions(Some(-30.0), Some(150.0)), vec!["Oceania"]);
        // 190°E wraps to -170°, landing in the Americas band.
        assert_eq!(
            approximate_regions(Some(40.0), Some(190.0)),
            vec!["North America"]
        );
    }

    #[test]
    fn missing_coordinates_mean_global_visibility() {
        // An empty label list leaves the window empty-empty, which the
        // matcher treats as visible from everywhere.
        assert!(approximate_regions(None, None).is_empty());
        assert!(approximate_regions(Some(10.0), None).is_empty());
    }

    #[test]
    fn duration_drops_leading_zeros() {
        assert_eq!(normalize_duration("04m28s").as_deref(), Some("4m28s"));
        assert_eq!(normalize_duration("0").as_deref(), Some("0"));
        assert_eq!(normalize_duration("000").as_deref(), Some("0"));
        assert_eq!(normalize_duration("  "), None);
    }

    #[test]
    fn coordinates_format_with_hemisphere() {
        assert_eq!(format_coordinate(Some(25.34), Axis::Lat), "25.3° N");
        assert_eq!(format_coordinate(Some(-104.1), Axis::Lon), "104.1° W");
        assert_eq!(format_coordinate(None, Axis::Lat), "unknown");
    }

    #[test]
    fn reads_rows_and_skips_bad_dates() {
        let csv = "\
Date,Type,Saros,Magnitude,Latitude,Longitude,Duration
2026-08-12,Total,126,1.039,65.2,-25.2,02m18s
not-a-date,Total,127,1.0,10.0,10.0,01m00s
2024-04-08,total,139,1.0566,25.3,-104.1,04m28s
";
        let events = read_catalog(csv.as_bytes(), EclipseKind::Solar).unwrap();
        assert_eq!(events.len(), 2);
        // Sorted ascending regardless of file order.
        assert_eq!(
            events[0].occurs_on,
            NaiveDate::from_ymd_opt(2024, 4, 8).unwrap()
        );
        assert_eq!(events[0].subtype, "Total");
        assert_eq!(
            events[0].title,
            "April 08, 2024 Total Solar Eclipse"
        );
        assert_eq!(events[0].visibility.len(), 1);
        assert_eq!(events[0].visibility[0].regions, vec!["North America"]);
        assert!(events[0]
            .peak_description
            .contains("Duration around 4m28s."));
        assert!(events[0].visibility[0].notes.contains("Saros 139"));
    }

    #[test]
    fn lunar_rows_without_coordinates_are_global() {
        let csv = "\
Date,Type,Saros,Magnitude,Duration
2025-03-14,Total,123,1.178,01h05m
2025-09-07,Total,128,1.362,01h22m
";
        let events = read_catalog(csv.as_bytes(), EclipseKind::Lunar).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].visibility[0].regions.is_empty());
        assert!(events[0].visibility[0].countries.is_empty());
        assert!(events[0]
            .peak_description
            .contains("Greatest eclipse near unknown, unknown."));
        assert!(events[0]
            .peak_description
            .contains("obscuration of the moon."));
    }
}
