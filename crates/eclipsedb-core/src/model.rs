// crates/eclipsedb-core/src/model.rs

use crate::error::{EclipseError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two catalog kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseKind {
    Solar,
    Lunar,
}

impl EclipseKind {
    /// Parse a catalog kind label, case-insensitively.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "solar" => Ok(EclipseKind::Solar),
            "lunar" => Ok(EclipseKind::Lunar),
            _ => Err(EclipseError::UnsupportedKind(value.to_string())),
        }
    }

    /// The celestial body obscured by this kind of eclipse.
    pub fn body(self) -> &'static str {
        match self {
            EclipseKind::Solar => "Sun",
            EclipseKind::Lunar => "Moon",
        }
    }
}

impl fmt::Display for EclipseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EclipseKind::Solar => write!(f, "Solar"),
            EclipseKind::Lunar => write!(f, "Lunar"),
        }
    }
}

/// Describes where an eclipse can be observed.
///
/// - `countries`: normalized names that should match user input countries.
/// - `regions`: sub-national regions (states, provinces) or broader
///   geo-labels ("North America") to refine matching.
/// - `notes`: optional human-readable guidance.
///
/// A window with both `countries` and `regions` empty matches everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityWindow {
    pub countries: Vec<String>,
    pub regions: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl VisibilityWindow {
    pub fn new<C, R>(countries: C, regions: R, notes: impl Into<String>) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        VisibilityWindow {
            countries: countries.into_iter().map(Into::into).collect(),
            regions: regions.into_iter().map(Into::into).collect(),
            notes: notes.into(),
        }
    }
}

/// A single eclipse in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EclipseEvent {
    pub occurs_on: NaiveDate,
    pub kind: EclipseKind,
    /// e.g. "Total", "Annular", "Partial", "Penumbral".
    pub subtype: String,
    pub title: String,
    pub visibility: Vec<VisibilityWindow>,
    pub peak_description: String,
}

impl EclipseEvent {
    /// One-line summary: `2026-08-12 - Total Solar - <title>`.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} {} - {}",
            self.occurs_on, self.subtype, self.kind, self.title
        )
    }
}

/// Simple aggregate statistics for the loaded catalogs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogStats {
    pub solar: usize,
    pub lunar: usize,
}
