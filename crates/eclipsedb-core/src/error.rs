// crates/eclipsedb-core/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// Location parsing surfaces exactly one error to end users:
/// [`EclipseError::EmptyLocation`]. Every other ambiguity in user input is
/// resolved by a best-effort fallback, never by raising. The remaining
/// variants belong to the catalog loading layer.
#[derive(Debug, Error)]
pub enum EclipseError {
    /// The location input was blank or contained nothing but separators.
    /// Callers should treat this as a request for re-entry, not a crash.
    #[error("location input cannot be empty")]
    EmptyLocation,

    /// A catalog row declared an eclipse kind other than solar or lunar.
    #[error("unsupported eclipse kind: {0}")]
    UnsupportedKind(String),

    /// A catalog file could not be located.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "catalog")]
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EclipseError>;
