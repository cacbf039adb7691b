// crates/eclipsedb-core/src/lib.rs

//! Offline eclipse catalog with free-text location parsing and visibility
//! matching.
//!
//! Raw text flows one way through the crate: input → [`parser`] (consulting
//! [`alias`] and [`postal`]) → structured [`Location`] → [`matcher`]
//! (consulting an externally supplied event sequence) → matched event plus
//! its matched visibility window. The [`loader`] module supplies the bundled
//! catalogs; display layers live outside this crate.

pub mod alias;
pub mod error;
#[cfg(feature = "catalog")]
pub mod loader;
pub mod location;
pub mod matcher;
pub mod model;
pub mod parser;
pub mod postal;
pub mod text;

// Re-exports
pub use crate::alias::AliasRegistry;
pub use crate::error::{EclipseError, Result};
pub use crate::location::Location;
pub use crate::matcher::{
    find_next_eclipses, is_visible_from, matching_window, next_visible_event, window_matches,
};
pub use crate::model::{CatalogStats, EclipseEvent, EclipseKind, VisibilityWindow};
pub use crate::parser::parse_location;
pub use crate::postal::resolve_postal_code;
pub use crate::text::{equals_folded, fold_key};
