//! Workspace facade crate for eclipsedb-rs.
//!
//! Re-exports everything from [`eclipsedb_core`] so demos and quick scripts
//! can depend on a single crate name.

pub use eclipsedb_core::*;

/// Convenience imports for demos and quick scripts.
pub mod prelude {
    pub use eclipsedb_core::{
        find_next_eclipses, is_visible_from, matching_window, next_visible_event, parse_location,
        resolve_postal_code, AliasRegistry, EclipseError, EclipseEvent, EclipseKind, Location,
        Result, VisibilityWindow,
    };
}
