//! eclipsedb-cli
//! =============
//!
//! Command-line interface for the `eclipsedb-core` eclipse catalog.
//!
//! This crate primarily provides a binary (`eclipsedb-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! eclipsedb-cli --help
//! eclipsedb-cli next "Austin, TX, USA"
//! eclipsedb-cli parse "Ontario, Canada"
//! eclipsedb-cli events solar
//! eclipsedb-cli stats
//! ```
//!
//! For programmatic access to the parsing and matching APIs, use the
//! [`eclipsedb-core`] crate directly.
//!
//! [`eclipsedb-core`]: https://docs.rs/eclipsedb-core

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
