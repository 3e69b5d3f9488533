//! Dataset loading and querying for the Almanac API.
//!
//! This crate owns everything between the JSON files on disk and the
//! HTTP handlers: the immutable [`Catalog`] loaded once at startup, the
//! linear-scan query filters, and uniform random row selection. Nothing
//! here performs I/O after load; request-time work is pure computation
//! over borrowed slices.
//!
//! # Modules
//!
//! - [`catalog`] -- The three read-only tables plus aggregate statistics
//! - [`error`] -- Fatal dataset-loading errors
//! - [`loader`] -- JSON file reading and in-memory test constructors
//! - [`query`] -- Substring search, id lookup, season and speaker filters
//! - [`random`] -- Uniform random row selection

pub mod catalog;
pub mod error;
pub mod loader;
pub mod query;
pub mod random;

// Re-export the primary types at crate root for convenience.
pub use catalog::Catalog;
pub use error::DataError;
