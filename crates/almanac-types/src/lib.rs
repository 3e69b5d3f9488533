//! Shared type definitions for the Almanac dataset API.
//!
//! This crate is the single source of truth for the entity types served
//! over HTTP. The structs here define the wire format directly: field
//! names are renamed to `camelCase` on serialization, and episode air
//! dates travel as ISO `YYYY-MM-DD` strings.
//!
//! # Modules
//!
//! - [`entities`] -- Dataset entity structs (characters, episodes, quotes, stats)
//! - [`record`] -- The id-lookup and free-text-search capability shared by all entities

pub mod entities;
pub mod record;

// Re-export all public types at crate root for convenience.
pub use entities::{Character, Episode, Quote, Stats};
pub use record::Record;
