//! Almanac API server for the Outpost Nine datasets.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Collection endpoints** (`/api/characters`, `/api/episodes`,
//!   `/api/quotes`) with substring, season, and speaker filters
//! - **Lookup endpoints** (`/{id}`), with credited quotes embedded in
//!   character details
//! - **Random-pick endpoints** (`/random`) drawing uniformly per request
//! - **Aggregate statistics** (`/api/stats`) and an **API reference
//!   document** (`GET /`)
//!
//! # Architecture
//!
//! Handlers read from an immutable [`Catalog`](almanac_data::Catalog)
//! shared through [`AppState`]; no request takes a lock or performs I/O.
//! Every response, success or failure, is pretty-printed JSON carrying
//! permissive CORS headers, so the API is directly usable from browser
//! scripts on any origin.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
