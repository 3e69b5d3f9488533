//! Shared application state for the Almanac API server.
//!
//! [`AppState`] carries the loaded [`Catalog`] and is injected into every
//! handler through Axum's `State` extractor, wrapped in an [`Arc`](std::sync::Arc)
//! by the caller. The catalog never changes after startup, so handlers
//! read it without locks.

use almanac_data::Catalog;

/// Shared state for the Axum application.
///
/// Built once at startup from a fully-loaded catalog. Handlers only ever
/// read from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dataset catalog, loaded before the listener binds.
    pub catalog: Catalog,
}

impl AppState {
    /// Wrap a loaded catalog for injection into the router.
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
