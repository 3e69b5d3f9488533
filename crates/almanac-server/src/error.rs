//! Error types for the Almanac server binary.
//!
//! Uses `thiserror` for typed errors covering the three ways startup can
//! fail: bad configuration, an unloadable dataset, and a server that
//! cannot bind or serve. Any of them reaching `main` exits the process
//! with code 1.

/// Errors that can occur while starting or running the Almanac server.
#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// A dataset failed to load at startup.
    #[error("data error: {0}")]
    Data(#[from] almanac_data::DataError),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] almanac_api::ServerError),
}
