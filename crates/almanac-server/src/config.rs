//! Configuration for the Almanac server binary.
//!
//! The whole configuration surface is one environment variable: `PORT`.
//! Everything else about the process, including the dataset directory
//! and the bind host, is fixed.

use crate::error::AlmanacError;

/// Default listening port used when `PORT` is not set.
const DEFAULT_PORT: &str = "3000";

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port the HTTP listener binds to.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `PORT`, defaulting to 3000 when unset.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::Config`] if `PORT` is set to something
    /// that does not parse as a TCP port number.
    pub fn from_env() -> Result<Self, AlmanacError> {
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_owned())
            .parse()
            .map_err(|e| AlmanacError::Config(format!("invalid PORT: {e}")))?;

        Ok(Self { port })
    }
}
