//! Dataset loading for the catalog.
//!
//! The catalog is backed by three JSON files in a single directory, one
//! array of records per file. Loading is all-or-nothing: a missing or
//! malformed file fails the whole load with a [`DataError`] naming the
//! offending source, and the caller must not start serving.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::error::DataError;

/// File name of the character table inside a dataset directory.
pub const CHARACTERS_FILE: &str = "characters.json";
/// File name of the episode table inside a dataset directory.
pub const EPISODES_FILE: &str = "episodes.json";
/// File name of the quote table inside a dataset directory.
pub const QUOTES_FILE: &str = "quotes.json";

impl Catalog {
    /// Load all three tables from the JSON files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if a file cannot be read, or
    /// [`DataError::Parse`] if a file is not a valid array of records.
    pub fn load_from_dir(dir: &Path) -> Result<Self, DataError> {
        let characters = read_table(&dir.join(CHARACTERS_FILE))?;
        let episodes = read_table(&dir.join(EPISODES_FILE))?;
        let quotes = read_table(&dir.join(QUOTES_FILE))?;

        Ok(Self::new(characters, episodes, quotes))
    }

    /// Build a catalog from in-memory JSON strings.
    ///
    /// Lets tests assemble fixtures without touching the filesystem.
    /// Parse errors name the canonical file for the offending table.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] if any source is not a valid array
    /// of records.
    pub fn from_json_sources(
        characters: &str,
        episodes: &str,
        quotes: &str,
    ) -> Result<Self, DataError> {
        Ok(Self::new(
            parse_table(characters, CHARACTERS_FILE)?,
            parse_table(episodes, EPISODES_FILE)?,
            parse_table(quotes, QUOTES_FILE)?,
        ))
    }
}

/// Read and parse one table file from disk.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse one table from an in-memory source, labeling errors with the
/// table's canonical file name.
fn parse_table<T: DeserializeOwned>(contents: &str, file_name: &str) -> Result<Vec<T>, DataError> {
    serde_json::from_str(contents).map_err(|source| DataError::Parse {
        path: PathBuf::from(file_name),
        source,
    })
}
