//! The immutable dataset catalog served by the API.
//!
//! [`Catalog`] owns the three ordered tables the whole API reads from:
//! characters, episodes, and quotes. It is assembled once at startup and
//! never changes for the lifetime of the process, so request handling
//! needs no locks and every query is a plain scan over a slice.

use almanac_types::{Character, Episode, Quote, Stats};

/// Version string reported by [`Catalog::stats`].
const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The three read-only dataset tables, loaded once at process start.
///
/// Row order is the order of the backing JSON arrays and is preserved by
/// every filter. Lookup by id returns the first match; ids are expected
/// to be unique per table but this is not enforced.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Character table.
    characters: Vec<Character>,
    /// Episode table.
    episodes: Vec<Episode>,
    /// Quote table.
    quotes: Vec<Quote>,
}

impl Catalog {
    /// Assemble a catalog from already-parsed tables.
    pub const fn new(
        characters: Vec<Character>,
        episodes: Vec<Episode>,
        quotes: Vec<Quote>,
    ) -> Self {
        Self {
            characters,
            episodes,
            quotes,
        }
    }

    /// The character table, in load order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// The episode table, in load order.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// The quote table, in load order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of characters in the catalog.
    pub const fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Number of episodes in the catalog.
    pub const fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    /// Number of quotes in the catalog.
    pub const fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    /// Highest season number across all episodes, `0` when the episode
    /// table is empty.
    pub fn max_season(&self) -> u32 {
        self.episodes.iter().map(|episode| episode.season).max().unwrap_or(0)
    }

    /// Aggregate statistics over the three tables.
    pub fn stats(&self) -> Stats {
        Stats {
            total_characters: self.character_count(),
            total_episodes: self.episode_count(),
            total_quotes: self.quote_count(),
            seasons: self.max_season(),
            version: String::from(API_VERSION),
        }
    }
}
