//! Dataset entity structs for the Almanac API.
//!
//! Covers `Character`, `Episode`, and `Quote` exactly as they appear in
//! the backing JSON files and on the wire, plus the derived `Stats`
//! summary. Entities are immutable once the catalog is loaded; nothing
//! in the API mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// A character appearing in the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique character identifier.
    pub id: u32,
    /// Full display name, without honorifics.
    pub name: String,
    /// The character's stated occupation.
    pub occupation: String,
    /// Name of the performer credited for the character.
    pub portrayed_by: String,
    /// In-universe status, e.g. `"Active"` or `"Departed"`.
    pub status: String,
}

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

/// A single broadcast episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier, global across seasons.
    pub id: u32,
    /// Episode title.
    pub title: String,
    /// Season the episode belongs to, starting at 1.
    pub season: u32,
    /// Position within its season, starting at 1.
    pub episode_in_season: u32,
    /// Original air date. Serialized as an ISO `YYYY-MM-DD` string.
    pub air_date: NaiveDate,
    /// One- or two-sentence plot synopsis.
    pub synopsis: String,
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// A memorable line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Unique quote identifier.
    pub id: u32,
    /// The spoken line.
    pub text: String,
    /// The speaker as credited in the transcript.
    ///
    /// Transcripts credit speakers with honorifics the character record
    /// does not carry (e.g. `"Commander Dara Voss"` for the character
    /// named `"Dara Voss"`), so this field is matched against
    /// [`Character::name`] as a case-insensitive substring, never by
    /// equality.
    pub character: String,
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Aggregate dataset statistics served by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of characters in the catalog.
    pub total_characters: usize,
    /// Number of episodes in the catalog.
    pub total_episodes: usize,
    /// Number of quotes in the catalog.
    pub total_quotes: usize,
    /// Highest season number across all episodes; `0` when the episode
    /// table is empty.
    pub seasons: u32,
    /// API version string, fixed at compile time.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_episode() -> Episode {
        Episode {
            id: 7,
            title: String::from("The Envoy"),
            season: 1,
            episode_in_season: 7,
            air_date: NaiveDate::from_ymd_opt(2019, 3, 25).unwrap_or_default(),
            synopsis: String::from("A visitor evaluates the outpost."),
        }
    }

    #[test]
    fn character_serializes_to_camel_case() {
        let character = Character {
            id: 1,
            name: String::from("Dara Voss"),
            occupation: String::from("Station Commander"),
            portrayed_by: String::from("Imogen Hale"),
            status: String::from("Active"),
        };

        let value = serde_json::to_value(&character).ok().unwrap_or_default();
        assert_eq!(
            value.get("portrayedBy").and_then(serde_json::Value::as_str),
            Some("Imogen Hale")
        );
        assert!(value.get("portrayed_by").is_none());
    }

    #[test]
    fn episode_air_date_serializes_as_iso_string() {
        let value = serde_json::to_value(sample_episode()).ok().unwrap_or_default();
        assert_eq!(value.get("airDate").and_then(serde_json::Value::as_str), Some("2019-03-25"));
        assert_eq!(value.get("episodeInSeason").and_then(serde_json::Value::as_u64), Some(7));
    }

    #[test]
    fn episode_round_trips_through_json() {
        let episode = sample_episode();
        let encoded = serde_json::to_string(&episode).ok().unwrap_or_default();
        let decoded: Option<Episode> = serde_json::from_str(&encoded).ok();
        assert_eq!(decoded, Some(episode));
    }

    #[test]
    fn stats_serializes_all_counts() {
        let stats = Stats {
            total_characters: 10,
            total_episodes: 22,
            total_quotes: 28,
            seasons: 3,
            version: String::from("0.1.0"),
        };

        let value = serde_json::to_value(&stats).ok().unwrap_or_default();
        assert_eq!(value.get("totalQuotes").and_then(serde_json::Value::as_u64), Some(28));
        assert_eq!(value.get("seasons").and_then(serde_json::Value::as_u64), Some(3));
        assert_eq!(value.get("version").and_then(serde_json::Value::as_str), Some("0.1.0"));
    }
}
