//! REST API endpoint handlers for the Almanac server.
//!
//! All handlers read from the immutable [`Catalog`](almanac_data::Catalog)
//! carried by the shared [`AppState`]. Requests are stateless and touch
//! no I/O: every response is computed from the in-memory tables loaded
//! at startup.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | API reference document |
//! | `GET` | `/api/characters` | List characters (`search`) |
//! | `GET` | `/api/characters/random` | One random character |
//! | `GET` | `/api/characters/{id}` | Character detail plus credited quotes |
//! | `GET` | `/api/episodes` | List episodes (`season`, `search`) |
//! | `GET` | `/api/episodes/random` | One random episode |
//! | `GET` | `/api/episodes/{id}` | Single episode |
//! | `GET` | `/api/quotes` | List quotes (`character`, `search`) |
//! | `GET` | `/api/quotes/random` | One random quote |
//! | `GET` | `/api/quotes/{id}` | Single quote |
//! | `GET` | `/api/stats` | Table counts, season count, version |
//! | `GET` | `/api/catchphrases` | Advertised but unbacked; always 404 |

use std::sync::Arc;

use almanac_data::{query, random};
use almanac_types::{Character, Quote};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::error::ApiError;
use crate::response::PrettyJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/characters` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct CharactersQuery {
    /// Case-insensitive substring matched against every field.
    pub search: Option<String>,
}

/// Query parameters for the `GET /api/episodes` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct EpisodesQuery {
    /// Exact season number. Kept as a string so an empty value can
    /// count as absent and a non-numeric one can select nothing, both
    /// without rejecting the request.
    pub season: Option<String>,
    /// Case-insensitive substring, applied after the season filter.
    pub search: Option<String>,
}

/// Query parameters for the `GET /api/quotes` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct QuotesQuery {
    /// Substring matched against the credited speaker.
    pub character: Option<String>,
    /// Case-insensitive substring, applied after the speaker filter.
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/characters -- list characters
// ---------------------------------------------------------------------------

/// List all characters, optionally narrowed by substring search.
///
/// # Query Parameters
///
/// - `search`: case-insensitive substring matched against every field
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CharactersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let search = params.search.as_deref().unwrap_or_default();
    let characters = query::filter_records(state.catalog.characters(), search);

    Ok(PrettyJson(serde_json::json!({
        "total": characters.len(),
        "characters": characters,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/characters/random -- one random character
// ---------------------------------------------------------------------------

/// Return one character picked uniformly at random.
pub async fn random_character(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let character =
        random::random_item(state.catalog.characters()).ok_or(ApiError::NotFound("Character"))?;

    Ok(PrettyJson(character.clone()))
}

// ---------------------------------------------------------------------------
// GET /api/characters/:id -- character detail
// ---------------------------------------------------------------------------

/// Response body for the character detail endpoint: the record's fields
/// flattened to the top level, plus the derived `quotes` array.
#[derive(Debug, Serialize)]
struct CharacterDetail {
    /// The character record.
    #[serde(flatten)]
    character: Character,
    /// Quotes whose credited speaker contains the character's name.
    quotes: Vec<Quote>,
}

/// Return a single character with every quote credited to them.
///
/// Quote attribution is a case-insensitive substring match on the
/// credited speaker, so honorific credits like `"Commander Dara Voss"`
/// still land on the character named `"Dara Voss"`.
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(raw_id).ok_or(ApiError::NotFound("Character"))?;

    let character = query::find_by_id(state.catalog.characters(), id)
        .ok_or(ApiError::NotFound("Character"))?;

    let quotes = query::quotes_by_character(state.catalog.quotes(), &character.name);

    Ok(PrettyJson(CharacterDetail {
        character: character.clone(),
        quotes: quotes.into_iter().cloned().collect(),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/episodes -- list episodes
// ---------------------------------------------------------------------------

/// List episodes, filtered by season and then by substring search.
///
/// # Query Parameters
///
/// - `season`: exact season number; an empty value counts as absent,
///   any other non-numeric value selects nothing
/// - `search`: case-insensitive substring matched against every field
pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
    params: Result<Query<EpisodesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let in_season = params.season.as_deref().filter(|raw| !raw.is_empty()).map_or_else(
        || state.catalog.episodes().iter().collect(),
        |raw| match raw.parse::<u32>() {
            Ok(season) => query::episodes_in_season(state.catalog.episodes(), season),
            Err(_) => Vec::new(),
        },
    );

    let search = params.search.as_deref().unwrap_or_default();
    let episodes = query::filter_records(in_season, search);

    Ok(PrettyJson(serde_json::json!({
        "total": episodes.len(),
        "episodes": episodes,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/episodes/random -- one random episode
// ---------------------------------------------------------------------------

/// Return one episode picked uniformly at random.
pub async fn random_episode(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let episode =
        random::random_item(state.catalog.episodes()).ok_or(ApiError::NotFound("Episode"))?;

    Ok(PrettyJson(episode.clone()))
}

// ---------------------------------------------------------------------------
// GET /api/episodes/:id -- single episode
// ---------------------------------------------------------------------------

/// Return a single episode by id.
pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(raw_id).ok_or(ApiError::NotFound("Episode"))?;

    let episode =
        query::find_by_id(state.catalog.episodes(), id).ok_or(ApiError::NotFound("Episode"))?;

    Ok(PrettyJson(episode.clone()))
}

// ---------------------------------------------------------------------------
// GET /api/quotes -- list quotes
// ---------------------------------------------------------------------------

/// List quotes, filtered by credited speaker and then by substring search.
///
/// # Query Parameters
///
/// - `character`: substring matched against the credited speaker
/// - `search`: case-insensitive substring matched against every field
pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QuotesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let by_speaker = params.character.as_deref().map_or_else(
        || state.catalog.quotes().iter().collect(),
        |name| query::quotes_by_character(state.catalog.quotes(), name),
    );

    let search = params.search.as_deref().unwrap_or_default();
    let quotes = query::filter_records(by_speaker, search);

    Ok(PrettyJson(serde_json::json!({
        "total": quotes.len(),
        "quotes": quotes,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/quotes/random -- one random quote
// ---------------------------------------------------------------------------

/// Return one quote picked uniformly at random.
pub async fn random_quote(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = random::random_item(state.catalog.quotes()).ok_or(ApiError::NotFound("Quote"))?;

    Ok(PrettyJson(quote.clone()))
}

// ---------------------------------------------------------------------------
// GET /api/quotes/:id -- single quote
// ---------------------------------------------------------------------------

/// Return a single quote by id.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(raw_id).ok_or(ApiError::NotFound("Quote"))?;

    let quote =
        query::find_by_id(state.catalog.quotes(), id).ok_or(ApiError::NotFound("Quote"))?;

    Ok(PrettyJson(quote.clone()))
}

// ---------------------------------------------------------------------------
// GET /api/stats -- aggregate statistics
// ---------------------------------------------------------------------------

/// Return table counts, the highest season number, and the API version.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    PrettyJson(state.catalog.stats())
}

// ---------------------------------------------------------------------------
// GET /api/catchphrases -- advertised but unbacked
// ---------------------------------------------------------------------------

/// Answer every catchphrase request with the fixed not-found envelope.
///
/// No catchphrase dataset has ever shipped, but the routes were
/// advertised. They stay registered so clients get a stable, specific
/// 404 instead of the generic unknown-path error.
pub async fn catchphrases_unavailable() -> ApiError {
    ApiError::NotFound("Catchphrases")
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

/// Fallback for requests matching no registered path.
pub async fn not_found() -> ApiError {
    ApiError::UnknownPath
}

/// Fallback for registered paths requested with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an extracted path segment as a record id.
///
/// Extraction failures (undecodable percent-escapes) and segments that
/// are not a plain decimal integer both yield `None`; the caller maps
/// that onto the resource's not-found error.
fn parse_id(raw: Result<Path<String>, PathRejection>) -> Option<u32> {
    raw.ok().and_then(|Path(segment)| segment.parse().ok())
}
