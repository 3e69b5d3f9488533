//! Axum router construction for the Almanac API.
//!
//! Assembles the complete routing table into a single [`Router`] with
//! CORS and request tracing layered over every route, including the
//! fallbacks for unknown paths and disallowed methods.

use std::sync::Arc;

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::docs;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Almanac server.
///
/// The router includes:
/// - `GET /` -- API reference document
/// - `GET /api/characters[/random|/{id}]` -- character endpoints
/// - `GET /api/episodes[/random|/{id}]` -- episode endpoints
/// - `GET /api/quotes[/random|/{id}]` -- quote endpoints
/// - `GET /api/stats` -- aggregate statistics
/// - `GET /api/catchphrases[/random|/{id}]` -- advertised but unbacked; always 404
///
/// The method contract is GET-only: every other method on a known path,
/// `HEAD` included, gets the 405 envelope (see `get_only` below).
/// `OPTIONS` never reaches the router at all: the CORS layer answers
/// every preflight with an empty 200. The static `random` segment wins
/// over the `{id}` capture, so `/random` never reaches the id parser.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        // Reference document
        .route("/", get_only(docs::api_reference))
        // Characters
        .route("/api/characters", get_only(handlers::list_characters))
        .route("/api/characters/random", get_only(handlers::random_character))
        .route("/api/characters/{id}", get_only(handlers::get_character))
        // Episodes
        .route("/api/episodes", get_only(handlers::list_episodes))
        .route("/api/episodes/random", get_only(handlers::random_episode))
        .route("/api/episodes/{id}", get_only(handlers::get_episode))
        // Quotes
        .route("/api/quotes", get_only(handlers::list_quotes))
        .route("/api/quotes/random", get_only(handlers::random_quote))
        .route("/api/quotes/{id}", get_only(handlers::get_quote))
        // Aggregates
        .route("/api/stats", get_only(handlers::get_stats))
        // Advertised routes with no backing dataset
        .route("/api/catchphrases", get_only(handlers::catchphrases_unavailable))
        .route("/api/catchphrases/random", get_only(handlers::catchphrases_unavailable))
        .route("/api/catchphrases/{id}", get_only(handlers::catchphrases_unavailable))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Register `handler` for `GET` and pair it with an explicit `HEAD`
/// rejection.
///
/// Axum answers `HEAD` with the `GET` handler when no `HEAD` endpoint
/// exists. This API accepts `GET` only, so `HEAD` must land on the same
/// 405 envelope as any other disallowed method, which requires an
/// explicit endpoint rather than the method fallback.
fn get_only<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    on(MethodFilter::GET, handler).on(MethodFilter::HEAD, handlers::method_not_allowed)
}
