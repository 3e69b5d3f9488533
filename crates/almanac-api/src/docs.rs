//! The API reference document served at the root path.
//!
//! `GET /` returns a static JSON description of every route: method,
//! path, accepted query parameters, and a copy-pasteable example URL.
//! The document is assembled from a fixed table; nothing is read from
//! disk at request time.

use axum::response::IntoResponse;
use serde::Serialize;

use crate::response::PrettyJson;

/// One query parameter accepted by a route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDoc {
    /// Parameter name as it appears in the query string.
    pub name: &'static str,
    /// What the parameter filters on.
    pub description: &'static str,
}

/// One routable endpoint in the reference document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDoc {
    /// HTTP method.
    pub method: &'static str,
    /// Path pattern.
    pub path: &'static str,
    /// What the endpoint returns.
    pub description: &'static str,
    /// Accepted query parameters; empty when the route takes none.
    pub query_params: &'static [ParamDoc],
    /// Example request against a locally-running server.
    pub example: &'static str,
}

/// Substring filter parameter shared by all collection routes.
const SEARCH_PARAM: ParamDoc = ParamDoc {
    name: "search",
    description: "Case-insensitive substring matched against every field",
};

/// The fixed route table the reference document is generated from.
const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "GET",
        path: "/",
        description: "This reference document",
        query_params: &[],
        example: "http://localhost:3000/",
    },
    RouteDoc {
        method: "GET",
        path: "/api/characters",
        description: "List characters",
        query_params: &[SEARCH_PARAM],
        example: "http://localhost:3000/api/characters?search=voss",
    },
    RouteDoc {
        method: "GET",
        path: "/api/characters/random",
        description: "One character picked uniformly at random",
        query_params: &[],
        example: "http://localhost:3000/api/characters/random",
    },
    RouteDoc {
        method: "GET",
        path: "/api/characters/{id}",
        description: "A single character plus every quote credited to them",
        query_params: &[],
        example: "http://localhost:3000/api/characters/1",
    },
    RouteDoc {
        method: "GET",
        path: "/api/episodes",
        description: "List episodes",
        query_params: &[
            ParamDoc {
                name: "season",
                description: "Exact season number, applied before search",
            },
            SEARCH_PARAM,
        ],
        example: "http://localhost:3000/api/episodes?season=2&search=storm",
    },
    RouteDoc {
        method: "GET",
        path: "/api/episodes/random",
        description: "One episode picked uniformly at random",
        query_params: &[],
        example: "http://localhost:3000/api/episodes/random",
    },
    RouteDoc {
        method: "GET",
        path: "/api/episodes/{id}",
        description: "A single episode",
        query_params: &[],
        example: "http://localhost:3000/api/episodes/9",
    },
    RouteDoc {
        method: "GET",
        path: "/api/quotes",
        description: "List quotes",
        query_params: &[
            ParamDoc {
                name: "character",
                description: "Substring matched against the credited speaker, applied before search",
            },
            SEARCH_PARAM,
        ],
        example: "http://localhost:3000/api/quotes?character=pal",
    },
    RouteDoc {
        method: "GET",
        path: "/api/quotes/random",
        description: "One quote picked uniformly at random",
        query_params: &[],
        example: "http://localhost:3000/api/quotes/random",
    },
    RouteDoc {
        method: "GET",
        path: "/api/quotes/{id}",
        description: "A single quote",
        query_params: &[],
        example: "http://localhost:3000/api/quotes/14",
    },
    RouteDoc {
        method: "GET",
        path: "/api/stats",
        description: "Dataset totals, season count, and API version",
        query_params: &[],
        example: "http://localhost:3000/api/stats",
    },
    RouteDoc {
        method: "GET",
        path: "/api/catchphrases",
        description: "Catchphrase list (currently returns 404; no catchphrase data is shipped)",
        query_params: &[],
        example: "http://localhost:3000/api/catchphrases",
    },
];

/// Serve the API reference document.
pub async fn api_reference() -> impl IntoResponse {
    PrettyJson(serde_json::json!({
        "name": "Almanac API",
        "description": "Read-only JSON lookup for the series Outpost Nine: characters, episodes, and quotes with filtering and random picks.",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ROUTES,
    }))
}
