// API module entry
// JSON endpoints: registry dump, link generation, liveness probe

mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::convert::Infallible;

use crate::config::AppState;
use crate::links::{self, LinkError};
use crate::logger;
use response::json_response;

/// GET /api/universities
///
/// Full registry as an id -> record object; keys are exactly the
/// registered id set.
pub fn handle_universities(state: &AppState) -> Result<Response<Full<Bytes>>, Infallible> {
    logger::log_api_request("GET", "/api/universities", 200);
    json_response(StatusCode::OK, state.registry.as_map())
}

/// GET /api/generate-link/:id
///
/// Resolves the id against the registry and responds with the link pair,
/// or a 404 `{error}` body for unknown ids.
pub fn handle_generate_link(
    state: &AppState,
    id: &str,
    scheme: &str,
    host: &str,
) -> Result<Response<Full<Bytes>>, Infallible> {
    match links::resolve(&state.registry, id, scheme, host) {
        Ok(result) => {
            logger::log_api_request("GET", &format!("/api/generate-link/{id}"), 200);
            json_response(StatusCode::OK, &result)
        }
        Err(err @ LinkError::UniversityNotFound) => {
            logger::log_api_request("GET", &format!("/api/generate-link/{id}"), 404);
            json_response(
                StatusCode::NOT_FOUND,
                &serde_json::json!({ "error": err.to_string() }),
            )
        }
    }
}

/// GET /health — liveness probe
pub fn handle_health() -> Result<Response<Full<Bytes>>, Infallible> {
    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "status": "ok",
            "message": "UniLinker deep link server is running",
        }),
    )
}
