//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and dispatch to the API, page, and static-file handlers.
//! Path parameters are extracted by pure helpers so the matching rules
//! stay unit-testable.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::links;
use crate::logger;
use crate::pages;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    if state.config.logging.access_log {
        logger::log_request(method, req.uri(), req.version());
    }

    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    if state.config.logging.show_headers {
        logger::log_headers_count(req.headers().len());
    }

    let scheme = request_scheme(&req);
    let host = request_host(&req).unwrap_or_else(|| {
        format!("{}:{}", state.config.server.host, state.config.server.port)
    });

    route_request(path, is_head, &scheme, &host, &state).await
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    let size_str = content_length.to_str().ok()?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}

/// Route request based on path
async fn route_request(
    path: &str,
    is_head: bool,
    scheme: &str,
    host: &str,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // Liveness probe first, always fast
    if path == "/health" {
        return api::handle_health();
    }

    if path == "/" {
        let html = pages::generator_page(&state.registry);
        if state.config.logging.access_log {
            logger::log_response(html.len());
        }
        return Ok(http::build_html_response(html, is_head));
    }

    if path == "/api/universities" {
        return api::handle_universities(state);
    }

    if let Some(id) = path_param(path, "/api/generate-link/") {
        return api::handle_generate_link(state, id, scheme, host);
    }

    if let Some(id) = path_param(path, links::WEB_LINK_PATH) {
        return Ok(landing(state, id, is_head));
    }

    if path == "/download-apk" {
        let html = pages::download_page(host);
        return Ok(http::build_html_response(html, is_head));
    }

    // Anything else falls through to the static assets directory
    if state.config.static_files.enabled {
        if let Some(resp) = static_files::serve(path, &state.config.static_files.dir, is_head).await
        {
            return Ok(resp);
        }
    }

    Ok(http::build_not_found_response("404 Not Found"))
}

/// Landing page for `/uni/:id`, or a 404 body for unknown ids
fn landing(state: &AppState, id: &str, is_head: bool) -> Response<Full<Bytes>> {
    match state.registry.lookup(id) {
        Some((canonical, university)) => {
            let deep_link = links::deep_link(&canonical);
            let html = pages::landing_page(&canonical, university, &deep_link);
            if state.config.logging.access_log {
                logger::log_response(html.len());
            }
            http::build_html_response(html, is_head)
        }
        None => http::build_not_found_response("University not found"),
    }
}

/// Extract the single path segment after `prefix`.
///
/// Rejects empty values and nested segments; those fall through to the
/// static-file handler and ultimately a 404.
fn path_param<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

/// Request scheme: honor a proxy's x-forwarded-proto, else plain http.
fn request_scheme(req: &Request<hyper::body::Incoming>) -> String {
    req.headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http")
        .to_string()
}

/// Host header, if present and readable.
fn request_host(req: &Request<hyper::body::Incoming>) -> Option<String> {
    req.headers()
        .get("host")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
