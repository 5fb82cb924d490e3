//! Logger module
//!
//! println/eprintln-based logging: a startup banner listing every
//! registered deep link, timestamped access-log lines, and error/warning
//! helpers. Access logging is gated by configuration at the call sites.

use chrono::Local;
use std::net::SocketAddr;

use crate::links;
use crate::registry::UniversityRegistry;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, registry: &UniversityRegistry) {
    println!("======================================");
    println!("UniLinker deep link server started");
    println!("Listening on: http://{addr}");
    println!();
    println!("Registered deep links:");
    for id in registry.ids() {
        println!("  - http://{addr}{}{id}", links::WEB_LINK_PATH);
        println!("    -> {}", links::deep_link(id));
    }
    println!();
    println!("Endpoints:");
    println!("  GET  /                       - Link generator interface");
    println!("  GET  /api/universities       - List all universities");
    println!("  GET  /api/generate-link/:id  - Generate deep link");
    println!("  GET  /uni/:id                - Deep link landing page");
    println!("  GET  /download-apk           - APK install instructions");
    println!("  GET  /health                 - Liveness probe");
    println!("======================================\n");
}

pub fn log_request(method: &hyper::Method, uri: &hyper::Uri, version: hyper::Version) {
    println!("[{}] \"{method} {uri} {version:?}\"", timestamp());
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    println!("[{}] [API] {method} {path} - {status}", timestamp());
}

pub fn log_response(bytes: usize) {
    println!("[Response] {bytes} bytes");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_headers_count(count: usize) {
    println!("[Headers] Count: {count}");
}
