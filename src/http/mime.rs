//! MIME type detection module
//!
//! Returns the Content-Type for the asset extensions this service can
//! plausibly hold in its public directory.

/// Get MIME Content-Type based on file extension
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff2") => "font/woff2",
        Some("apk") => "application/vnd.android.package-archive",
        _ => "application/octet-stream",
    }
}
