//! Static asset serving module
//!
//! Thin wrapper over the assets directory: traversal guard, MIME lookup,
//! and index.html resolution. Returns `None` when nothing matches so the
//! router produces its own 404.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a file from the assets directory, if one matches the path.
pub async fn serve(path: &str, static_dir: &str, is_head: bool) -> Option<Response<Full<Bytes>>> {
    let file_path = resolve_asset_path(path, static_dir)?;
    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type(file_path.extension().and_then(|e| e.to_str()));
    Some(http::build_file_response(content, content_type, is_head))
}

/// Map a URL path into the assets directory.
///
/// Strips traversal sequences and verifies the canonicalized result stays
/// inside the directory. Directory paths resolve to their index.html.
fn resolve_asset_path(path: &str, static_dir: &str) -> Option<PathBuf> {
    let clean = path.trim_start_matches('/').replace("..", "");
    let mut file_path = Path::new(static_dir).join(&clean);

    if clean.is_empty() || file_path.is_dir() {
        file_path = file_path.join("index.html");
    }

    // Missing directory or file is the common 404 case, not worth logging
    let dir_canonical = Path::new(static_dir).canonicalize().ok()?;
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    Some(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn setup_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("unilinker-static-test-{name}"));
        let _ = std_fs::remove_dir_all(&dir);
        std_fs::create_dir_all(&dir).unwrap();
        std_fs::write(dir.join("index.html"), "<html>home</html>").unwrap();
        std_fs::write(dir.join("app.css"), "body {}").unwrap();
        dir
    }

    #[test]
    fn test_resolves_plain_file() {
        let dir = setup_dir("plain");
        let resolved = resolve_asset_path("/app.css", dir.to_str().unwrap()).unwrap();
        assert!(resolved.ends_with("app.css"));
    }

    #[test]
    fn test_directory_falls_back_to_index() {
        let dir = setup_dir("index");
        let resolved = resolve_asset_path("/", dir.to_str().unwrap()).unwrap();
        assert!(resolved.ends_with("index.html"));
    }

    #[test]
    fn test_traversal_is_blocked() {
        let dir = setup_dir("traversal");
        assert!(resolve_asset_path("/../../etc/passwd", dir.to_str().unwrap()).is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = setup_dir("missing");
        assert!(resolve_asset_path("/nope.js", dir.to_str().unwrap()).is_none());
    }

    #[test]
    fn test_missing_directory_is_none() {
        assert!(resolve_asset_path("/index.html", "no-such-assets-dir").is_none());
    }

    #[tokio::test]
    async fn test_serve_reads_content() {
        let dir = setup_dir("serve");
        let resp = serve("/app.css", dir.to_str().unwrap(), false)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css");
    }
}
