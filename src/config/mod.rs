// Configuration module entry point
// Loads settings from file, environment, and code-level defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig, StaticConfig};

impl Config {
    /// Load configuration from the default "config.toml" location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, later ones winning: code defaults, optional config file,
    /// `UNILINKER`-prefixed environment variables, and finally the plain
    /// `PORT` variable so the conventional container contract holds
    /// (unset means 3000).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("UNILINKER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.keep_alive_timeout", 75)?
            .set_default("server.request_timeout", 30)?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB, GET-only service
            .set_default("static_files.enabled", true)?
            .set_default("static_files.dir", "public")?;

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Nonexistent file path exercises the pure-defaults branch.
        let cfg = Config::load_from("nonexistent-config-for-test").expect("defaults load");
        if std::env::var("PORT").is_err() {
            assert_eq!(cfg.server.port, 3000);
        }
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.logging.access_log);
        assert!(!cfg.http.enable_cors);
        assert_eq!(cfg.static_files.dir, "public");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("nonexistent-config-for-test").expect("defaults load");
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 8080;
        let addr = cfg.socket_addr().expect("valid address");
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }
}
