// Application state module
// Immutable state shared by every request handler

use crate::registry::UniversityRegistry;

use super::types::Config;

/// Shared application state
///
/// Constructed once in `main` and handed to the router behind an `Arc`.
/// Nothing here is mutated after startup, so handlers read it without locks.
pub struct AppState {
    pub config: Config,
    pub registry: UniversityRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: UniversityRegistry::seed(),
        }
    }
}
