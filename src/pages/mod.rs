//! Page rendering module
//!
//! Pure functions from resolved data to HTML strings. Three documents:
//! the generator (home) page, the deep-link landing page, and the APK
//! install instructions page. Link formulas in client scripts are
//! interpolated from `crate::links` constants rather than retyped.

mod download;
mod generator;
mod landing;

pub use download::download_page;
pub use generator::generator_page;
pub use landing::{
    landing_page, APP_LAUNCH_TIMEOUT_MS, DEFERRED_LINK_KEY, DEFERRED_UNIVERSITY_KEY,
};
