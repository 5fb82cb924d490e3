//! HTTP protocol layer module
//!
//! Response builders and MIME detection, decoupled from the business
//! handlers.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_405_response, build_413_response, build_file_response, build_html_response,
    build_not_found_response, build_options_response,
};
