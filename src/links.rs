//! Link resolver module
//!
//! Builds the custom-scheme deep link and the HTTP web link for a registered
//! university. The format lives in exactly one place: the prefix constants
//! below are used for server-side resolution and are interpolated into the
//! generator page's client script, so the two sides cannot drift apart.

use serde::Serialize;
use thiserror::Error;

use crate::registry::{University, UniversityRegistry};

/// Custom-scheme prefix the mobile application registers for.
pub const DEEP_LINK_PREFIX: &str = "unilinker://university/";

/// Path under which this service serves landing pages.
pub const WEB_LINK_PATH: &str = "/uni/";

/// The single modeled error: an identifier with no registry entry.
/// Malformed input is not a distinct case, it simply matches nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("University not found")]
    UniversityNotFound,
}

/// Resolved link pair for one university, built per-request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkResult {
    pub university: University,
    pub deep_link: String,
    pub web_link: String,
}

/// `unilinker://university/{id}` for a canonical (lowercase) id.
pub fn deep_link(id: &str) -> String {
    format!("{DEEP_LINK_PREFIX}{id}")
}

/// `{scheme}://{host}/uni/{id}` pointing back at this service.
pub fn web_link(scheme: &str, host: &str, id: &str) -> String {
    format!("{scheme}://{host}{WEB_LINK_PATH}{id}")
}

/// Resolve an identifier to its link pair.
///
/// The id is lowercased before the registry lookup; unknown ids fail with
/// [`LinkError::UniversityNotFound`]. Pure apart from the registry read.
pub fn resolve(
    registry: &UniversityRegistry,
    id: &str,
    scheme: &str,
    host: &str,
) -> Result<DeepLinkResult, LinkError> {
    let (canonical, university) = registry.lookup(id).ok_or(LinkError::UniversityNotFound)?;

    Ok(DeepLinkResult {
        university: university.clone(),
        deep_link: deep_link(&canonical),
        web_link: web_link(scheme, host, &canonical),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_link_format() {
        assert_eq!(deep_link("harvard"), "unilinker://university/harvard");
        assert_eq!(deep_link("buet"), "unilinker://university/buet");
    }

    #[test]
    fn test_web_link_format() {
        assert_eq!(
            web_link("http", "localhost:3000", "uiu"),
            "http://localhost:3000/uni/uiu"
        );
        assert_eq!(
            web_link("https", "links.example.com", "harvard"),
            "https://links.example.com/uni/harvard"
        );
    }

    #[test]
    fn test_resolve_lowercases_id() {
        let registry = UniversityRegistry::seed();
        let result = resolve(&registry, "HARVARD", "http", "localhost:3000").expect("registered");
        assert_eq!(result.deep_link, "unilinker://university/harvard");
        assert_eq!(result.web_link, "http://localhost:3000/uni/harvard");
        assert_eq!(result.university.name, "Harvard University");
    }

    #[test]
    fn test_resolve_unknown_id() {
        let registry = UniversityRegistry::seed();
        let err = resolve(&registry, "oxford", "http", "localhost:3000").unwrap_err();
        assert_eq!(err, LinkError::UniversityNotFound);
        assert_eq!(err.to_string(), "University not found");
    }

    #[test]
    fn test_result_wire_format() {
        let registry = UniversityRegistry::seed();
        let result = resolve(&registry, "buet", "http", "localhost:3000").expect("registered");
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["deepLink"], "unilinker://university/buet");
        assert_eq!(value["webLink"], "http://localhost:3000/uni/buet");
        assert_eq!(value["university"]["shortName"], "BUET");
    }
}
