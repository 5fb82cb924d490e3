//! University registry module
//!
//! Static, read-only mapping from symbolic identifier to university record.
//! Populated once at startup and never mutated afterwards, so it can be
//! shared across request handlers without synchronization. Identity is the
//! lowercase id string.

use serde::Serialize;
use std::collections::BTreeMap;

/// A registered university record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub name: String,
    pub short_name: String,
    pub location: String,
}

/// Read-only id -> record mapping
///
/// Keys are canonical lowercase identifiers. The ordered map keeps the
/// serialized registry and the generator page stable across runs.
#[derive(Debug)]
pub struct UniversityRegistry {
    entries: BTreeMap<String, University>,
}

impl UniversityRegistry {
    /// Build the registry with its built-in seed entries.
    ///
    /// Extending the registry means adding entries here; no runtime
    /// insert/update/delete path exists.
    pub fn seed() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "harvard".to_string(),
            University {
                name: "Harvard University".to_string(),
                short_name: "Harvard".to_string(),
                location: "Cambridge, Massachusetts, USA".to_string(),
            },
        );
        entries.insert(
            "buet".to_string(),
            University {
                name: "Bangladesh University of Engineering and Technology".to_string(),
                short_name: "BUET".to_string(),
                location: "Dhaka, Bangladesh".to_string(),
            },
        );
        entries.insert(
            "uiu".to_string(),
            University {
                name: "United International University".to_string(),
                short_name: "UIU".to_string(),
                location: "Dhaka, Bangladesh".to_string(),
            },
        );
        Self { entries }
    }

    /// Case-insensitive lookup.
    ///
    /// Returns the canonical lowercase id together with the record, so
    /// callers build links from the canonical form rather than the raw
    /// request input.
    pub fn lookup(&self, id: &str) -> Option<(String, &University)> {
        let key = id.to_lowercase();
        self.entries.get(&key).map(|university| (key, university))
    }

    /// Iterate entries in canonical id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &University)> {
        self.entries.iter()
    }

    /// Canonical ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Full registry view for JSON serialization (id -> record).
    pub const fn as_map(&self) -> &BTreeMap<String, University> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_entries() {
        let registry = UniversityRegistry::seed();
        assert_eq!(registry.len(), 3);
        let ids: Vec<&String> = registry.ids().collect();
        assert_eq!(ids, ["buet", "harvard", "uiu"]);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let registry = UniversityRegistry::seed();
        for id in ["harvard", "HARVARD", "Harvard", "hArVaRd"] {
            let (canonical, university) = registry.lookup(id).expect("registered id");
            assert_eq!(canonical, "harvard");
            assert_eq!(university.name, "Harvard University");
        }
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = UniversityRegistry::seed();
        assert!(registry.lookup("oxford").is_none());
        assert!(registry.lookup("mit").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_lookup_returns_canonical_id() {
        let registry = UniversityRegistry::seed();
        let (canonical, _) = registry.lookup("BUET").expect("registered id");
        assert_eq!(canonical, "buet");
    }

    #[test]
    fn test_wire_field_names() {
        let registry = UniversityRegistry::seed();
        let (_, university) = registry.lookup("uiu").expect("registered id");
        let value = serde_json::to_value(university).expect("serialize");
        assert_eq!(value["shortName"], "UIU");
        assert_eq!(value["location"], "Dhaka, Bangladesh");
    }
}
