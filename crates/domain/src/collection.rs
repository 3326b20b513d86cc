//! Top-level collection document.

use serde::{Deserialize, Serialize};

use crate::item::Folder;

/// Postman Collection v2.1 schema URL.
pub const SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// A collection variable: a named string placeholder with a default value.
///
/// Requests reference variables as `{{key}}`; capture scripts update them
/// at run time. List order defines display order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// The variable name.
    pub key: String,
    /// The default value; often empty until a capture fills it in.
    pub value: String,
}

impl Variable {
    /// Creates a new variable.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Collection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Display name of the collection.
    pub name: String,
    /// Fixed Postman identifier; stable across runs for determinism.
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    /// Human-readable description shown in the Postman sidebar.
    pub description: String,
    /// Schema URL declaring the interchange format version.
    pub schema: String,
}

impl CollectionInfo {
    /// Creates v2.1 collection metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        postman_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            postman_id: postman_id.into(),
            description: description.into(),
            schema: SCHEMA_V2_1.to_string(),
        }
    }
}

/// The full collection document: metadata, flat variable list, folders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection metadata.
    pub info: CollectionInfo,
    /// The flat variable list.
    pub variable: Vec<Variable>,
    /// Top-level folders, in display order.
    pub item: Vec<Folder>,
}

impl Collection {
    /// Total number of requests across all folders.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.item.iter().map(|folder| folder.item.len()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::method::HttpMethod;
    use crate::request::Request;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_info_serializes_with_underscore_id_key() {
        let info = CollectionInfo::new("Test", "abc-123", "A test collection");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["_postman_id"], "abc-123");
        assert_eq!(json["schema"], SCHEMA_V2_1);
    }

    #[test]
    fn test_request_count_sums_folders() {
        let collection = Collection {
            info: CollectionInfo::new("Test", "abc-123", ""),
            variable: vec![Variable::new("baseUrl", "https://api.example.com")],
            item: vec![
                Folder::new(
                    "Health",
                    vec![Item::new("Health Check", Request::new(HttpMethod::Get, "health"))],
                ),
                Folder::new(
                    "Cart",
                    vec![
                        Item::new("Get Cart", Request::new(HttpMethod::Get, "api/cart")),
                        Item::new("Clear Cart", Request::new(HttpMethod::Delete, "api/cart")),
                    ],
                ),
            ],
        };
        assert_eq!(collection.request_count(), 3);
    }
}
