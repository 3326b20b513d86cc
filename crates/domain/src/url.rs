//! Templated request URL construction.
//!
//! Every request in the generated collection targets a path under the
//! `{{baseUrl}}` collection variable. The structured form Postman expects
//! (raw string, host list, path segments, query list) is derived from a
//! single path string here.

use serde::{Deserialize, Serialize};

/// Host template every generated URL hangs off.
const HOST_TEMPLATE: &str = "{{baseUrl}}";

/// A single query string parameter.
///
/// A segment without `=` keeps its key and carries no value field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key.
    pub key: String,
    /// The parameter value; absent for a bare `key` segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl QueryParam {
    /// Creates a key-value parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a parameter with a key and no value.
    #[must_use]
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Structured URL descriptor under the `{{baseUrl}}` host template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUrl {
    /// The full templated URL string, query suffix included.
    pub raw: String,
    /// Host segments; always the single `{{baseUrl}}` template.
    pub host: Vec<String>,
    /// Path segments, split on `/`.
    pub path: Vec<String>,
    /// Query parameters; absent entirely when the path had no query suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<QueryParam>>,
}

impl RequestUrl {
    /// Builds the structured URL for a path like `api/products?limit=12`.
    ///
    /// The path is split on the first `?`; the suffix (when present) is
    /// split on `&`, empty segments are dropped, and each remaining
    /// segment is split on the first `=`. A segment without `=` yields a
    /// bare key. A path with no `?`, or an all-empty suffix, yields no
    /// query list at all rather than an empty one.
    #[must_use]
    pub fn templated(path: &str) -> Self {
        let (base, query) = match path.split_once('?') {
            Some((base, suffix)) => (base, parse_query(suffix)),
            None => (path, None),
        };

        Self {
            raw: format!("{HOST_TEMPLATE}/{path}"),
            host: vec![HOST_TEMPLATE.to_string()],
            path: base.split('/').map(ToString::to_string).collect(),
            query,
        }
    }
}

fn parse_query(suffix: &str) -> Option<Vec<QueryParam>> {
    let params: Vec<QueryParam> = suffix
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => QueryParam::new(key, value),
            None => QueryParam::bare(segment),
        })
        .collect();

    if params.is_empty() { None } else { Some(params) }
}
