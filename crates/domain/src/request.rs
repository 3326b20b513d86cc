//! Request descriptor types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::method::HttpMethod;
use crate::url::RequestUrl;

/// A request header key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The header name.
    pub key: String,
    /// The header value; may embed `{{variable}}` placeholders.
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A raw-mode request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Body mode; always `raw` in this generator.
    pub mode: String,
    /// The body text embedded in the request.
    pub raw: String,
}

impl RequestBody {
    /// Wraps a JSON value as raw body text, pretty-printed with 2-space
    /// indentation. Object key order is preserved.
    #[must_use]
    pub fn raw_json(value: &Value) -> Self {
        // Serializing a `Value` cannot fail: its map keys are always strings.
        #[allow(clippy::expect_used)]
        let raw = serde_json::to_string_pretty(value).expect("Value serialization is infallible");
        Self {
            mode: "raw".to_string(),
            raw,
        }
    }
}

/// A single HTTP request descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The HTTP verb.
    pub method: HttpMethod,
    /// Header list; empty when none were supplied.
    pub header: Vec<Header>,
    /// The structured target URL.
    pub url: RequestUrl,
    /// Optional JSON body; the field is absent entirely when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

impl Request {
    /// Creates a body-less request with no headers for the given path.
    #[must_use]
    pub fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            header: Vec::new(),
            url: RequestUrl::templated(path),
            body: None,
        }
    }

    /// Replaces the header list.
    #[must_use]
    pub fn with_headers(mut self, header: Vec<Header>) -> Self {
        self.header = header;
        self
    }

    /// Attaches a raw-mode JSON body.
    #[must_use]
    pub fn with_json_body(mut self, body: &Value) -> Self {
        self.body = Some(RequestBody::raw_json(body));
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_without_body_has_no_body_field() {
        let request = Request::new(HttpMethod::Get, "api/cart");
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("body").is_none());
        assert_eq!(json["header"], json!([]));
    }

    #[test]
    fn test_body_raw_text_round_trips() {
        let body = json!({ "productId": "{{productId}}", "quantity": 1 });
        let request = Request::new(HttpMethod::Post, "api/cart/items").with_json_body(&body);

        let raw = &request.body.unwrap().raw;
        let parsed: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, body);
    }

    #[test]
    fn test_body_uses_two_space_indent() {
        let request =
            Request::new(HttpMethod::Post, "api/cart/items").with_json_body(&json!({ "a": 1 }));
        assert_eq!(request.body.unwrap().raw, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_body_preserves_key_order() {
        let body = json!({ "zeta": 1, "alpha": 2 });
        let raw = RequestBody::raw_json(&body).raw;
        assert!(raw.find("zeta").unwrap() < raw.find("alpha").unwrap());
    }

    #[test]
    fn test_headers_replace_default_empty_list() {
        let request = Request::new(HttpMethod::Post, "api/auth/login/email")
            .with_headers(vec![Header::new("Content-Type", "application/json")]);
        assert_eq!(request.header.len(), 1);
    }
}
