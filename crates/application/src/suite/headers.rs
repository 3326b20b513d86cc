//! Shared header sets.

use flowgen_domain::Header;

/// `Content-Type: application/json`.
pub(crate) fn json_content() -> Vec<Header> {
    vec![Header::new("Content-Type", "application/json")]
}

/// Bearer authorization sourced from the given token variable.
pub(crate) fn bearer(token_var: &str) -> Vec<Header> {
    vec![Header::new(
        "Authorization",
        format!("Bearer {{{{{token_var}}}}}"),
    )]
}

/// Bearer authorization plus JSON content type, in that order.
pub(crate) fn bearer_json(token_var: &str) -> Vec<Header> {
    let mut headers = bearer(token_var);
    headers.extend(json_content());
    headers
}
