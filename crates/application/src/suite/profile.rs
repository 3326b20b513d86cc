//! User Profile & Addresses folder.

use flowgen_domain::{CaptureRule, HttpMethod, Item, Request};
use serde_json::json;

use super::headers::{bearer, bearer_json};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "List Addresses",
            Request::new(HttpMethod::Get, "api/user/addresses").with_headers(bearer("userToken")),
        ),
        Item::new(
            "Add Address",
            Request::new(HttpMethod::Post, "api/user/addresses")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({
                    "label": "Home",
                    "fullName": "{{userName}}",
                    "phone": "{{mobileNumber}}",
                    "line1": "221B Baker Street",
                    "city": "London",
                    "state": "London",
                    "postalCode": "NW16XE",
                    "country": "GB",
                    "isDefault": true
                })),
        )
        .with_captures(&[CaptureRule::new(
            "(Array.isArray(data) && data[0] && data[0]._id) ? data[0]._id : null",
            "addressId",
        )]),
        Item::new(
            "Update Address",
            Request::new(HttpMethod::Put, "api/user/addresses/{{addressId}}")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({
                    "label": "Home Updated",
                    "landmark": "Near Station"
                })),
        ),
        Item::new(
            "Set Default Address",
            Request::new(HttpMethod::Patch, "api/user/addresses/{{addressId}}/default")
                .with_headers(bearer("userToken")),
        ),
        Item::new(
            "Delete Address",
            Request::new(HttpMethod::Delete, "api/user/addresses/{{addressId}}")
                .with_headers(bearer("userToken")),
        ),
    ]
}
