//! Orders folder.

use flowgen_domain::{CaptureRule, HttpMethod, Item, Request};
use serde_json::json;

use super::headers::{bearer, bearer_json};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "Create Order (PhonePe)",
            Request::new(HttpMethod::Post, "api/orders")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({
                    "shippingAddress": {
                        "name": "{{userName}}",
                        "line1": "221B Baker Street",
                        "city": "London",
                        "state": "London",
                        "postalCode": "NW16XE",
                        "country": "GB",
                        "phone": "{{mobileNumber}}"
                    },
                    "billingAddress": {
                        "name": "{{userName}}",
                        "line1": "221B Baker Street",
                        "city": "London",
                        "state": "London",
                        "postalCode": "NW16XE",
                        "country": "GB",
                        "phone": "{{mobileNumber}}"
                    },
                    "paymentMethod": "phonepe",
                    "shippingFee": 0,
                    "taxes": 0
                })),
        )
        .with_captures(&[CaptureRule::new("data && data.order && data.order._id", "orderId")]),
        Item::new(
            "Get My Orders",
            Request::new(HttpMethod::Get, "api/orders").with_headers(bearer("userToken")),
        ),
        Item::new(
            "Get Order by Id",
            Request::new(HttpMethod::Get, "api/orders/{{orderId}}")
                .with_headers(bearer("userToken")),
        ),
    ]
}
