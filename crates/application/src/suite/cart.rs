//! Cart folder.

use flowgen_domain::{CaptureRule, HttpMethod, Item, Request};
use serde_json::json;

use super::headers::{bearer, bearer_json};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "Get Cart",
            Request::new(HttpMethod::Get, "api/cart").with_headers(bearer("userToken")),
        ),
        Item::new(
            "Add Item to Cart",
            Request::new(HttpMethod::Post, "api/cart/items")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({
                    "productId": "{{productId}}",
                    "quantity": 1
                })),
        )
        .with_captures(&[CaptureRule::new(
            "data && data.items && data.items[0] && data.items[0]._id",
            "cartItemId",
        )]),
        Item::new(
            "Update Cart Item Quantity",
            Request::new(HttpMethod::Patch, "api/cart/items/{{cartItemId}}")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({ "quantity": 2 })),
        ),
        Item::new(
            "Remove Cart Item",
            Request::new(HttpMethod::Delete, "api/cart/items/{{cartItemId}}")
                .with_headers(bearer("userToken")),
        ),
        Item::new(
            "Clear Cart",
            Request::new(HttpMethod::Delete, "api/cart").with_headers(bearer("userToken")),
        ),
    ]
}
