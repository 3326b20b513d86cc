//! ICO folder: token price, holdings, buy and sell.

use flowgen_domain::{CaptureRule, HttpMethod, Item, Request};
use serde_json::json;

use super::headers::{bearer, bearer_json};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "Public Token Price",
            Request::new(HttpMethod::Get, "api/ico/price"),
        ),
        Item::new(
            "My ICO Summary",
            Request::new(HttpMethod::Get, "api/ico/summary").with_headers(bearer("userToken")),
        ),
        Item::new(
            "ICO Transactions History",
            Request::new(HttpMethod::Get, "api/ico/transactions").with_headers(bearer("userToken")),
        ),
        Item::new(
            "Buy Tokens (PhonePe)",
            Request::new(HttpMethod::Post, "api/ico/buy")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({ "tokenAmount": 10 })),
        )
        .with_captures(&[CaptureRule::new(
            "data && data.transaction && data.transaction._id",
            "icoTransactionId",
        )]),
        Item::new(
            "Sell Tokens",
            Request::new(HttpMethod::Post, "api/ico/sell")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({ "tokenAmount": 5 })),
        )
        .with_captures(&[CaptureRule::new(
            "data && data.transaction && data.transaction._id",
            "icoTransactionId",
        )]),
    ]
}
