//! Payments folder: PhonePe callback simulation.
//!
//! Both callbacks hit the same endpoint; they differ only in which
//! captured transaction id is replayed as the merchant transaction.

use flowgen_domain::{HttpMethod, Item, Request};
use serde_json::json;

use super::headers::json_content;

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "PhonePe Callback - Order",
            Request::new(HttpMethod::Post, "api/payments/phonepe/callback")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "code": "{{paymentCode}}",
                    "merchantTransactionId": "{{orderId}}",
                    "transactionId": "{{phonePeTransactionId}}",
                    "amount": 1000
                })),
        ),
        Item::new(
            "PhonePe Callback - ICO",
            Request::new(HttpMethod::Post, "api/payments/phonepe/callback")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "code": "{{paymentCode}}",
                    "merchantTransactionId": "{{icoTransactionId}}",
                    "transactionId": "{{phonePeTransactionId}}",
                    "amount": 1000
                })),
        ),
    ]
}
