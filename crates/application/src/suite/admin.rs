//! Admin folder: category, product, and order management.
//!
//! The admin login reuses the email login endpoint but stores its token
//! under `adminToken`, keeping the user session intact.

use flowgen_domain::{CaptureRule, HttpMethod, Item, Request};
use serde_json::json;

use super::headers::{bearer, bearer_json, json_content};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "Admin Login (Email & Password)",
            Request::new(HttpMethod::Post, "api/auth/login/email")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "email": "{{adminEmail}}",
                    "password": "{{adminPassword}}"
                })),
        )
        .with_captures(&[CaptureRule::new("data && data.token", "adminToken")]),
        Item::new(
            "List Categories (Admin)",
            Request::new(HttpMethod::Get, "api/admin/categories")
                .with_headers(bearer("adminToken")),
        ),
        Item::new(
            "Create Category",
            Request::new(HttpMethod::Post, "api/admin/categories")
                .with_headers(bearer_json("adminToken"))
                .with_json_body(&json!({
                    "name": "Electronics",
                    "description": "Devices and accessories"
                })),
        )
        .with_captures(&[CaptureRule::new("data && data._id", "categoryId")]),
        Item::new(
            "Update Category",
            Request::new(HttpMethod::Put, "api/admin/categories/{{categoryId}}")
                .with_headers(bearer_json("adminToken"))
                .with_json_body(&json!({
                    "description": "Electronics and gadgets",
                    "isActive": true
                })),
        ),
        Item::new(
            "Delete Category",
            Request::new(HttpMethod::Delete, "api/admin/categories/{{categoryId}}")
                .with_headers(bearer("adminToken")),
        ),
        Item::new(
            "List Products (Admin)",
            Request::new(HttpMethod::Get, "api/admin/products").with_headers(bearer("adminToken")),
        ),
        Item::new(
            "Create Product",
            Request::new(HttpMethod::Post, "api/admin/products")
                .with_headers(bearer_json("adminToken"))
                .with_json_body(&json!({
                    "name": "Sample Phone",
                    "description": "Mid-range device",
                    "price": 49999,
                    "salePrice": 44999,
                    "currency": "INR",
                    "stock": 25,
                    "sku": "PHONE-001",
                    "category": "{{categoryId}}",
                    "attributes": [
                        { "key": "color", "value": "black" },
                        { "key": "storage", "value": "128GB" }
                    ],
                    "images": [
                        { "url": "https://example.com/phone.jpg", "altText": "Phone" }
                    ],
                    "isActive": true
                })),
        )
        .with_captures(&[
            CaptureRule::new("data && data._id", "productId"),
            CaptureRule::new("data && data.slug", "productSlug"),
        ]),
        Item::new(
            "Update Product",
            Request::new(HttpMethod::Put, "api/admin/products/{{productId}}")
                .with_headers(bearer_json("adminToken"))
                .with_json_body(&json!({
                    "price": 45999,
                    "stock": 30,
                    "isActive": true
                })),
        ),
        Item::new(
            "Delete Product",
            Request::new(HttpMethod::Delete, "api/admin/products/{{productId}}")
                .with_headers(bearer("adminToken")),
        ),
        Item::new(
            "List Orders (Admin)",
            Request::new(HttpMethod::Get, "api/orders/admin").with_headers(bearer("adminToken")),
        ),
        Item::new(
            "Update Order Status (Admin)",
            Request::new(HttpMethod::Patch, "api/orders/admin/{{orderId}}")
                .with_headers(bearer_json("adminToken"))
                .with_json_body(&json!({
                    "status": "confirmed",
                    "paymentStatus": "paid"
                })),
        ),
    ]
}
