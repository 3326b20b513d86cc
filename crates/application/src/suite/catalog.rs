//! Catalog folder: public product browsing.

use flowgen_domain::{HttpMethod, Item, Request};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "List Products",
            Request::new(HttpMethod::Get, "api/products?limit=12"),
        ),
        Item::new(
            "List Categories (Public)",
            Request::new(HttpMethod::Get, "api/products/categories/list"),
        ),
        Item::new(
            "Get Product by Id or Slug",
            Request::new(HttpMethod::Get, "api/products/{{productId}}"),
        ),
    ]
}
