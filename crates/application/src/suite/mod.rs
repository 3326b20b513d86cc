//! The ICO Commerce end-to-end test suite.
//!
//! Everything the generator emits is assembled here from hard-coded
//! tables: the flat collection-variable list and the nine folders
//! covering the full app flow from signup through payment callbacks.
//! No validation happens anywhere in this pipeline; an unknown
//! placeholder would surface as an unresolved token in Postman, which
//! is why the tests below check placeholder coverage instead.

mod admin;
mod auth;
mod cart;
mod catalog;
mod headers;
mod ico;
mod orders;
mod payments;
mod profile;

use flowgen_domain::{Collection, CollectionInfo, Folder, HttpMethod, Item, Request, Variable};

const COLLECTION_NAME: &str = "ICO Commerce - Full App Flow";
const POSTMAN_ID: &str = "f065e3f3-bcf9-4c38-9a8d-7c3e6abfacd0";
const DESCRIPTION: &str = "End-to-end Postman collection for running the full signup, login, \
     catalog, cart, order, ICO, admin, and payment callback flows against the backend. Start \
     with Auth -> Signup Email Init and move down in order.";

/// Assembles the full collection document.
#[must_use]
pub fn collection() -> Collection {
    Collection {
        info: CollectionInfo::new(COLLECTION_NAME, POSTMAN_ID, DESCRIPTION),
        variable: variables(),
        item: vec![
            Folder::new(
                "Health",
                vec![Item::new(
                    "Health Check",
                    Request::new(HttpMethod::Get, "health"),
                )],
            ),
            Folder::new("Auth - Signup & Login", auth::items()),
            Folder::new("User Profile & Addresses", profile::items()),
            Folder::new("Catalog", catalog::items()),
            Folder::new("Cart", cart::items()),
            Folder::new("Orders", orders::items()),
            Folder::new("ICO", ico::items()),
            Folder::new("Admin", admin::items()),
            Folder::new("Payments", payments::items()),
        ],
    }
}

/// The flat collection-variable list.
///
/// Order defines display order only. Variables with empty defaults are
/// filled in at run time by the capture scripts.
#[must_use]
pub fn variables() -> Vec<Variable> {
    vec![
        Variable::new("baseUrl", "https://nirv-ico.onrender.com"),
        Variable::new("userName", "Local Test User"),
        Variable::new("userEmail", "user+ico@example.com"),
        Variable::new("userPassword", "Password123!"),
        Variable::new("mobileNumber", "9998887777"),
        Variable::new("countryCode", "+91"),
        Variable::new("userPin", "1234"),
        Variable::new("otpCode", "000000"),
        Variable::new("mobileOtp", "000000"),
        Variable::new("userId", ""),
        Variable::new("userToken", ""),
        Variable::new("addressId", ""),
        Variable::new("categoryId", ""),
        Variable::new("productId", ""),
        Variable::new("productSlug", ""),
        Variable::new("cartItemId", ""),
        Variable::new("orderId", ""),
        Variable::new("icoTransactionId", ""),
        Variable::new("adminEmail", "admin@example.com"),
        Variable::new("adminPassword", "Password123!"),
        Variable::new("adminToken", ""),
        Variable::new("paymentCode", "PAYMENT_SUCCESS"),
        Variable::new("phonePeTransactionId", "pp-demo-123"),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_folders_are_in_flow_order() {
        let names: Vec<String> = collection().item.into_iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "Health",
                "Auth - Signup & Login",
                "User Profile & Addresses",
                "Catalog",
                "Cart",
                "Orders",
                "ICO",
                "Admin",
                "Payments",
            ]
        );
    }

    #[test]
    fn test_request_total() {
        assert_eq!(collection().request_count(), 46);
    }

    #[test]
    fn test_variable_keys_are_unique() {
        let vars = variables();
        let keys: HashSet<&str> = vars.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys.len(), vars.len());
    }

    #[test]
    fn test_every_placeholder_is_declared() {
        let collection = collection();
        let declared: HashSet<&str> = collection
            .variable
            .iter()
            .map(|v| v.key.as_str())
            .collect();

        let rendered = serde_json::to_string(&collection).unwrap();
        let placeholder = regex::Regex::new(r"\{\{(\w+)\}\}").unwrap();
        for capture in placeholder.captures_iter(&rendered) {
            let name = capture.get(1).unwrap().as_str();
            assert!(declared.contains(name), "undeclared placeholder {{{{{name}}}}}");
        }
    }

    #[test]
    fn test_add_item_to_cart_scenario() {
        let collection = collection();
        let cart = collection
            .item
            .iter()
            .find(|f| f.name == "Cart")
            .expect("Cart folder");
        let add = cart
            .item
            .iter()
            .find(|i| i.name == "Add Item to Cart")
            .expect("Add Item to Cart item");

        let raw = &add.request.body.as_ref().expect("body").raw;
        assert!(raw.contains("\"quantity\": 1"));

        let events = add.event.as_ref().expect("capture event");
        let assignments = events[0]
            .script
            .exec
            .iter()
            .filter(|line| line.contains("pm.collectionVariables.set('cartItemId'"))
            .count();
        assert_eq!(assignments, 1);
    }

    #[test]
    fn test_catalog_listing_carries_limit_query() {
        let collection = collection();
        let catalog = collection
            .item
            .iter()
            .find(|f| f.name == "Catalog")
            .expect("Catalog folder");
        let listing = &catalog.item[0].request.url;

        assert_eq!(listing.path, vec!["api".to_string(), "products".to_string()]);
        let query = listing.query.as_ref().expect("query list");
        assert_eq!(query.len(), 1);
        assert_eq!(query[0].key, "limit");
        assert_eq!(query[0].value.as_deref(), Some("12"));
    }

    #[test]
    fn test_health_check_has_no_headers_body_or_captures() {
        let collection = collection();
        let health = &collection.item[0].item[0];
        assert!(health.request.header.is_empty());
        assert!(health.request.body.is_none());
        assert!(health.event.is_none());
    }
}
