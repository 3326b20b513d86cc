//! Collection items and folders.

use serde::{Deserialize, Serialize};

use crate::request::Request;
use crate::script::{CaptureRule, Event};

/// A named request plus optional post-response capture logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the request.
    pub name: String,
    /// The request descriptor.
    pub request: Request,
    /// Saved response examples; always empty in generated output.
    #[serde(default)]
    pub response: Vec<serde_json::Value>,
    /// Post-response events; absent when the item captures nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<Event>>,
}

impl Item {
    /// Creates an item with no capture logic.
    #[must_use]
    pub fn new(name: impl Into<String>, request: Request) -> Self {
        Self {
            name: name.into(),
            request,
            response: Vec::new(),
            event: None,
        }
    }

    /// Attaches capture rules as a single post-response test script.
    #[must_use]
    pub fn with_captures(mut self, rules: &[CaptureRule]) -> Self {
        self.event = Some(vec![Event::captures(rules)]);
        self
    }
}

/// A named ordered group of items. Folders do not nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Display name of the folder.
    pub name: String,
    /// The folder's items, in display order.
    pub item: Vec<Item>,
}

impl Folder {
    /// Creates a folder holding the given items.
    #[must_use]
    pub fn new(name: impl Into<String>, item: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            item,
        }
    }
}
