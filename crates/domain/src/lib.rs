//! Flowgen Domain - Postman Collection v2.1 document model
//!
//! This crate defines the document tree the generator assembles and
//! serializes. All types are pure Rust with no I/O dependencies.
//! Struct field declaration order matches the emitted JSON key order,
//! and optional fields use `Option` + `skip_serializing_if` so that an
//! absent field never serializes as `null` or an empty container.

pub mod collection;
pub mod item;
pub mod method;
pub mod request;
pub mod script;
pub mod url;

pub use collection::{Collection, CollectionInfo, SCHEMA_V2_1, Variable};
pub use item::{Folder, Item};
pub use method::HttpMethod;
pub use request::{Header, Request, RequestBody};
pub use script::{CaptureRule, Event, Script};
pub use url::{QueryParam, RequestUrl};
