//! Flowgen Infrastructure - Serialization and file output
//!
//! The only I/O in the generator lives here: deterministic JSON
//! rendering and the single full-overwrite file write.

pub mod persistence;
pub mod serialization;

pub use persistence::{WriteError, save_json};
pub use serialization::{SerializationError, from_json, to_json_stable};
