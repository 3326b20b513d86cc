//! Deterministic JSON serialization for generated collections.
//!
//! Ensures byte-identical output across runs by:
//! - Preserving struct field and map insertion order
//! - Using 2-space indentation
//! - Adding trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
