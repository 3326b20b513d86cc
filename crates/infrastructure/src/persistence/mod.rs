//! Single-file collection output.

mod writer;

pub use writer::{WriteError, save_json};
