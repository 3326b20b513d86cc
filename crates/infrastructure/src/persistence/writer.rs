//! Serialize-and-write for the generated collection file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::serialization::{SerializationError, to_json_stable};

/// Error type for writing generated output.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// JSON serialization failed before any file was touched.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] SerializationError),

    /// The target path is not writable.
    #[error("permission denied writing {0}")]
    PermissionDenied(PathBuf),

    /// Any other file system failure.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Serializes a value to deterministic JSON and writes it to `path` in a
/// single full overwrite. Any existing file at the path is replaced.
///
/// The parent directory is created if missing.
///
/// # Errors
///
/// Returns an error if serialization fails or the write fails; there is
/// no retry and no partial-write recovery.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), WriteError> {
    let json = to_json_stable(value)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(path, e))?;
    }
    fs::write(path, json.as_bytes()).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: io::Error) -> WriteError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        WriteError::PermissionDenied(path.to_path_buf())
    } else {
        WriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_save_json_writes_pretty_output_with_newline() {
        let dir = tempdir().expect("Failed to create temp directory");
        let target = dir.path().join("out.json");

        save_json(&target, &json!({ "name": "test" })).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(written, "{\n  \"name\": \"test\"\n}\n");
    }

    #[test]
    fn test_save_json_creates_missing_parent_directory() {
        let dir = tempdir().expect("Failed to create temp directory");
        let target = dir.path().join("backend").join("out.json");

        save_json(&target, &json!([])).unwrap();

        assert!(target.exists());
    }

    #[test]
    fn test_save_json_overwrites_existing_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let target = dir.path().join("out.json");
        fs::write(&target, "stale contents that are much longer than the new ones").unwrap();

        save_json(&target, &json!(1)).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(written, "1\n");
    }
}
