//! Filesystem predicates.
//!
//! The only boundary-crossing checks in the crate. Any metadata or access
//! error (missing path, permission denied) yields `false`; nothing here
//! panics or returns an error.

use std::fs::File;
use std::path::Path;

/// Whether `path` is an existing regular file the process can open for
/// reading.
pub fn readable_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => match File::open(path) {
            Ok(_) => true,
            Err(err) => {
                tracing::trace!(path = %path.display(), error = %err, "file not readable");
                false
            }
        },
        Ok(_) => false,
        Err(err) => {
            tracing::trace!(path = %path.display(), error = %err, "file metadata unavailable");
            false
        }
    }
}

/// Whether `path` is an existing directory that is not read-only.
pub fn writable_directory(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
        Err(err) => {
            tracing::trace!(path = %path.display(), error = %err, "directory metadata unavailable");
            false
        }
    }
}
