//! Whole-file reads and atomic replacement

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write content atomically to a file.
///
/// The content goes to a uniquely named temporary file in the destination's
/// directory (same filesystem, so the final rename is atomic) and is then
/// renamed over the destination. Readers of `path` see either the old or the
/// new content, never a partial file. The temporary file is removed on every
/// failure path.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    tracing::debug!(temp = %temp_file.path().display(), "Created temporary file");

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;

    // Flush to disk
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;

    // Keep the destination's mode; NamedTempFile creates 0600 files
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_file.path(), metadata.permissions())
            .map_err(|e| Error::io(temp_file.path(), e))?;
    }

    // Atomic rename. On failure the returned NamedTempFile is dropped, which
    // deletes the temporary file.
    temp_file.persist(path).map_err(|e| Error::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Replaced file atomically");
    Ok(())
}

/// Read the full text content of a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
