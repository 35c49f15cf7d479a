//! File-level environment removal.

use std::path::Path;

use crate::error::Result;
use crate::markers::Markers;
use crate::parser::parse_blocks;
use crate::writer::remove_block;

/// Options for [`remove_environment`].
#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    pub markers: Markers,
    /// Compute the result without writing the file.
    pub dry_run: bool,
}

/// What [`remove_environment`] did to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// A block declaring the name was found.
    pub removed: bool,
    /// The file was replaced on disk.
    pub written: bool,
    pub original: String,
    pub updated: String,
}

/// Remove the environment block named `name` from the file at `path`.
///
/// The file is read in full, the block is removed in memory, and the result
/// replaces the file atomically. When no block matches, or on a dry run, the
/// file is not touched. A failure at any point leaves the original content
/// in place.
pub fn remove_environment(path: &Path, name: &str, options: &RemoveOptions) -> Result<Outcome> {
    let original = envfile_fs::read_text(path)?;
    let removal = remove_block(&original, name, &options.markers);

    if removal.removed {
        for block in parse_blocks(&original, &options.markers)
            .iter()
            .filter(|block| block.declares(name))
        {
            tracing::debug!(
                start_line = block.start_line,
                end_line = block.end_line,
                lines = block.line_count(),
                "Located environment block"
            );
        }
    }

    let written = if !removal.removed {
        tracing::debug!(path = %path.display(), name, "No matching environment; leaving file unchanged");
        false
    } else if options.dry_run {
        tracing::debug!(path = %path.display(), name, "Dry run; not writing");
        false
    } else {
        envfile_fs::write_text(path, &removal.content)?;
        tracing::info!(path = %path.display(), name, "Removed environment");
        true
    };

    Ok(Outcome {
        removed: removal.removed,
        written,
        original,
        updated: removal.content,
    })
}
