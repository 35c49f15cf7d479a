//! Block removal.

use crate::markers::Markers;

/// Result of removing a block from text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The content with the matching block dropped.
    pub content: String,
    /// Whether a declaration for the requested name was found.
    pub removed: bool,
}

/// Removes the block declaring `name` from the content.
///
/// Scans line by line, buffering the current block. A sentinel line flushes
/// the buffer to the output unless the buffered block matched, then starts a
/// new buffer. A declaration line for `name` marks the current block as the
/// target and discards what was buffered so far. Every other line, including
/// its terminator, is buffered verbatim.
///
/// If no block matches, the returned content equals the input.
///
/// # Example
/// ```
/// use envfile_blocks::{Markers, remove_block};
///
/// let content = "Environment\nEnvironmentName:\tA\nFoo:1\nEnvironment\nEnvironmentName:\tB\nBar:2\n";
/// let removal = remove_block(content, "A", &Markers::default());
/// assert!(removal.removed);
/// assert_eq!(removal.content, "Environment\nEnvironmentName:\tB\nBar:2\n");
/// ```
pub fn remove_block(content: &str, name: &str, markers: &Markers) -> Removal {
    let declaration = markers.declaration(name);

    let mut output = String::with_capacity(content.len());
    let mut current: Vec<&str> = Vec::new();
    let mut in_target = false;
    let mut removed = false;

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let trimmed = line.trim();

        if markers.is_sentinel(trimmed) {
            if in_target {
                tracing::debug!(line = idx + 1, discarded = current.len(), "Dropped target block");
            } else {
                output.extend(current.drain(..));
            }
            current.clear();
            in_target = false;
            current.push(line);
        } else if trimmed == declaration {
            tracing::debug!(line = idx + 1, name, "Matched environment declaration");
            in_target = true;
            removed = true;
            current.clear();
        } else {
            current.push(line);
        }
    }

    if !in_target {
        output.extend(current);
    }

    Removal {
        content: output,
        removed,
    }
}
