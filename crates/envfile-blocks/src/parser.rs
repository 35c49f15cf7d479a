//! Read-only block discovery.
//!
//! Splits content into blocks the same way removal does, without changing
//! anything. Used to report which environments a file declares.

use crate::markers::Markers;

/// A block found in the content, starting at a sentinel line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Every name declared in the block, in order. Removal matches any of
    /// them.
    pub names: Vec<String>,
    /// The 1-based line number of the sentinel.
    pub start_line: usize,
    /// The 1-based line number of the block's last line.
    pub end_line: usize,
}

impl Block {
    /// The block's first declared name, if any.
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Whether any declaration in the block names `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of lines in the block, sentinel included.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Parses all blocks from the given content, in order of appearance.
///
/// Lines before the first sentinel are a preamble and are not returned, so a
/// declaration there is not reported even though [`crate::remove_block`]
/// acts on it.
///
/// # Example
/// ```
/// use envfile_blocks::{Markers, parse_blocks};
///
/// let content = "Environment\nEnvironmentName:\tA\nFoo:1\nEnvironment\nEnvironmentName:\tB\n";
/// let blocks = parse_blocks(content, &Markers::default());
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].name(), Some("B"));
/// assert_eq!(blocks[1].start_line, 4);
/// ```
pub fn parse_blocks(content: &str, markers: &Markers) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if markers.is_sentinel(trimmed) {
            blocks.push(Block {
                names: Vec::new(),
                start_line: line_no,
                end_line: line_no,
            });
            continue;
        }

        // Preamble lines belong to no block
        let Some(block) = blocks.last_mut() else {
            continue;
        };
        if let Some(name) = markers.declared_name(trimmed) {
            block.names.push(name.to_string());
        }
        block.end_line = line_no;
    }

    blocks
}

/// Finds the first block with any declaration of `name`.
pub fn find_block(content: &str, name: &str, markers: &Markers) -> Option<Block> {
    parse_blocks(content, markers)
        .into_iter()
        .find(|block| block.declares(name))
}

/// Checks if any block declares `name`.
pub fn has_block(content: &str, name: &str, markers: &Markers) -> bool {
    find_block(content, name, markers).is_some()
}

/// Every declared name, in file order, including repeated declarations
/// within one block.
pub fn block_names(content: &str, markers: &Markers) -> Vec<String> {
    parse_blocks(content, markers)
        .into_iter()
        .flat_map(|block| block.names)
        .collect()
}
