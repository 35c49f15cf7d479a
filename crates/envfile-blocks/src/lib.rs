//! Environment block scanning and removal.
//!
//! Configuration files handled here are flat sequences of lines grouped into
//! blocks. A block starts at a sentinel line and runs up to the next sentinel
//! or the end of the file; a tab-separated declaration line names it:
//!
//! ```text
//! Environment
//! EnvironmentName:	Gast
//! Port:	8080
//! ```
//!
//! Lines before the first sentinel form an unnamed preamble that is always
//! kept. [`remove_block`] drops one named block from text, and
//! [`remove_environment`] applies that to a file with an atomic replace.

pub mod diff;
pub mod editor;
pub mod error;
pub mod markers;
pub mod parser;
pub mod writer;

pub use diff::render_diff;
pub use editor::{Outcome, RemoveOptions, remove_environment};
pub use error::{Error, Result};
pub use markers::Markers;
pub use parser::{Block, block_names, find_block, has_block, parse_blocks};
pub use writer::{Removal, remove_block};
