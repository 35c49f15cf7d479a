//! Filesystem helpers for envfile
//!
//! Provides whole-file text reads and atomic write-then-rename replacement.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
