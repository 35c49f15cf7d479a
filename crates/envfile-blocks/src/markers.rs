//! Marker tokens that delimit and name blocks.

/// The sentinel and name-declaration tokens of the block format.
///
/// Both are compared against lines with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// A line equal to this starts a new block.
    pub sentinel: String,
    /// A line equal to `name_key` + TAB + name declares the block's name.
    pub name_key: String,
}

impl Markers {
    pub fn new(sentinel: impl Into<String>, name_key: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
            name_key: name_key.into(),
        }
    }

    /// Whether a trimmed line is the sentinel.
    pub fn is_sentinel(&self, trimmed: &str) -> bool {
        trimmed == self.sentinel
    }

    /// The full declaration line (trimmed form) for `name`.
    pub fn declaration(&self, name: &str) -> String {
        format!("{}\t{}", self.name_key, name)
    }

    /// Extract the declared name from a trimmed line, if it is a declaration.
    pub fn declared_name<'a>(&self, trimmed: &'a str) -> Option<&'a str> {
        trimmed.strip_prefix(self.name_key.as_str())?.strip_prefix('\t')
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new("Environment", "EnvironmentName:")
    }
}
