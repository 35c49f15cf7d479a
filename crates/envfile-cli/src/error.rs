//! Error types for envfile-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from envfile-blocks
    #[error(transparent)]
    Blocks(#[from] envfile_blocks::Error),
}
