//! Error types for modelsan-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from model parsing
    #[error(transparent)]
    Schema(#[from] modelsan_schema::Error),

    /// Error from file rewriting
    #[error(transparent)]
    Rewrite(#[from] modelsan_rewrite::Error),
}
