//! Error types for attrsort

/// Result type alias using attrsort's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for attrsort operations
///
/// The sorting engine itself never fails: unrecognized tokens are dropped
/// and unrankable tokens fall back to a maximal sort key. These variants
/// cover the collaborator boundary (category/direction names arriving from
/// a CLI or service wrapper) and I/O around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An unrecognized category name was requested
    #[error("unknown category: {0}")]
    Category(String),

    /// An unrecognized sort direction was requested
    #[error("unknown sort direction: {0}")]
    Direction(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new unknown-category error
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }

    /// Create a new unknown-direction error
    pub fn direction(name: impl Into<String>) -> Self {
        Self::Direction(name.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
