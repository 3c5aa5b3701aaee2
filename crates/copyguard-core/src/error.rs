//! Error types for CopyGuard

/// Result type alias using CopyGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for CopyGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule failed to compile or validate
    #[error("rule error: {0}")]
    Rule(String),

    /// Configuration errors (rule packs, CLI config)
    #[error("configuration error: {0}")]
    Config(String),

    /// Slide batch could not be used as input
    #[error("input error: {0}")]
    Input(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new rule error
    pub fn rule(msg: impl Into<String>) -> Self {
        Self::Rule(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
