//! Error types for gaim-stats
//!
//! The statistical engine itself is infallible; these errors come from
//! loading configuration and assessment records.

use thiserror::Error;

/// Result type alias for gaim-stats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gaim-stats operations
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Nothing would be compared
    #[error("no dimensions to compare")]
    NoDimensions,

    /// A dimension name appears more than once
    #[error("duplicate dimension: {0}")]
    DuplicateDimension(String),

    /// A dimension or total label is blank
    #[error("empty label: {0}")]
    EmptyLabel(String),
}
