//! Error types for sqlshift.
//!
//! Translation and clause generation never fail. These errors only come
//! from the edges: strict dialect parsing and configuration loading.

use thiserror::Error;

/// The main error type for sqlshift operations.
#[derive(Debug, Error)]
pub enum ShiftError {
    /// Dialect identifier rejected by a strict parse.
    #[error("Unknown dialect: '{0}'. Expected: sqlserver, postgres, mysql, or sqlite")]
    UnknownDialect(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed TOML configuration.
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShiftError {
    /// Create an unknown dialect error.
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect(name.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for sqlshift operations.
pub type ShiftResult<T> = Result<T, ShiftError>;
