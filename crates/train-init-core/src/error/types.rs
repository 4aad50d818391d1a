//! Core error type and helpers

use thiserror::Error;

/// Result type alias for train-init operations
pub type InitResult<T> = Result<T, InitError>;

/// Main error type for train-init
#[derive(Error, Debug, Clone)]
pub enum InitError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// YAML/JSON serialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// HTTP transport errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// The session was cancelled by the user
    #[error("Setup was cancelled")]
    Cancelled,

    /// Generic error
    #[error("Error: {message}")]
    Other { message: String },
}

impl InitError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            InitError::Config { .. } => "INIT_CONFIG",
            InitError::Io { .. } => "INIT_IO",
            InitError::Serialization { .. } => "INIT_SERIALIZATION",
            InitError::Http { .. } => "INIT_HTTP",
            InitError::InvalidInput { .. } => "INIT_INVALID_INPUT",
            InitError::Cancelled => "INIT_CANCELLED",
            InitError::Other { .. } => "INIT_OTHER",
        }
    }

    /// Human-readable message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            InitError::Config { message }
            | InitError::Io { message, .. }
            | InitError::Serialization { message }
            | InitError::Http { message, .. }
            | InitError::InvalidInput { message, .. }
            | InitError::Other { message } => message,
            InitError::Cancelled => "Setup was cancelled",
        }
    }
}
