//! Error types for the RRPproxy client
//!
//! All fallible public APIs return `Result<T, Error>` with Error defined
//! here. Note that decoding a response body is infallible by design; the
//! variants below cover configuration, transport, and command semantics.

use thiserror::Error;

/// The main error type for the RRPproxy client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing credential: set {variable} or pass it explicitly")]
    MissingCredential { variable: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Command Errors
    // ============================================================================
    #[error("Command failed with code {code}: {description}")]
    Command { code: String, description: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing credential error
    pub fn missing_credential(variable: impl Into<String>) -> Self {
        Self::MissingCredential {
            variable: variable.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a command failure from an envelope code and description
    pub fn command(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Command {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Result type alias for the RRPproxy client
pub type Result<T> = std::result::Result<T, Error>;
