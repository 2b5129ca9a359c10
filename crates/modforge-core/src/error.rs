//! Error types for the ModForge automation crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the automation pipeline.
///
/// The command grammar itself never fails; these variants cover the ambient
/// concerns around it (loading the event context, writing responses, and
/// failures reported by command handlers).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ModforgeError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", ...
        message: String,
    },

    /// Configuration error (missing or malformed environment values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command handler could not complete its work
    #[error("Handler error: {0}")]
    Handler(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ModforgeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Handler error
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a handler error
    pub fn is_handler(&self) -> bool {
        matches!(self, Self::Handler(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ModforgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ModforgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ModforgeError>`.
pub type Result<T> = std::result::Result<T, ModforgeError>;
