//! Search engine error types.
//!
//! Provider failures are carried through unchanged; the adapter adds no
//! recovery of its own.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Debug, Clone, Error)]
pub enum SearchEngineError {
    /// The provider answered with a non-success status.
    #[error("Provider error ({status}): {message}")]
    ProviderError { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Failed to serialize data for the provider.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Failed to parse a provider response.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to resolve hits back into records.
    #[error("Resolve error: {0}")]
    ResolveError(String),

    /// The call was rejected before reaching the provider.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The engine is misconfigured.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SearchEngineError {
    /// Create a provider error.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::ProviderError {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a resolve error.
    pub fn resolve(msg: impl Into<String>) -> Self {
        Self::ResolveError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// HTTP status of a provider error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ProviderError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
