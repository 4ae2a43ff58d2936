//! # Search Sync
//!
//! Entry point and configuration for keeping a hosted search index in sync
//! with application records.
//!
//! This crate wires a search backend from the environment, sets up
//! tracing, and exposes the raw-index model used by the operator CLI.

pub mod config;
pub mod index;
pub mod telemetry;

pub use config::{Dependencies, LogFormat, Settings};
pub use index::{IndexedObject, RawIndex};

use thiserror::Error;

/// Errors that can occur while configuring or running the sync tool.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] search_sync_repository::SearchEngineError),

    /// Output could not be encoded.
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SyncError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
