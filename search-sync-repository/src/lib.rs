//! # Search Sync Repository
//!
//! This crate provides the search engine capability set used to keep a
//! hosted search index in sync with application records, together with a
//! concrete implementation for Algolia and a no-op engine for deployments
//! with search switched off.

pub mod algolia;
pub mod config;
pub mod engine;
pub mod errors;
pub mod interfaces;
pub mod null;

pub use algolia::{AlgoliaClient, AlgoliaEngine};
pub use config::AlgoliaConfig;
pub use engine::{Engine, EngineKind};
pub use errors::SearchEngineError;
pub use interfaces::{
    EngineConfiguration, SearchEngine, SearchModel, SearchProviderClient, SearchableRecord,
};
pub use null::NullEngine;
