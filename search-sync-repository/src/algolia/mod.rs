//! Algolia implementation of the search engine.
//!
//! This module provides the REST client, the engine adapter built on top of
//! it, and the translation of query-builder filters into Algolia clauses.

mod client;
mod engine;
pub mod filters;

pub use client::AlgoliaClient;
pub use engine::{AlgoliaEngine, ALGOLIA_API_KEY_VAR, ALGOLIA_APP_ID_VAR};
