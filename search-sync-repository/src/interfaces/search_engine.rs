//! Search engine trait definition.
//!
//! This module defines the capability set shared by every search backend.
//! Backends are chosen at configuration time (see [`crate::Engine`]).

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::SearchEngineError;
use crate::interfaces::SearchModel;
use search_sync_shared::{Paginator, QueryState, SearchResponse};

/// Requirements a backend places on its host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineConfiguration {
    /// Provider client libraries the backend depends on.
    pub dependencies: &'static [&'static str],
    /// Environment variables that must be set for the backend to start.
    pub variables: &'static [&'static str],
}

/// Keeps a search index in sync with application records and answers
/// queries built from [`QueryState`].
///
/// Batches are typed against an explicit model, so every record in a call
/// belongs to the index described by `model.schema()`.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Upsert `records` into the model's index in one bulk call.
    ///
    /// An empty batch succeeds without contacting the provider.
    async fn update<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError>;

    /// Remove `records` from the model's index in one bulk call.
    ///
    /// An empty batch succeeds without contacting the provider.
    async fn delete<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError>;

    /// Run the query and return the provider's raw response.
    async fn search<M: SearchModel>(
        &self,
        query: &QueryState<M>,
    ) -> Result<SearchResponse, SearchEngineError>;

    /// Resolve the hits of `response` into records through the model.
    async fn map<M: SearchModel>(
        &self,
        query: &QueryState<M>,
        response: &SearchResponse,
    ) -> Result<Vec<M::Record>, SearchEngineError>;

    /// Fetch one page of resolved records. `page` is 1-indexed.
    async fn paginate<M: SearchModel>(
        &self,
        query: &QueryState<M>,
        per_page: usize,
        page: usize,
    ) -> Result<Paginator<M::Record>, SearchEngineError>;

    /// Remove every object from the model's index.
    async fn flush<M: SearchModel>(&self, model: &M) -> Result<(), SearchEngineError>;

    /// Search and resolve in one step.
    async fn get<M: SearchModel>(
        &self,
        query: &QueryState<M>,
    ) -> Result<Vec<M::Record>, SearchEngineError> {
        let response = self.search(query).await?;
        self.map(query, &response).await
    }
}

/// Reject page numbers that cannot exist at a 1-indexed layer.
pub(crate) fn validate_page(page: usize) -> Result<(), SearchEngineError> {
    if page == 0 {
        return Err(SearchEngineError::validation("page numbers start at 1"));
    }
    Ok(())
}
