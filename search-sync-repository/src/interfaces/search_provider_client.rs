//! Search provider client trait definition.
//!
//! This module defines the outbound interface an engine uses to talk to a
//! hosted search provider, allowing the HTTP client to be swapped for a mock
//! in tests.

use async_trait::async_trait;

use crate::errors::SearchEngineError;
use search_sync_shared::{SearchObject, SearchParams, SearchResponse};

/// Abstracts the network client of a hosted search provider.
///
/// Every method is a single round-trip. Implementations do not retry; errors
/// are returned to the engine as they occur.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so one client can be shared by
/// every engine clone.
#[async_trait]
pub trait SearchProviderClient: Send + Sync {
    /// Create or replace `objects` in `index_name`.
    ///
    /// Each object carries its identifier in the `objectID` field.
    async fn save_objects(
        &self,
        index_name: &str,
        objects: &[SearchObject],
    ) -> Result<(), SearchEngineError>;

    /// Delete the objects identified by `object_ids` from `index_name`.
    async fn delete_objects(
        &self,
        index_name: &str,
        object_ids: &[String],
    ) -> Result<(), SearchEngineError>;

    /// Run a search against a single index.
    async fn search_single_index(
        &self,
        index_name: &str,
        params: &SearchParams,
    ) -> Result<SearchResponse, SearchEngineError>;

    /// Remove every object from `index_name`, keeping its settings.
    async fn clear_objects(&self, index_name: &str) -> Result<(), SearchEngineError>;
}
