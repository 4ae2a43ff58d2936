//! Algolia implementation of the search engine capability set.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::algolia::client::AlgoliaClient;
use crate::algolia::filters::build_filters;
use crate::config::AlgoliaConfig;
use crate::errors::SearchEngineError;
use crate::interfaces::{
    validate_page, EngineConfiguration, SearchEngine, SearchModel, SearchProviderClient,
    SearchableRecord,
};
use search_sync_shared::{
    Paginator, QueryState, SearchObject, SearchParams, SearchResponse, OBJECT_ID_FIELD,
};

/// Environment variable holding the Algolia application id.
pub const ALGOLIA_APP_ID_VAR: &str = "ALGOLIA_APP_ID";

/// Environment variable holding the Algolia API key.
pub const ALGOLIA_API_KEY_VAR: &str = "ALGOLIA_API_KEY";

/// Search engine backed by an Algolia application.
///
/// Cheap to clone; clones share the provider client.
#[derive(Clone)]
pub struct AlgoliaEngine {
    client: Arc<dyn SearchProviderClient>,
}

impl AlgoliaEngine {
    /// Create an engine on top of an existing provider client.
    pub fn new(client: Arc<dyn SearchProviderClient>) -> Self {
        Self { client }
    }

    /// Create an engine with its own [`AlgoliaClient`].
    pub fn from_config(config: AlgoliaConfig) -> Result<Self, SearchEngineError> {
        let client = AlgoliaClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// The underlying provider client.
    pub fn client(&self) -> &Arc<dyn SearchProviderClient> {
        &self.client
    }

    /// What this backend needs from its host application.
    pub fn configuration() -> EngineConfiguration {
        EngineConfiguration {
            dependencies: &["algoliasearch"],
            variables: &[ALGOLIA_APP_ID_VAR, ALGOLIA_API_KEY_VAR],
        }
    }

    /// Object sent to the index for `record`: its searchable attributes
    /// plus its key under `objectID`, which wins over an attribute of the
    /// same name.
    fn to_object<R: SearchableRecord>(record: &R) -> SearchObject {
        let mut object = record.to_searchable_object();
        object.insert(
            OBJECT_ID_FIELD.to_string(),
            Value::String(record.search_key().to_string()),
        );
        object
    }

    async fn perform_search<M: SearchModel>(
        &self,
        query: &QueryState<M>,
        params: SearchParams,
    ) -> Result<SearchResponse, SearchEngineError> {
        let index_name = query.model().schema().index_name();
        debug!(
            index = %index_name,
            query = %params.query,
            filters = params.numeric_filters.as_ref().map_or(0, Vec::len),
            "Searching index"
        );
        self.client.search_single_index(index_name, &params).await
    }
}

impl fmt::Debug for AlgoliaEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgoliaEngine").finish_non_exhaustive()
    }
}

#[async_trait]
impl SearchEngine for AlgoliaEngine {
    async fn update<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError> {
        if records.is_empty() {
            return Ok(());
        }

        let index_name = model.schema().index_name();
        let objects: Vec<SearchObject> = records.iter().map(Self::to_object).collect();

        self.client.save_objects(index_name, &objects).await?;

        info!(index = %index_name, count = objects.len(), "Records indexed");
        Ok(())
    }

    async fn delete<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError> {
        if records.is_empty() {
            return Ok(());
        }

        let index_name = model.schema().index_name();
        let keys: Vec<String> = records
            .iter()
            .map(|record| record.search_key().to_string())
            .collect();

        self.client.delete_objects(index_name, &keys).await?;

        info!(index = %index_name, count = keys.len(), "Records removed from index");
        Ok(())
    }

    async fn search<M: SearchModel>(
        &self,
        query: &QueryState<M>,
    ) -> Result<SearchResponse, SearchEngineError> {
        let params = SearchParams {
            query: query.query().to_string(),
            numeric_filters: build_filters(query),
            hits_per_page: query.limit(),
            page: None,
        };
        self.perform_search(query, params).await
    }

    async fn map<M: SearchModel>(
        &self,
        query: &QueryState<M>,
        response: &SearchResponse,
    ) -> Result<Vec<M::Record>, SearchEngineError> {
        let ids = response.ids();
        query.model().find_by_ids(query, &ids).await
    }

    async fn paginate<M: SearchModel>(
        &self,
        query: &QueryState<M>,
        per_page: usize,
        page: usize,
    ) -> Result<Paginator<M::Record>, SearchEngineError> {
        validate_page(page)?;

        let params = SearchParams {
            query: query.query().to_string(),
            numeric_filters: build_filters(query),
            hits_per_page: Some(per_page),
            page: Some(page - 1),
        };
        let response = self.perform_search(query, params).await?;
        let records = self.map(query, &response).await?;

        Ok(Paginator::new(response.total_hits(), per_page, page, records))
    }

    async fn flush<M: SearchModel>(&self, model: &M) -> Result<(), SearchEngineError> {
        self.client.clear_objects(model.schema().index_name()).await
    }
}
