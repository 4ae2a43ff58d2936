//! Search engine that keeps nothing.
//!
//! Selected when search is switched off: writes succeed without effect and
//! every query comes back empty.

use async_trait::async_trait;
use tracing::trace;

use crate::errors::SearchEngineError;
use crate::interfaces::{validate_page, EngineConfiguration, SearchEngine, SearchModel};
use search_sync_shared::{Paginator, QueryState, SearchResponse};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullEngine;

impl NullEngine {
    pub fn configuration() -> EngineConfiguration {
        EngineConfiguration {
            dependencies: &[],
            variables: &[],
        }
    }
}

#[async_trait]
impl SearchEngine for NullEngine {
    async fn update<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError> {
        trace!(index = %model.schema().index_name(), count = records.len(), "Ignoring update");
        Ok(())
    }

    async fn delete<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError> {
        trace!(index = %model.schema().index_name(), count = records.len(), "Ignoring delete");
        Ok(())
    }

    async fn search<M: SearchModel>(
        &self,
        _query: &QueryState<M>,
    ) -> Result<SearchResponse, SearchEngineError> {
        Ok(SearchResponse::empty())
    }

    async fn map<M: SearchModel>(
        &self,
        _query: &QueryState<M>,
        _response: &SearchResponse,
    ) -> Result<Vec<M::Record>, SearchEngineError> {
        Ok(Vec::new())
    }

    async fn paginate<M: SearchModel>(
        &self,
        _query: &QueryState<M>,
        per_page: usize,
        page: usize,
    ) -> Result<Paginator<M::Record>, SearchEngineError> {
        validate_page(page)?;
        Ok(Paginator::new(0, per_page, page, Vec::new()))
    }

    async fn flush<M: SearchModel>(&self, _model: &M) -> Result<(), SearchEngineError> {
        Ok(())
    }
}
