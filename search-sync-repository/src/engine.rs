//! Configuration-time selection of a search backend.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::algolia::AlgoliaEngine;
use crate::errors::SearchEngineError;
use crate::interfaces::{EngineConfiguration, SearchEngine, SearchModel};
use crate::null::NullEngine;
use search_sync_shared::{Paginator, QueryState, SearchResponse};

/// Available search backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    #[default]
    Algolia,
    Null,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Algolia => "algolia",
            EngineKind::Null => "null",
        }
    }

    /// Requirements of this backend.
    pub fn configuration(&self) -> EngineConfiguration {
        match self {
            EngineKind::Algolia => AlgoliaEngine::configuration(),
            EngineKind::Null => NullEngine::configuration(),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = SearchEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "algolia" => Ok(EngineKind::Algolia),
            "null" | "none" | "disabled" => Ok(EngineKind::Null),
            other => Err(SearchEngineError::config(format!(
                "Unknown search engine: {}",
                other
            ))),
        }
    }
}

/// A search backend chosen from configuration.
#[derive(Debug, Clone)]
pub enum Engine {
    Algolia(AlgoliaEngine),
    Null(NullEngine),
}

impl Engine {
    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Algolia(_) => EngineKind::Algolia,
            Engine::Null(_) => EngineKind::Null,
        }
    }

    pub fn configuration(&self) -> EngineConfiguration {
        self.kind().configuration()
    }
}

impl From<AlgoliaEngine> for Engine {
    fn from(engine: AlgoliaEngine) -> Self {
        Engine::Algolia(engine)
    }
}

impl From<NullEngine> for Engine {
    fn from(engine: NullEngine) -> Self {
        Engine::Null(engine)
    }
}

#[async_trait]
impl SearchEngine for Engine {
    async fn update<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError> {
        match self {
            Engine::Algolia(engine) => engine.update(model, records).await,
            Engine::Null(engine) => engine.update(model, records).await,
        }
    }

    async fn delete<M: SearchModel>(
        &self,
        model: &M,
        records: &[M::Record],
    ) -> Result<(), SearchEngineError> {
        match self {
            Engine::Algolia(engine) => engine.delete(model, records).await,
            Engine::Null(engine) => engine.delete(model, records).await,
        }
    }

    async fn search<M: SearchModel>(
        &self,
        query: &QueryState<M>,
    ) -> Result<SearchResponse, SearchEngineError> {
        match self {
            Engine::Algolia(engine) => engine.search(query).await,
            Engine::Null(engine) => engine.search(query).await,
        }
    }

    async fn map<M: SearchModel>(
        &self,
        query: &QueryState<M>,
        response: &SearchResponse,
    ) -> Result<Vec<M::Record>, SearchEngineError> {
        match self {
            Engine::Algolia(engine) => engine.map(query, response).await,
            Engine::Null(engine) => engine.map(query, response).await,
        }
    }

    async fn paginate<M: SearchModel>(
        &self,
        query: &QueryState<M>,
        per_page: usize,
        page: usize,
    ) -> Result<Paginator<M::Record>, SearchEngineError> {
        match self {
            Engine::Algolia(engine) => engine.paginate(query, per_page, page).await,
            Engine::Null(engine) => engine.paginate(query, per_page, page).await,
        }
    }

    async fn flush<M: SearchModel>(&self, model: &M) -> Result<(), SearchEngineError> {
        match self {
            Engine::Algolia(engine) => engine.flush(model).await,
            Engine::Null(engine) => engine.flush(model).await,
        }
    }
}
