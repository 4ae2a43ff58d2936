//! Configuration types for the Algolia backend.

use std::fmt;

use url::Url;

use crate::errors::SearchEngineError;

/// Credentials and hosts used by [`crate::algolia::AlgoliaClient`].
#[derive(Clone)]
pub struct AlgoliaConfig {
    /// Algolia application id.
    pub app_id: String,
    /// API key with write access to the indexes being synchronized.
    pub api_key: String,
    /// Base URL replacing both the read and the write host.
    ///
    /// Leave unset to talk to Algolia's hosted cluster.
    pub host: Option<String>,
}

impl AlgoliaConfig {
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            host: None,
        }
    }

    /// Route every request to `host` instead of the hosted cluster.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Check that the credentials are present.
    pub fn validate(&self) -> Result<(), SearchEngineError> {
        if self.app_id.trim().is_empty() {
            return Err(SearchEngineError::config("Algolia app id is required"));
        }
        if self.api_key.trim().is_empty() {
            return Err(SearchEngineError::config("Algolia API key is required"));
        }
        Ok(())
    }

    /// Host serving search requests.
    pub fn read_host(&self) -> Result<Url, SearchEngineError> {
        self.resolve_host(format!("https://{}-dsn.algolia.net", self.app_id))
    }

    /// Host serving indexing requests.
    pub fn write_host(&self) -> Result<Url, SearchEngineError> {
        self.resolve_host(format!("https://{}.algolia.net", self.app_id))
    }

    fn resolve_host(&self, hosted: String) -> Result<Url, SearchEngineError> {
        let raw = self.host.clone().unwrap_or(hosted);
        let url = Url::parse(&raw)
            .map_err(|e| SearchEngineError::config(format!("Invalid Algolia host {}: {}", raw, e)))?;
        if url.cannot_be_a_base() {
            return Err(SearchEngineError::config(format!(
                "Algolia host {} cannot be used as a base URL",
                raw
            )));
        }
        Ok(url)
    }
}

impl fmt::Debug for AlgoliaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgoliaConfig")
            .field("app_id", &self.app_id)
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}
