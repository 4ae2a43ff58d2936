//! Dependency initialization and wiring for the sync tool.

use tracing::info;

use crate::config::Settings;
use crate::SyncError;
use search_sync_repository::{AlgoliaEngine, Engine, EngineKind, NullEngine};

/// Container for all initialized dependencies.
#[derive(Debug, Clone)]
pub struct Dependencies {
    /// The search backend selected by configuration.
    pub engine: Engine,
}

impl Dependencies {
    /// Build the configured search backend.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(SyncError)` - If the backend cannot be created
    pub fn new(settings: &Settings) -> Result<Self, SyncError> {
        info!(engine = %settings.engine, "Initializing dependencies");

        let engine = match settings.engine {
            EngineKind::Algolia => {
                let config = settings.algolia.clone().ok_or_else(|| {
                    SyncError::config("Algolia engine selected without credentials")
                })?;
                let engine = AlgoliaEngine::from_config(config).map_err(|e| {
                    SyncError::config(format!("Failed to create Algolia client: {}", e))
                })?;
                Engine::from(engine)
            }
            EngineKind::Null => Engine::from(NullEngine),
        };

        info!(engine = %engine.kind(), "Search engine ready");

        Ok(Self { engine })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use search_sync_repository::AlgoliaConfig;

    #[test]
    fn test_null_engine_wiring() {
        let settings = Settings {
            engine: EngineKind::Null,
            algolia: None,
            log_format: LogFormat::Pretty,
        };

        let deps = Dependencies::new(&settings).unwrap();

        assert_eq!(deps.engine.kind(), EngineKind::Null);
    }

    #[test]
    fn test_algolia_engine_wiring() {
        let settings = Settings {
            engine: EngineKind::Algolia,
            algolia: Some(AlgoliaConfig::new("APP", "secret")),
            log_format: LogFormat::Pretty,
        };

        let deps = Dependencies::new(&settings).unwrap();

        assert_eq!(deps.engine.kind(), EngineKind::Algolia);
        assert_eq!(deps.engine.configuration().dependencies, &["algoliasearch"]);
    }

    #[test]
    fn test_algolia_without_credentials_fails() {
        let settings = Settings {
            engine: EngineKind::Algolia,
            algolia: None,
            log_format: LogFormat::Json,
        };

        assert!(matches!(
            Dependencies::new(&settings),
            Err(SyncError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_host_fails() {
        let settings = Settings {
            engine: EngineKind::Algolia,
            algolia: Some(AlgoliaConfig::new("APP", "secret").with_host("not a url")),
            log_format: LogFormat::Pretty,
        };

        assert!(matches!(
            Dependencies::new(&settings),
            Err(SyncError::ConfigError(_))
        ));
    }
}
