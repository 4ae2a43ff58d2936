//! Settings read from the process environment.

use std::env;
use std::str::FromStr;

use search_sync_repository::algolia::{ALGOLIA_API_KEY_VAR, ALGOLIA_APP_ID_VAR};
use search_sync_repository::{AlgoliaConfig, EngineKind};

use crate::SyncError;

/// Selects the search backend.
pub const SEARCH_ENGINE_VAR: &str = "SEARCH_ENGINE";

/// Optional base URL replacing Algolia's hosted cluster.
pub const ALGOLIA_HOST_VAR: &str = "ALGOLIA_HOST";

/// Selects the log output format.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(SyncError::config(format!(
                "{} must be pretty or json, got {}",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

/// Everything the sync tool reads from its environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub engine: EngineKind,
    /// Present when `engine` is [`EngineKind::Algolia`].
    pub algolia: Option<AlgoliaConfig>,
    pub log_format: LogFormat,
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_ENGINE`: `algolia` or `null` (default: algolia)
    /// - `ALGOLIA_APP_ID`: application id, required for algolia
    /// - `ALGOLIA_API_KEY`: API key, required for algolia
    /// - `ALGOLIA_HOST`: base URL overriding both Algolia hosts (optional)
    /// - `LOG_FORMAT`: `pretty` or `json` (default: pretty)
    pub fn from_env() -> Result<Self, SyncError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read only the backend selection through `lookup`.
    ///
    /// Needs no credentials, so it works before the backend is configured.
    pub fn engine_kind_from_lookup<F>(lookup: F) -> Result<EngineKind, SyncError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(SEARCH_ENGINE_VAR) {
            Some(raw) => raw.parse::<EngineKind>().map_err(|_| {
                SyncError::config(format!(
                    "{} must be algolia or null, got {}",
                    SEARCH_ENGINE_VAR, raw
                ))
            }),
            None => Ok(EngineKind::default()),
        }
    }

    /// Read settings through `lookup`, which returns the value of a variable
    /// or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SyncError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let engine = Self::engine_kind_from_lookup(&lookup)?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let algolia = match engine {
            EngineKind::Algolia => {
                let app_id = required(&lookup, ALGOLIA_APP_ID_VAR)?;
                let api_key = required(&lookup, ALGOLIA_API_KEY_VAR)?;
                let mut config = AlgoliaConfig::new(app_id, api_key);
                if let Some(host) = lookup(ALGOLIA_HOST_VAR).filter(|h| !h.trim().is_empty()) {
                    config = config.with_host(host);
                }
                Some(config)
            }
            EngineKind::Null => None,
        };

        Ok(Self {
            engine,
            algolia,
            log_format,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, SyncError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| SyncError::config(format!("{} must be set", name)))
}
