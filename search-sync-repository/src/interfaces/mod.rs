//! Interface definitions for the search sync adapter.
//!
//! - `SearchEngine`: the capability set every backend implements.
//! - `SearchProviderClient`: what an engine needs from a hosted provider.
//! - `SearchModel` / `SearchableRecord`: what an engine needs from the
//!   application's records.

mod search_engine;
mod search_model;
mod search_provider_client;

pub(crate) use search_engine::validate_page;
pub use search_engine::{EngineConfiguration, SearchEngine};
pub use search_model::{SearchModel, SearchableRecord};
pub use search_provider_client::SearchProviderClient;
