//! Error types for the search sync repository.

mod search_engine_error;

pub use search_engine_error::SearchEngineError;
