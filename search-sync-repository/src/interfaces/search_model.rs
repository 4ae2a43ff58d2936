//! Contracts the application's records fulfil to be searchable.

use async_trait::async_trait;

use crate::errors::SearchEngineError;
use search_sync_shared::{QueryState, RecordSchema, SearchKey, SearchObject};

/// A record instance that can be pushed to a search index.
pub trait SearchableRecord: Send + Sync {
    /// The record's unique key, used as the provider object id.
    fn search_key(&self) -> SearchKey;

    /// Flat attribute mapping sent to the provider.
    fn to_searchable_object(&self) -> SearchObject;
}

/// A searchable record type.
///
/// Implementations describe where records of this type are indexed and know
/// how to load them back from their keys.
#[async_trait]
pub trait SearchModel: Send + Sync + Sized {
    type Record: SearchableRecord;

    /// Index descriptor for this record type.
    fn schema(&self) -> &RecordSchema;

    /// Load the records identified by `ids`.
    ///
    /// `ids` are in hit order. Engines return whatever this method returns,
    /// in the order it returns them; ids with no matching record may be
    /// skipped.
    async fn find_by_ids(
        &self,
        query: &QueryState<Self>,
        ids: &[String],
    ) -> Result<Vec<Self::Record>, SearchEngineError>;
}
