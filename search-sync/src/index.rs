//! A search model over an index the tool knows only by name.
//!
//! Records are the object ids stored in the index. The CLI uses it to query
//! and clear indexes without an application model at hand.

use async_trait::async_trait;
use serde::Serialize;

use search_sync_repository::{SearchEngineError, SearchModel, SearchableRecord};
use search_sync_shared::{QueryState, RecordSchema, SearchKey, SearchObject};

/// An object known only by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedObject {
    #[serde(rename = "objectID")]
    pub object_id: String,
}

impl SearchableRecord for IndexedObject {
    fn search_key(&self) -> SearchKey {
        SearchKey::String(self.object_id.clone())
    }

    fn to_searchable_object(&self) -> SearchObject {
        SearchObject::new()
    }
}

#[derive(Debug, Clone)]
pub struct RawIndex {
    schema: RecordSchema,
}

impl RawIndex {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            schema: RecordSchema::new(index_name),
        }
    }
}

#[async_trait]
impl SearchModel for RawIndex {
    type Record = IndexedObject;

    fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    async fn find_by_ids(
        &self,
        _query: &QueryState<Self>,
        ids: &[String],
    ) -> Result<Vec<IndexedObject>, SearchEngineError> {
        Ok(ids
            .iter()
            .map(|id| IndexedObject {
                object_id: id.clone(),
            })
            .collect())
    }
}
