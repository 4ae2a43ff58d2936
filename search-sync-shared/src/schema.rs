//! Record-type descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier field every indexed object carries.
pub const OBJECT_ID_FIELD: &str = "objectID";

/// Flat key-value projection of a record as sent to the search provider.
pub type SearchObject = Map<String, Value>;

/// Describes how one record type is stored in the search provider.
///
/// A schema is passed explicitly with every engine call instead of being
/// looked up from the record's type at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordSchema {
    index_name: String,
}

impl RecordSchema {
    /// Create a schema for records stored in `index_name`.
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
        }
    }

    /// The provider index holding records of this type.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}
