//! # Search Sync Shared
//!
//! Provider-neutral types shared by the search sync crates: record schemas,
//! filter values, query state, search parameters and responses, and the
//! pagination container returned to callers.

pub mod pagination;
pub mod query;
pub mod response;
pub mod schema;
pub mod values;

pub use pagination::{PaginationMeta, Paginator};
pub use query::QueryState;
pub use response::{NumericFilter, SearchHit, SearchParams, SearchResponse};
pub use schema::{RecordSchema, SearchObject, OBJECT_ID_FIELD};
pub use values::{FilterValue, SearchKey};
