//! Query state handed from the query builder to a search engine.

use std::fmt;
use std::sync::Arc;

use crate::values::FilterValue;

/// Query-builder state for a single search against one record type.
///
/// Equality filters and set-membership filters keep their insertion order.
/// Setting a filter for a field that already has one replaces the value in
/// place.
pub struct QueryState<M> {
    model: Arc<M>,
    query: String,
    wheres: Vec<(String, FilterValue)>,
    where_ins: Vec<(String, Vec<FilterValue>)>,
    limit: Option<usize>,
}

impl<M> QueryState<M> {
    /// Create query state for `model` with the given query text.
    pub fn new(model: Arc<M>, query: impl Into<String>) -> Self {
        Self {
            model,
            query: query.into(),
            wheres: Vec::new(),
            where_ins: Vec::new(),
            limit: None,
        }
    }

    /// Restrict results to records whose `field` equals `value`.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        upsert(&mut self.wheres, field.into(), value.into());
        self
    }

    /// Restrict results to records whose `field` is one of `values`.
    ///
    /// An empty set matches nothing.
    pub fn where_in<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue>,
    {
        let values = values.into_iter().map(Into::into).collect();
        upsert(&mut self.where_ins, field.into(), values);
        self
    }

    /// Cap the number of hits returned by a plain search.
    pub fn take(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn wheres(&self) -> &[(String, FilterValue)] {
        &self.wheres
    }

    pub fn where_ins(&self) -> &[(String, Vec<FilterValue>)] {
        &self.where_ins
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

fn upsert<T>(entries: &mut Vec<(String, T)>, field: String, value: T) {
    match entries.iter_mut().find(|(existing, _)| *existing == field) {
        Some(entry) => entry.1 = value,
        None => entries.push((field, value)),
    }
}

impl<M> Clone for QueryState<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            query: self.query.clone(),
            wheres: self.wheres.clone(),
            where_ins: self.where_ins.clone(),
            limit: self.limit,
        }
    }
}

impl<M> fmt::Debug for QueryState<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryState")
            .field("query", &self.query)
            .field("wheres", &self.wheres)
            .field("where_ins", &self.where_ins)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Articles;

    #[test]
    fn test_filters_keep_insertion_order() {
        let state = QueryState::new(Arc::new(Articles), "rust")
            .where_eq("published", true)
            .where_eq("age", 5)
            .where_in("tag", ["a", "b"]);

        assert_eq!(state.query(), "rust");
        assert_eq!(state.wheres()[0].0, "published");
        assert_eq!(state.wheres()[1].0, "age");
        assert_eq!(state.where_ins()[0].1.len(), 2);
        assert!(state.limit().is_none());
    }

    #[test]
    fn test_where_eq_replaces_existing_field() {
        let state = QueryState::new(Arc::new(Articles), "")
            .where_eq("age", 5)
            .where_eq("status", "draft")
            .where_eq("age", 7);

        assert_eq!(state.wheres().len(), 2);
        assert_eq!(state.wheres()[0], ("age".to_string(), FilterValue::Int(7)));
    }

    #[test]
    fn test_take_sets_limit() {
        let state = QueryState::new(Arc::new(Articles), "").take(25);
        assert_eq!(state.limit(), Some(25));
    }
}
