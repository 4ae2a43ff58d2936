//! Translation of query-builder filters into Algolia filter clauses.
//!
//! Equality filters become `field = value` clauses. Each set-membership
//! filter becomes an OR group of `field:value` clauses, or the always-false
//! clause when its set is empty. Booleans render as `1` and `0`.

use search_sync_shared::{FilterValue, NumericFilter, QueryState};

/// Clause that no object satisfies.
pub const MATCH_NOTHING: &str = "0 = 1";

/// Build the filter set for `query`, or `None` when it has no filters.
pub fn build_filters<M>(query: &QueryState<M>) -> Option<Vec<NumericFilter>> {
    let wheres = query
        .wheres()
        .iter()
        .map(|(field, value)| NumericFilter::Clause(equality_clause(field, value)));
    let where_ins = query
        .where_ins()
        .iter()
        .map(|(field, values)| membership_filter(field, values));

    let filters: Vec<NumericFilter> = wheres.chain(where_ins).collect();

    if filters.is_empty() {
        None
    } else {
        Some(filters)
    }
}

fn equality_clause(field: &str, value: &FilterValue) -> String {
    match value {
        FilterValue::Bool(flag) => format!("{} = {}", field, u8::from(*flag)),
        other => format!("{} = {}", field, other),
    }
}

fn membership_clause(field: &str, value: &FilterValue) -> String {
    match value {
        FilterValue::Bool(flag) => format!("{} = {}", field, u8::from(*flag)),
        other => format!("{}:{}", field, other),
    }
}

fn membership_filter(field: &str, values: &[FilterValue]) -> NumericFilter {
    if values.is_empty() {
        return NumericFilter::clause(MATCH_NOTHING);
    }

    NumericFilter::AnyOf(
        values
            .iter()
            .map(|value| membership_clause(field, value))
            .collect(),
    )
}
