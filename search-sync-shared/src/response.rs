//! Search request parameters and provider responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a provider filter set.
///
/// A `Clause` must hold on its own; an `AnyOf` group holds when any of its
/// clauses does. Serialized as a string or an array of strings respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericFilter {
    Clause(String),
    AnyOf(Vec<String>),
}

impl NumericFilter {
    pub fn clause(clause: impl Into<String>) -> Self {
        NumericFilter::Clause(clause.into())
    }
}

/// Parameters of a single-index search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Full-text query; empty matches every object.
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_filters: Option<Vec<NumericFilter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<usize>,
    /// Zero-based page index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

/// A single search result entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(
        rename = "_rankingInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ranking_info: Option<Value>,
    #[serde(
        rename = "_highlightResult",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub highlight_result: Option<Value>,
    /// Remaining stored attributes of the object.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl SearchHit {
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            ranking_info: None,
            highlight_result: None,
            attributes: Map::new(),
        }
    }
}

/// Raw response of a single-index search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
    /// Total number of matching objects, when the provider reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_hits: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_pages: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<usize>,
    #[serde(
        rename = "processingTimeMS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_time_ms: Option<u64>,
    #[serde(default)]
    pub query: String,
}

impl SearchResponse {
    /// A response with no hits.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Object identifiers of the hits, in ranking order.
    pub fn ids(&self) -> Vec<String> {
        self.hits.iter().map(|hit| hit.object_id.clone()).collect()
    }

    /// Total hit count, falling back to the number of hits returned.
    pub fn total_hits(&self) -> u64 {
        self.nb_hits.unwrap_or(self.hits.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_omit_unset_fields() {
        let params = SearchParams {
            query: "rust".to_string(),
            ..Default::default()
        };

        assert_eq!(serde_json::to_value(&params).unwrap(), json!({ "query": "rust" }));
    }

    #[test]
    fn test_params_serialize_nested_filters() {
        let params = SearchParams {
            query: String::new(),
            numeric_filters: Some(vec![
                NumericFilter::clause("age = 5"),
                NumericFilter::AnyOf(vec!["tag:a".to_string(), "tag:b".to_string()]),
            ]),
            hits_per_page: Some(20),
            page: Some(2),
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "query": "",
                "numericFilters": ["age = 5", ["tag:a", "tag:b"]],
                "hitsPerPage": 20,
                "page": 2
            })
        );
    }

    #[test]
    fn test_parse_response() {
        let body = json!({
            "hits": [
                {
                    "objectID": "12",
                    "title": "Ownership",
                    "_highlightResult": { "title": { "value": "<em>Own</em>ership" } },
                    "_rankingInfo": { "nbTypos": 0 }
                },
                { "objectID": "7" }
            ],
            "nbHits": 40,
            "page": 0,
            "nbPages": 20,
            "hitsPerPage": 2,
            "processingTimeMS": 1,
            "query": "own"
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.ids(), vec!["12".to_string(), "7".to_string()]);
        assert_eq!(response.total_hits(), 40);
        assert_eq!(response.hits[0].attributes["title"], "Ownership");
        assert!(response.hits[0].highlight_result.is_some());
        assert!(response.hits[1].ranking_info.is_none());
    }

    #[test]
    fn test_total_hits_falls_back_to_hit_count() {
        let response = SearchResponse {
            hits: vec![SearchHit::new("1"), SearchHit::new("2")],
            ..Default::default()
        };

        assert_eq!(response.total_hits(), 2);
    }
}
