//! Algolia REST client implementation.
//!
//! This module provides the concrete implementation of `SearchProviderClient`
//! over Algolia's HTTP API using `reqwest`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::AlgoliaConfig;
use crate::errors::SearchEngineError;
use crate::interfaces::SearchProviderClient;
use search_sync_shared::{SearchObject, SearchParams, SearchResponse};

const APPLICATION_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";

/// Body of a `/batch` request.
#[derive(Debug, Serialize)]
struct BatchWrite<'a> {
    requests: Vec<BatchOperation<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "action", content = "body", rename_all = "camelCase")]
enum BatchOperation<'a> {
    AddObject(&'a SearchObject),
    DeleteObject(ObjectRef<'a>),
}

#[derive(Debug, Serialize)]
struct ObjectRef<'a> {
    #[serde(rename = "objectID")]
    object_id: &'a str,
}

/// Error body returned by Algolia on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Algolia client.
///
/// Holds one `reqwest::Client`, so clones of an engine share a single
/// connection pool.
///
/// # Example
///
/// ```ignore
/// let config = AlgoliaConfig::new("APP_ID", "API_KEY");
/// let client = AlgoliaClient::new(config)?;
///
/// let response = client
///     .search_single_index("articles", &SearchParams { query: "rust".into(), ..Default::default() })
///     .await?;
/// println!("Found {} hits", response.total_hits());
/// ```
pub struct AlgoliaClient {
    http: Client,
    app_id: String,
    api_key: String,
    read_host: Url,
    write_host: Url,
}

impl AlgoliaClient {
    /// Create a new client from `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(AlgoliaClient)` - A new client instance
    /// * `Err(SearchEngineError)` - If the credentials or hosts are invalid
    pub fn new(config: AlgoliaConfig) -> Result<Self, SearchEngineError> {
        config.validate()?;
        let read_host = config.read_host()?;
        let write_host = config.write_host()?;

        let http = Client::builder()
            .build()
            .map_err(|e| SearchEngineError::transport(e.to_string()))?;

        info!(
            app_id = %config.app_id,
            read_host = %read_host,
            write_host = %write_host,
            "Created Algolia client"
        );

        Ok(Self {
            http,
            app_id: config.app_id,
            api_key: config.api_key,
            read_host,
            write_host,
        })
    }

    /// Build `{host}/1/indexes/{index_name}[/{action}]`.
    ///
    /// The index name is percent-encoded as a single path segment.
    fn index_url(
        host: &Url,
        index_name: &str,
        action: Option<&str>,
    ) -> Result<Url, SearchEngineError> {
        let mut url = host.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                SearchEngineError::config(format!("Host {} cannot be used as a base URL", host))
            })?;
            segments.pop_if_empty().extend(["1", "indexes", index_name]);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    fn add_objects_body(objects: &[SearchObject]) -> BatchWrite<'_> {
        BatchWrite {
            requests: objects.iter().map(BatchOperation::AddObject).collect(),
        }
    }

    fn delete_objects_body(object_ids: &[String]) -> BatchWrite<'_> {
        BatchWrite {
            requests: object_ids
                .iter()
                .map(|id| BatchOperation::DeleteObject(ObjectRef { object_id: id }))
                .collect(),
        }
    }

    /// Extract a readable message from an error response body.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            return parsed.message;
        }
        if body.trim().is_empty() {
            return status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
        }
        body.to_string()
    }

    /// POST `body` to `url` and fail on any non-success status.
    async fn post<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Response, SearchEngineError> {
        let payload =
            serde_json::to_vec(body).map_err(|e| SearchEngineError::serialization(e.to_string()))?;

        debug!(url = %url, bytes = payload.len(), "Sending Algolia request");

        let response = self
            .http
            .post(url.clone())
            .header(APPLICATION_ID_HEADER, &self.app_id)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| SearchEngineError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!(status = %status, error = %e, "Failed to read error body");
                    String::new()
                }
            };
            let message = Self::error_message(status, &error_body);
            error!(status = %status, url = %url, message = %message, "Algolia request failed");
            return Err(SearchEngineError::provider(status.as_u16(), message));
        }

        Ok(response)
    }
}

#[async_trait]
impl SearchProviderClient for AlgoliaClient {
    #[instrument(skip(self, objects), fields(count = objects.len()))]
    async fn save_objects(
        &self,
        index_name: &str,
        objects: &[SearchObject],
    ) -> Result<(), SearchEngineError> {
        let url = Self::index_url(&self.write_host, index_name, Some("batch"))?;
        self.post(url, &Self::add_objects_body(objects)).await?;

        debug!(index = %index_name, count = objects.len(), "Objects saved");
        Ok(())
    }

    #[instrument(skip(self, object_ids), fields(count = object_ids.len()))]
    async fn delete_objects(
        &self,
        index_name: &str,
        object_ids: &[String],
    ) -> Result<(), SearchEngineError> {
        let url = Self::index_url(&self.write_host, index_name, Some("batch"))?;
        self.post(url, &Self::delete_objects_body(object_ids)).await?;

        debug!(index = %index_name, count = object_ids.len(), "Objects deleted");
        Ok(())
    }

    #[instrument(skip(self, params), fields(query = %params.query))]
    async fn search_single_index(
        &self,
        index_name: &str,
        params: &SearchParams,
    ) -> Result<SearchResponse, SearchEngineError> {
        let url = Self::index_url(&self.read_host, index_name, Some("query"))?;
        let response = self.post(url, params).await?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchEngineError::parse(e.to_string()))?;

        debug!(
            index = %index_name,
            hits = body.hits.len(),
            total = body.total_hits(),
            "Search completed"
        );
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn clear_objects(&self, index_name: &str) -> Result<(), SearchEngineError> {
        let url = Self::index_url(&self.write_host, index_name, Some("clear"))?;
        self.post(url, &SearchObject::new()).await?;

        info!(index = %index_name, "Index cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_sync_shared::OBJECT_ID_FIELD;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn host() -> Url {
        Url::parse("https://app123.algolia.net").unwrap()
    }

    #[test]
    fn test_index_url() {
        let url = AlgoliaClient::index_url(&host(), "articles", Some("batch")).unwrap();
        assert_eq!(url.as_str(), "https://app123.algolia.net/1/indexes/articles/batch");
    }

    #[test]
    fn test_index_url_encodes_index_name() {
        let url = AlgoliaClient::index_url(&host(), "prod/articles v2", Some("query")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://app123.algolia.net/1/indexes/prod%2Farticles%20v2/query"
        );
    }

    #[test]
    fn test_index_url_keeps_host_prefix() {
        let host = Url::parse("http://localhost:8080/algolia/").unwrap();
        let url = AlgoliaClient::index_url(&host, "articles", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/algolia/1/indexes/articles");
    }

    #[test]
    fn test_add_objects_body() {
        let mut object = SearchObject::new();
        object.insert(OBJECT_ID_FIELD.to_string(), json!("1"));
        object.insert("title".to_string(), json!("Ownership"));
        let objects = vec![object];

        let body = serde_json::to_value(AlgoliaClient::add_objects_body(&objects)).unwrap();

        assert_eq!(
            body,
            json!({
                "requests": [
                    { "action": "addObject", "body": { "objectID": "1", "title": "Ownership" } }
                ]
            })
        );
    }

    #[test]
    fn test_delete_objects_body() {
        let ids = vec!["1".to_string(), "2".to_string()];

        let body = serde_json::to_value(AlgoliaClient::delete_objects_body(&ids)).unwrap();

        assert_eq!(
            body,
            json!({
                "requests": [
                    { "action": "deleteObject", "body": { "objectID": "1" } },
                    { "action": "deleteObject", "body": { "objectID": "2" } }
                ]
            })
        );
    }

    #[test]
    fn test_error_message_from_json_body() {
        let message = AlgoliaClient::error_message(
            reqwest::StatusCode::FORBIDDEN,
            r#"{"message":"Invalid Application-ID or API key","status":403}"#,
        );
        assert_eq!(message, "Invalid Application-ID or API key");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(
            AlgoliaClient::error_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(
            AlgoliaClient::error_message(reqwest::StatusCode::NOT_FOUND, ""),
            "Not Found"
        );
    }

    /// Serve one canned HTTP response and hand back the raw request.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        serve_raw(format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        ))
        .await
    }

    async fn serve_raw(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{}", addr), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client_for(host: &str) -> AlgoliaClient {
        AlgoliaClient::new(AlgoliaConfig::new("APP123", "secret-key").with_host(host)).unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_credentials_to_query_endpoint() {
        let (host, server) = serve_once(
            "200 OK",
            r#"{"hits":[{"objectID":"7","title":"Traits"}],"nbHits":1,"query":"traits"}"#,
        )
        .await;
        let params = SearchParams {
            query: "traits".to_string(),
            hits_per_page: Some(5),
            ..Default::default()
        };

        let response = client_for(&host)
            .search_single_index("articles", &params)
            .await
            .unwrap();
        let request = server.await.unwrap();
        let lowered = request.to_ascii_lowercase();

        assert!(request.starts_with("POST /1/indexes/articles/query HTTP/1.1"));
        assert!(lowered.contains("x-algolia-application-id: app123"));
        assert!(lowered.contains("x-algolia-api-key: secret-key"));
        assert!(request.contains(r#""hitsPerPage":5"#));
        assert_eq!(response.ids(), vec!["7".to_string()]);
        assert_eq!(response.total_hits(), 1);
    }

    #[tokio::test]
    async fn test_save_objects_posts_batch() {
        let (host, server) = serve_once("200 OK", r#"{"taskID":1}"#).await;
        let mut object = SearchObject::new();
        object.insert(OBJECT_ID_FIELD.to_string(), json!("1"));

        client_for(&host)
            .save_objects("articles", &[object])
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /1/indexes/articles/batch HTTP/1.1"));
        assert!(request.contains(r#""action":"addObject""#));
    }

    #[tokio::test]
    async fn test_error_status_becomes_provider_error() {
        let (host, server) =
            serve_once("403 Forbidden", r#"{"message":"bad key","status":403}"#).await;

        let err = client_for(&host)
            .clear_objects("articles")
            .await
            .unwrap_err();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /1/indexes/articles/clear HTTP/1.1"));
        match err {
            SearchEngineError::ProviderError { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "bad key");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreadable_error_body_falls_back_to_status_reason() {
        let (host, server) = serve_raw(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"mes"
                .to_string(),
        )
        .await;

        let err = client_for(&host)
            .clear_objects("articles")
            .await
            .unwrap_err();
        server.await.unwrap();

        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "Provider error (500): Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_malformed_search_body_becomes_parse_error() {
        let (host, server) = serve_once("200 OK", "not json").await;

        let err = client_for(&host)
            .search_single_index("articles", &SearchParams::default())
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, SearchEngineError::ParseError(_)));
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("unsupported value"))
        }
    }

    #[tokio::test]
    async fn test_unencodable_body_is_rejected_before_sending() {
        let client = client_for("http://127.0.0.1:9");
        let url = AlgoliaClient::index_url(&client.write_host, "articles", Some("batch")).unwrap();

        let err = client.post(url, &Unencodable).await.unwrap_err();

        assert!(matches!(err, SearchEngineError::SerializationError(_)));
    }

    #[test]
    fn test_new_rejects_missing_credentials() {
        let result = AlgoliaClient::new(AlgoliaConfig::new("", "key"));
        assert!(matches!(result, Err(SearchEngineError::ConfigError(_))));
    }
}
