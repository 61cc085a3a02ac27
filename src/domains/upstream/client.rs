//! Exchange Rates API client.
//!
//! The dispatcher only sees the [`RatesClient`] capability, so tests can swap
//! the real reqwest-backed client for a stub.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::{UpstreamError, UpstreamQuery};
use crate::core::config::UpstreamConfig;

/// Header carrying the APILayer key.
pub const API_KEY_HEADER: &str = "apikey";

/// Capability to perform one GET against the upstream API.
#[async_trait]
pub trait RatesClient: Send + Sync {
    /// Execute the query and return the decoded JSON body.
    async fn fetch(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError>;
}

/// reqwest implementation of [`RatesClient`].
pub struct HttpRatesClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl HttpRatesClient {
    /// Build a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(concat!("exchange-rates-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Full URL for a query, without the query string.
    pub fn url_for(&self, query: &UpstreamQuery) -> String {
        format!("{}{}", self.base_url, query.path)
    }

    fn map_request_error(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout_secs)
        } else {
            UpstreamError::network(err.to_string())
        }
    }
}

#[async_trait]
impl RatesClient for HttpRatesClient {
    async fn fetch(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError> {
        let url = self.url_for(query);
        debug!(%url, params = ?query.params, "Calling Exchange Rates API");

        let mut request = self.client.get(&url).query(&query.params);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !status.is_success() {
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            warn!(status = status.as_u16(), "Exchange Rates API error: {}", message);
            return Err(UpstreamError::status(status.as_u16(), message));
        }

        let data: Value = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::invalid_response(e.to_string()))?;

        ensure_success(&data)?;
        Ok(data)
    }
}

/// Pull a human readable message out of an error body.
///
/// APILayer uses `{"message": ...}` for gateway errors and
/// `{"error": {"info": ...}}` for API errors; anything else is returned raw.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_string());
    };

    json.get("message")
        .and_then(Value::as_str)
        .or_else(|| json.pointer("/error/info").and_then(Value::as_str))
        .or_else(|| json.pointer("/error/message").and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| Some(trimmed.to_string()))
}

/// Reject 2xx bodies that carry `"success": false`.
fn ensure_success(data: &Value) -> Result<(), UpstreamError> {
    if data.get("success").and_then(Value::as_bool) != Some(false) {
        return Ok(());
    }

    let error = data.get("error");
    let detail = error
        .and_then(|e| e.get("info").or_else(|| e.get("type")))
        .and_then(Value::as_str)
        .map(str::to_string);
    let code = error.and_then(|e| e.get("code")).map(Value::to_string);

    let message = match (code, detail) {
        (Some(code), Some(detail)) => format!("{} ({})", detail, code),
        (None, Some(detail)) => detail,
        (Some(code), None) => format!("error code {}", code),
        (None, None) => "unknown error".to_string(),
    };

    Err(UpstreamError::Rejected(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    fn client_for(server: &MockServer, api_key: Option<&str>) -> HttpRatesClient {
        HttpRatesClient::new(&UpstreamConfig {
            base_url: server.base_url(),
            api_key: api_key.map(str::to_string),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_key_header_and_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/latest")
                    .header(API_KEY_HEADER, "test-key")
                    .query_param("base", "USD")
                    .query_param("symbols", "EUR,GBP");
                then.status(200).json_body(json!({
                    "success": true,
                    "base": "USD",
                    "date": "2024-03-01",
                    "rates": { "EUR": 0.92, "GBP": 0.79 }
                }));
            })
            .await;

        let client = client_for(&server, Some("test-key"));
        let query = UpstreamQuery::new("/latest")
            .param("base", "USD")
            .param("symbols", "EUR,GBP");
        let data = client.fetch(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(data["date"], "2024-03-01");
    }

    #[tokio::test]
    async fn test_fetch_maps_404_to_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/nope");
                then.status(404)
                    .json_body(json!({ "message": "no Route matched with those values" }));
            })
            .await;

        let client = client_for(&server, Some("test-key"));
        let err = client.fetch(&UpstreamQuery::new("/nope")).await.unwrap_err();

        match &err {
            UpstreamError::Status { status, message } => {
                assert_eq!(*status, 404);
                assert_eq!(message, "no Route matched with those values");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_uses_raw_body_when_not_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/symbols");
                then.status(503).body("upstream unavailable");
            })
            .await;

        let client = client_for(&server, None);
        let err = client
            .fetch(&UpstreamQuery::new("/symbols"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Exchange Rates API error: 503 - upstream unavailable"
        );
    }

    #[tokio::test]
    async fn test_fetch_rejects_success_false_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/timeseries");
                then.status(200).json_body(json!({
                    "success": false,
                    "error": {
                        "code": 302,
                        "type": "invalid_date",
                        "info": "You have entered an invalid date."
                    }
                }));
            })
            .await;

        let client = client_for(&server, Some("k"));
        let err = client
            .fetch(&UpstreamQuery::new("/timeseries"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Rejected(_)));
        assert!(err.to_string().contains("invalid date"));
        assert!(err.to_string().contains("302"));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        let client = HttpRatesClient::new(&UpstreamConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: None,
            timeout_secs: 2,
        })
        .unwrap();

        let err = client
            .fetch(&UpstreamQuery::new("/symbols"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_slow_upstream_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/latest");
                then.status(200)
                    .delay(std::time::Duration::from_secs(3))
                    .json_body(json!({ "success": true, "rates": {} }));
            })
            .await;

        let client = HttpRatesClient::new(&UpstreamConfig {
            base_url: server.base_url(),
            api_key: None,
            timeout_secs: 1,
        })
        .unwrap();

        let err = client
            .fetch(&UpstreamQuery::new("/latest"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Timeout(1)), "got {err:?}");
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let client = HttpRatesClient::new(&UpstreamConfig {
            base_url: "https://example.test/api/".to_string(),
            api_key: None,
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(
            client.url_for(&UpstreamQuery::new("/2023-01-01")),
            "https://example.test/api/2023-01-01"
        );
    }
}
