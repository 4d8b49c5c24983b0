use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};
use url::Url;

use super::queries::QueryRequest;
use crate::config::models::ApiConfig;
use crate::constants::api::API_KEY_HEADER;
use crate::metrics::QueryMetrics;

/// Errors that can occur when executing a query
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to create HTTP client: {0}")]
    ClientError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP error with status code: {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("GraphQL error: {0}")]
    GraphqlError(String),

    #[error("Response has no data payload")]
    MissingData,
}

impl FetchError {
    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ClientError(_) => "client",
            Self::NetworkError(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::HttpError { .. } => "http",
            Self::JsonError(_) => "json",
            Self::GraphqlError(_) => "graphql",
            Self::MissingData => "missing_data",
        }
    }
}

/// Executes one query and returns the response `data` payload
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, request: &QueryRequest) -> Result<Value, FetchError>;
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Executes queries against a GraphQL endpoint over HTTP
pub struct GraphqlExecutor {
    client: Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl GraphqlExecutor {
    /// Creates an executor with a reusable HTTP client.
    ///
    /// The API key, when present, is attached to every request as a
    /// sensitive default header.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| FetchError::ClientError(format!("invalid endpoint '{}': {e}", config.endpoint)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key.expose_secret())
                .map_err(|e| FetchError::ClientError(format!("invalid API key header: {e}")))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs: config.timeout_secs,
        })
    }

    /// The endpoint queries are sent to
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn send(&self, request: &QueryRequest) -> Result<Value, FetchError> {
        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&request.body())
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => {
                error!("Query {} timed out after {}s", request.name(), self.timeout_secs);
                return Err(FetchError::Timeout(self.timeout_secs));
            }
            Err(e) => {
                error!("Network error sending {} to {}: {}", request.name(), self.endpoint, e);
                return Err(FetchError::NetworkError(e.to_string()));
            }
        };

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            error!(
                "HTTP error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GraphqlResponse = match response.json().await {
            Ok(json) => json,
            Err(e) => {
                error!("JSON parsing error: {}", e);
                return Err(FetchError::JsonError(e.to_string()));
            }
        };

        if !parsed.errors.is_empty() {
            let message = parsed
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!("Query {} returned GraphQL errors: {}", request.name(), message);
            return Err(FetchError::GraphqlError(message));
        }

        match parsed.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(FetchError::MissingData),
        }
    }
}

#[async_trait]
impl QueryExecutor for GraphqlExecutor {
    async fn execute(&self, request: &QueryRequest) -> Result<Value, FetchError> {
        debug!("Executing {} against {}", request.name(), self.endpoint);

        let start = Instant::now();
        let result = self.send(request).await;

        match &result {
            Ok(_) => {
                QueryMetrics::record_success(request.name(), start.elapsed());
                debug!("Query {} completed in {:?}", request.name(), start.elapsed());
            }
            Err(e) => QueryMetrics::record_failure(request.name(), e.kind(), start.elapsed()),
        }

        result
    }
}
