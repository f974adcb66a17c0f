//! User-directory client with timeout and error handling.
//!
//! # Responsibilities
//! - Query the chat platform's user directory
//! - Enforce a per-request deadline
//! - Map transport failures into the upstream error taxonomy
//! - Provide a health check for directory connectivity

use std::time::Duration;

use tokio::time::timeout;
use url::Url;

use crate::config::schema::RetryConfig;
use crate::observability::metrics;
use crate::retry::invoker::retry_with_backoff;
use crate::upstream::types::{
    QueryUsersResponse, UpstreamConfig, UpstreamError, UpstreamResult, UserQuery,
};

/// Client for the upstream user directory.
#[derive(Clone)]
pub struct DirectoryClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Resolved query endpoint.
    query_url: Url,
    /// Configuration.
    config: UpstreamConfig,
    /// Per-request deadline.
    timeout_duration: Duration,
}

impl DirectoryClient {
    /// Create a new directory client.
    ///
    /// Fails if the configured base URL cannot be parsed.
    pub fn new(config: UpstreamConfig) -> UpstreamResult<Self> {
        let base: Url = config
            .base_url
            .parse()
            .map_err(|_| UpstreamError::BaseUrl(config.base_url.clone()))?;
        let query_url = base
            .join("users/query")
            .map_err(|_| UpstreamError::BaseUrl(config.base_url.clone()))?;

        let timeout_duration = Duration::from_secs(config.request_timeout_secs);

        tracing::info!(
            base_url = %base,
            timeout_secs = config.request_timeout_secs,
            "Directory client initialized"
        );

        Ok(Self {
            http: reqwest::Client::new(),
            query_url,
            config,
            timeout_duration,
        })
    }

    /// Query the user directory once, with no retry.
    pub async fn query_users(&self, query: &UserQuery) -> UpstreamResult<QueryUsersResponse> {
        let mut request = self.http.post(self.query_url.clone()).json(query);
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = match timeout(self.timeout_duration, request.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(UpstreamError::Request(e.to_string())),
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.request_timeout_secs,
                    "Directory request timed out"
                );
                return Err(UpstreamError::Timeout(self.config.request_timeout_secs));
            }
        };

        let status = response.status();
        let body = match timeout(self.timeout_duration, response.text()).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => return Err(UpstreamError::Request(e.to_string())),
            Err(_) => return Err(UpstreamError::Timeout(self.config.request_timeout_secs)),
        };

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    /// Query the user directory, re-attempting failures on the configured
    /// backoff schedule.
    ///
    /// Every failure is retried the same way; once the budget is spent, the
    /// error from the final attempt is returned unchanged.
    pub async fn query_users_with_retry(
        &self,
        query: &UserQuery,
        retry: &RetryConfig,
    ) -> UpstreamResult<QueryUsersResponse> {
        retry_with_backoff(retry, || self.query_users(query)).await
    }

    /// Check if the directory is reachable and answering queries.
    ///
    /// Probes with an empty filter, the cheapest query the directory serves.
    pub async fn is_healthy(&self) -> bool {
        let healthy = self.query_users(&UserQuery::default()).await.is_ok();
        metrics::record_backend_health("directory", healthy);
        healthy
    }

    /// Get the configuration.
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }
}

impl std::fmt::Debug for DirectoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_secs", &self.config.request_timeout_secs)
            .finish()
    }
}
