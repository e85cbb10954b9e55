//! Manager HTTP client.
//!
//! # Responsibilities
//! - Build the request URL from the base API URL and query parameters
//! - Attach the fixed caller headers
//! - Enforce a deadline on every round trip
//! - Decode the body into a [`ManagerResponse`], all or nothing

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio::time::timeout;

use crate::config::ManagerConfig;
use crate::error::FetchError;
use crate::manager::response::ManagerResponse;

/// Header identifying read-API callers to the manager.
pub const CUSTOM_KEY_HEADER: &str = "custom-key";
pub const CUSTOM_KEY_VALUE: &str = "inlong-readapi";

/// Parameters of one manager request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub api_url: String,
    pub sort_cluster_name: String,
    pub sort_task_id: String,
    /// Fingerprint of the configuration currently held by the caller.
    pub md5: String,
    pub api_version: String,
}

impl FetchRequest {
    /// Full request URL with encoded query parameters.
    pub fn url(&self) -> Result<url::Url, FetchError> {
        url::Url::parse_with_params(
            &self.api_url,
            &[
                ("sortClusterName", self.sort_cluster_name.as_str()),
                ("sortTaskId", self.sort_task_id.as_str()),
                ("md5", self.md5.as_str()),
                ("apiVersion", self.api_version.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })
    }
}

/// Performs one manager round trip.
pub trait ConfigFetcher: Send + Sync {
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<ManagerResponse, FetchError>> + Send;
}

/// [`ConfigFetcher`] backed by `reqwest`.
#[derive(Clone)]
pub struct HttpConfigFetcher {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl HttpConfigFetcher {
    pub fn new(config: &ManagerConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CUSTOM_KEY_HEADER, HeaderValue::from_static(CUSTOM_KEY_VALUE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FetchError::Transport(format!("Invalid User-Agent: {}", e)))?,
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.request_timeout_secs,
        })
    }

    async fn get(&self, url: url::Url) -> Result<ManagerResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        tracing::debug!(
            status = %response.status(),
            content_type = ?response.headers().get(reqwest::header::CONTENT_TYPE),
            "Manager responded"
        );

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        tracing::trace!(body = %String::from_utf8_lossy(&body), "Manager response body");

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl ConfigFetcher for HttpConfigFetcher {
    fn fetch(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<ManagerResponse, FetchError>> + Send {
        async move {
            let url = request.url()?;
            tracing::debug!(url = %url, "Requesting sort task config");

            match timeout(Duration::from_secs(self.timeout_secs), self.get(url)).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout(self.timeout_secs)),
            }
        }
    }
}

impl std::fmt::Debug for HttpConfigFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfigFetcher")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
