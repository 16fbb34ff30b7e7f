//! HTTP transport to the CryptoSim backend.
//!
//! Every endpoint of the backend lives under `/api` and speaks JSON both
//! ways. The transport keeps the contract deliberately small:
//!
//! - a non-2xx status fails with [`AppError::Http`], carrying the status and
//!   the verbatim response body so callers can show it to the user
//! - a 2xx response without a JSON content-type resolves to `Ok(None)`
//!   (fire-and-forget actions answer this way)
//! - anything else is decoded into the caller's type

use crate::config::Config;
use crate::constants::{API_PREFIX, USER_AGENT};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpInternalClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Abstraction over the backend HTTP API.
///
/// Services are generic over this trait so tests can substitute the
/// transport without a running backend.
#[async_trait]
pub trait ApiHttpClient: Send + Sync {
    /// Issues a request against an API path (e.g. `/prices`).
    ///
    /// # Returns
    /// * `Ok(Some(T))` - Decoded JSON payload
    /// * `Ok(None)` - Success without a JSON body
    /// * `Err(AppError)` - Transport failure, non-2xx status, or decode error
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

/// reqwest-backed implementation of [`ApiHttpClient`]
pub struct ApiHttpClientImpl {
    config: Arc<Config>,
    http_client: HttpInternalClient,
}

impl ApiHttpClientImpl {
    /// Creates a new client from the given configuration.
    ///
    /// The underlying connection pool is created eagerly; requests are only
    /// issued on demand.
    pub fn new(config: Arc<Config>) -> Self {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            API_PREFIX,
            path
        )
    }
}

#[async_trait]
impl ApiHttpClient for ApiHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.url_for(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header("Accept", "application/json");

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Http { status, body });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        if !is_json {
            return Ok(None);
        }

        let text = response.text().await?;
        let payload = serde_json::from_str(&text)?;
        Ok(Some(payload))
    }
}
