use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::traits::MonitorGateway;
use crate::errors::CoreError;
use crate::models::config::Config;
use crate::models::status::StatusSnapshot;

/// Default per-request timeout. Keeps a dead backend from suspending the
/// edit session indefinitely.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport to the monitoring backend.
///
/// Endpoints: `GET {base}/status`, `GET {base}/config`, `POST {base}/config`.
/// The POST body is the full configuration document and the response echoes
/// the persisted state.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Connect to a backend at `base_url` (e.g., "http://localhost:8256").
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Connect with an explicit per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Check the HTTP status, then decode the body as JSON.
    /// Decoding from the raw text keeps payload errors distinguishable
    /// from transport errors.
    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        resp: reqwest::Response,
    ) -> Result<T, CoreError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(CoreError::Api {
                endpoint: endpoint.to_string(),
                message: format!("HTTP {status}"),
            });
        }
        serde_json::from_str(&body).map_err(|e| {
            CoreError::Deserialization(format!("invalid response from {endpoint}: {e}"))
        })
    }
}

#[async_trait]
impl MonitorGateway for HttpGateway {
    async fn fetch_status(&self) -> Result<StatusSnapshot, CoreError> {
        let url = format!("{}/status", self.base_url);
        debug!(%url, "fetching status");
        let resp = self.client.get(&url).send().await?;
        Self::decode("/status", resp).await
    }

    async fn fetch_config(&self) -> Result<Config, CoreError> {
        let url = format!("{}/config", self.base_url);
        debug!(%url, "fetching configuration");
        let resp = self.client.get(&url).send().await?;
        Self::decode("/config", resp).await
    }

    async fn submit_config(&self, config: &Config) -> Result<Config, CoreError> {
        let url = format!("{}/config", self.base_url);
        debug!(%url, entries = config.portfolio.len(), "submitting configuration");
        let resp = self.client.post(&url).json(config).send().await?;
        Self::decode("/config", resp).await
    }
}
