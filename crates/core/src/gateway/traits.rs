use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::config::Config;
use crate::models::status::StatusSnapshot;

/// Trait abstraction for the monitoring backend's three operations.
///
/// The real backend is reached over HTTP (`HttpGateway`); tests substitute
/// in-memory implementations. No business logic lives behind this seam —
/// it is transport only.
#[async_trait]
pub trait MonitorGateway: Send + Sync {
    /// Fetch the current status text.
    async fn fetch_status(&self) -> Result<StatusSnapshot, CoreError>;

    /// Fetch the stored configuration document.
    async fn fetch_config(&self) -> Result<Config, CoreError>;

    /// Persist a full configuration document. The backend echoes the
    /// persisted state back; callers treat that echo as authoritative.
    async fn submit_config(&self, config: &Config) -> Result<Config, CoreError>;
}
