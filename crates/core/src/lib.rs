pub mod errors;
pub mod gateway;
pub mod models;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use errors::CoreError;
use gateway::http::HttpGateway;
use gateway::traits::MonitorGateway;
use models::config::Config;
use models::form::{ConfigForm, EntryForm};
use models::status::StatusSnapshot;
use services::form_service::FormService;
use services::status_poller::StatusPoller;

/// Main entry point for the Monitor Console core library.
/// Owns one configuration edit session against a monitoring backend.
///
/// The session holds two pieces of state: the baseline configuration (the
/// last state known to match the backend) and the editable form the operator
/// mutates. Live status text is owned elsewhere, by `StatusPoller` — the two
/// share no mutable state, so polling can never disturb an ongoing edit.
#[must_use]
pub struct ConfigSession {
    gateway: Arc<dyn MonitorGateway>,
    form_service: FormService,
    baseline: Option<Config>,
    form: Option<ConfigForm>,
    /// Tracks whether the form has diverged from the baseline since the
    /// last successful load or save.
    dirty: bool,
}

impl std::fmt::Debug for ConfigSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigSession")
            .field("loaded", &self.form.is_some())
            .field("entries", &self.form.as_ref().map(|c| c.portfolio.len()))
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl ConfigSession {
    /// Create a session over any gateway implementation.
    pub fn new(gateway: Arc<dyn MonitorGateway>) -> Self {
        Self {
            gateway,
            form_service: FormService::new(),
            baseline: None,
            form: None,
            dirty: false,
        }
    }

    /// Create a session talking HTTP to a backend at `base_url`.
    pub fn connect(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpGateway::new(base_url)))
    }

    // ── Load / Save ─────────────────────────────────────────────────

    /// Fetch status and configuration concurrently and (re)populate the form.
    ///
    /// Both requests are issued up front; the form is populated only once
    /// both have resolved. If either fails, a single `LoadFailed` is
    /// returned and the previous baseline and form — if any — stay
    /// untouched, so a refresh that hits a flaky backend cannot wipe an
    /// ongoing edit.
    pub async fn load(&mut self) -> Result<StatusSnapshot, CoreError> {
        let (status, config) = tokio::try_join!(
            self.gateway.fetch_status(),
            self.gateway.fetch_config(),
        )
        .map_err(|e| {
            warn!(error = %e, "load failed");
            CoreError::LoadFailed(e.to_string())
        })?;

        info!(entries = config.portfolio.len(), "configuration loaded");
        self.form = Some(self.form_service.expand_config(&config));
        self.baseline = Some(config);
        self.dirty = false;
        Ok(status)
    }

    /// Collapse the form and submit the full configuration document.
    ///
    /// On success the backend's echoed document becomes the new baseline —
    /// the session reflects exactly what was persisted, without a re-fetch.
    /// On failure the baseline is not advanced and the form keeps the
    /// operator's edits, so the save can simply be retried.
    pub async fn save(&mut self) -> Result<(), CoreError> {
        let form = self.form.as_ref().ok_or(CoreError::NotLoaded)?;
        let outgoing = self.form_service.collapse_config(form);

        let persisted = self
            .gateway
            .submit_config(&outgoing)
            .await
            .map_err(|e| {
                warn!(error = %e, "save failed");
                CoreError::SaveFailed(e.to_string())
            })?;

        info!(entries = persisted.portfolio.len(), "configuration saved");
        self.baseline = Some(persisted);
        self.dirty = false;
        Ok(())
    }

    // ── Portfolio Rows ──────────────────────────────────────────────

    /// Append a blank portfolio row to the form. No backend interaction
    /// happens until the next save. Returns the new row for further
    /// editing, or `None` when nothing is loaded yet.
    pub fn add_entry(&mut self) -> Option<&mut EntryForm> {
        let form = self.form.as_mut()?;
        form.portfolio.push(EntryForm::new());
        self.dirty = true;
        form.portfolio.last_mut()
    }

    /// Remove the portfolio row at `index`. Returns the removed row, or
    /// `None` when the index is out of range or nothing is loaded.
    pub fn remove_entry(&mut self, index: usize) -> Option<EntryForm> {
        let form = self.form.as_mut()?;
        if index >= form.portfolio.len() {
            return None;
        }
        self.dirty = true;
        Some(form.portfolio.remove(index))
    }

    // ── State Access ────────────────────────────────────────────────

    /// The editable form, once a load has succeeded.
    #[must_use]
    pub fn form(&self) -> Option<&ConfigForm> {
        self.form.as_ref()
    }

    /// Mutable access to the form for operator edits.
    /// Marks the session as having unsaved changes.
    pub fn form_mut(&mut self) -> Option<&mut ConfigForm> {
        if self.form.is_some() {
            self.dirty = true;
        }
        self.form.as_mut()
    }

    /// The last configuration known to match the backend's persisted state.
    #[must_use]
    pub fn baseline(&self) -> Option<&Config> {
        self.baseline.as_ref()
    }

    /// `true` once a load has succeeded and the form can be rendered.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.form.is_some()
    }

    /// `true` if the form has been touched since the last load or save.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Status Polling ──────────────────────────────────────────────

    /// Spawn a status poller on this session's gateway. The poller has its
    /// own lifecycle (stop it on teardown) and never touches the edit state.
    pub fn spawn_status_poller(&self, period: Duration) -> StatusPoller {
        StatusPoller::start(Arc::clone(&self.gateway), period)
    }
}
