use thiserror::Error;

/// Unified error type for the entire monitor-console-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error ({endpoint}): {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Edit Session ────────────────────────────────────────────────
    #[error("Failed to load status and configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("No configuration loaded — call load() first")]
    NotLoaded,
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
