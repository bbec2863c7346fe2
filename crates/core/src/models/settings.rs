use serde::{Deserialize, Serialize};

/// Monitoring cadence and notification settings, as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Seconds between two refresh passes of the monitoring loop. At least 1.
    pub refresh_interval_seconds: u64,

    /// Seconds the backend pauses after sending a rebalance alert. At least 1.
    pub alert_interval_seconds: u64,

    /// Master switch for push notifications.
    pub notification_enabled: bool,

    /// Push-channel secret. Write-mostly: the backend may omit it when
    /// serving the configuration.
    #[serde(default)]
    pub send_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval_seconds: 5,
            alert_interval_seconds: 60,
            notification_enabled: true,
            send_key: String::new(),
        }
    }
}
