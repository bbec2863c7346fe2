use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

use crate::gateway::traits::MonitorGateway;

/// Keeps the displayed status text current, independent of the edit session.
///
/// Fetches once immediately on start, then once per `period`. A failed fetch
/// is swallowed: the published text simply stops advancing until a later poll
/// succeeds. Stopping the poller — explicitly or by dropping it — halts the
/// loop and discards any fetch still in flight, so no write can land after
/// teardown.
pub struct StatusPoller {
    status_rx: watch::Receiver<String>,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl StatusPoller {
    /// Spawn the polling task. `period` governs a background loop that hits
    /// the backend, so it is always caller-supplied.
    pub fn start(gateway: Arc<dyn MonitorGateway>, period: Duration) -> Self {
        let (status_tx, status_rx) = watch::channel(String::new());
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            // The first tick fires immediately, giving the initial fetch.
            let mut ticker = interval(period);
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {}
                }
                // Race the fetch against shutdown: a response arriving after
                // stop() must never be published.
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    fetched = gateway.fetch_status() => match fetched {
                        Ok(snapshot) => {
                            let _ = status_tx.send(snapshot.message);
                        }
                        Err(e) => debug!(error = %e, "status poll failed"),
                    },
                }
            }
            debug!("status poller stopped");
        });

        Self {
            status_rx,
            shutdown_tx,
            task,
        }
    }

    /// Subscribe to status updates, e.g. for a UI binding.
    /// The receiver keeps serving the last published value after teardown.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.status_rx.clone()
    }

    /// The most recently published status text. Empty until the first
    /// successful fetch.
    #[must_use]
    pub fn current(&self) -> String {
        self.status_rx.borrow().clone()
    }

    /// Signal the polling task to stop. Idempotent, returns immediately.
    /// Dropping the poller has the same effect.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Stop and wait for the polling task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.task.await;
    }
}
