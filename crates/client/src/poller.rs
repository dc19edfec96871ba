//! Background refresh of the unread-inquiry count shown in the sidebar.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::ClientError;
use crate::gateway::Gateway;
use crate::resources::InquiryApi;

/// Shortest period the poller will tick at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Handle to a running poller. The latest count is published on a watch
/// channel; `None` until the first successful fetch.
pub struct UnreadPoller {
    rx: watch::Receiver<Option<i64>>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl UnreadPoller {
    /// Poll every `interval` (at least [`MIN_INTERVAL`]) until `cancel`
    /// fires or the session ends.
    pub fn spawn(gateway: Gateway, interval: Duration, cancel: CancellationToken) -> Self {
        let (tx, rx) = watch::channel(None);
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                if !gateway.session().is_logged_in() {
                    tracing::debug!("Not logged in, unread poller stopping");
                    break;
                }
                match InquiryApi::unread_count(&gateway).await {
                    Ok(count) => {
                        tx.send_replace(Some(count));
                    }
                    Err(ClientError::Unauthorized) => break,
                    Err(e) => tracing::warn!(error = %e, "Unread count refresh failed"),
                }
            }
            tracing::debug!("Unread poller stopped");
        });

        Self { rx, cancel, handle }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<i64>> {
        self.rx.clone()
    }

    pub fn latest(&self) -> Option<i64> {
        *self.rx.borrow()
    }

    /// Cancel and wait for the task to finish.
    pub async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.handle.await {
            tracing::error!(error = %e, "Unread poller task failed");
        }
    }
}
