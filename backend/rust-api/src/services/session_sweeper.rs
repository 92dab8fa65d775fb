use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::metrics::{QUIZ_SESSIONS_ACTIVE, QUIZ_SESSIONS_TOTAL, SESSION_SWEEPER_TICKS_TOTAL};

use super::session_store::SessionStore;

/// Periodically evicts expired quiz sessions from the store.
pub struct SessionSweeper {
    store: Arc<dyn SessionStore>,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(store: Arc<dyn SessionStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    pub async fn run(&self) {
        info!(
            "Starting session sweeper loop (interval {}s)",
            self.interval.as_secs()
        );

        loop {
            sleep(self.interval).await;
            let purged = self.run_once().await;
            SESSION_SWEEPER_TICKS_TOTAL
                .with_label_values(&["success"])
                .inc();
            debug!(purged, "Session sweeper tick completed");
        }
    }

    pub async fn run_once(&self) -> usize {
        let purged = self.store.purge_expired(Utc::now()).await;
        QUIZ_SESSIONS_TOTAL
            .with_label_values(&["expired"])
            .inc_by(purged as u64);
        QUIZ_SESSIONS_ACTIVE.set(self.store.len().await as i64);

        if purged > 0 {
            info!("Evicted {} expired quiz sessions", purged);
        }
        purged
    }
}
