//! Expiry sweeper
//!
//! A background task that periodically finds lapsed grants and removes those
//! users from the channel. Grant fields are left untouched after removal, so
//! a user whose removal keeps failing is retried on every cycle.

use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, warn};
use crate::database::SharedUserStore;
use crate::services::membership::ChannelMembership;
use crate::utils::errors::Result;
use crate::utils::logging::{log_revocation, log_sweep_summary};

/// Totals of one sweep cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub expired: usize,
    pub revoked: usize,
    pub failed: usize,
}

pub struct ExpirySweeper {
    store: SharedUserStore,
    membership: Arc<dyn ChannelMembership>,
    interval: Duration,
}

impl ExpirySweeper {
    pub fn new(store: SharedUserStore, membership: Arc<dyn ChannelMembership>, interval: Duration) -> Self {
        Self {
            store,
            membership,
            interval,
        }
    }

    /// Revoke membership of every user whose grant lapsed before `as_of`
    ///
    /// A failed revocation is logged and counted; it never stops the batch.
    pub async fn sweep_once(&self, as_of: i64) -> Result<SweepReport> {
        let expired = self.store.list_expired(as_of).await?;
        let mut report = SweepReport {
            expired: expired.len(),
            ..SweepReport::default()
        };

        for telegram_id in expired {
            match self.membership.revoke(telegram_id).await {
                Ok(()) => {
                    report.revoked += 1;
                    log_revocation(telegram_id, None);
                }
                Err(e) => {
                    report.failed += 1;
                    log_revocation(telegram_id, Some(&e));
                }
            }
        }

        log_sweep_summary(report.expired, report.revoked, report.failed);
        Ok(report)
    }

    /// Spawn the sweep loop on its own task
    ///
    /// The first sweep runs one full interval after start.
    pub fn start(self) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let period = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        info!("Expiry sweeper stopping");
                        break;
                    }
                    _ = ticker.tick() => {
                        if let Err(e) = self.sweep_once(Utc::now().timestamp()).await {
                            error!(error = %e, severity = %e.severity(), "Expiry sweep failed");
                        }
                    }
                }
            }
        });

        info!("Started expiry sweeper with interval {:?}", period);
        SweeperHandle {
            handle: Some(handle),
            shutdown: Some(shutdown_tx),
        }
    }
}

/// Owner of the running sweep task; dropping it aborts the task
#[derive(Debug)]
pub struct SweeperHandle {
    handle: Option<JoinHandle<()>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl SweeperHandle {
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop after the in-flight sweep, if any, and wait for the task to exit
    pub async fn shutdown(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "Expiry sweeper task ended abnormally");
                }
            }
        }
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Stopped expiry sweeper");
        }
    }
}
