//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Handle to a running reaper: the stop signal plus the task itself.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper and waits for it to exit.
    ///
    /// A sweep already holding the lock finishes before the task observes
    /// the signal; no further sweep starts afterwards.
    pub async fn stop(self) {
        // The receiver is gone only if the task already exited.
        let _ = self.shutdown.send(());

        if let Err(e) = self.task.await {
            warn!("Reaper task ended abnormally: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a background task that sweeps `store` once per `interval`.
///
/// The first sweep runs at `first_sweep`, normally one `interval` from now. Each sweep takes
/// the store lock and deletes entries whose age is strictly greater than
/// `interval`, so an entry can live for just under two intervals when it
/// is added right after a sweep.
///
/// The task exits when the returned handle is stopped or dropped.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let interval = Duration::from_secs(60);
/// let reaper = spawn_reaper_task(store.clone(), Instant::now() + interval, interval);
/// // Later, during shutdown:
/// reaper.stop().await;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    first_sweep: Instant,
    interval: Duration,
) -> ReaperHandle {
    let (shutdown, mut stop_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        let mut ticker = tokio::time::interval_at(first_sweep, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                // Fires on an explicit stop and when the sender is dropped
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.reap(Instant::now(), interval)
                    };

                    if removed > 0 {
                        info!("Cache reaper: removed {} stale entries", removed);
                    } else {
                        debug!("Cache reaper: no stale entries found");
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    });

    ReaperHandle { shutdown, task }
}
