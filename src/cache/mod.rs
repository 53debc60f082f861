//! Cache Module
//!
//! In-memory TTL cache for HTTP response bodies, keyed by request URL.
//!
//! A [`Cache`] owns its entry map behind one exclusive lock and runs a single
//! background reaper that sweeps stale entries once per interval. Lookups
//! never extend an entry's lifetime; only a re-add does.

mod entry;
mod stats;
mod store;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::CacheError;
use crate::tasks::{spawn_reaper_task, ReaperHandle};

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Cache ==
/// TTL cache with autonomous background expiration.
///
/// An entry added at time `t` is removed by the first sweep that sees it older
/// than `interval`, which happens somewhere between `t + interval` and
/// `t + 2 * interval` depending on where `t` falls between two sweeps.
///
/// Dropping the cache without calling [`Cache::stop`] closes the stop channel,
/// so the reaper still exits on its next wake-up.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    reaper: Mutex<Option<ReaperHandle>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a Tokio runtime. Does not wait for the
    /// reaper to start.
    ///
    /// # Errors
    /// - `CacheError::InvalidInterval` if `interval` is zero, or so large the
    ///   first sweep deadline overflows the clock
    /// - `CacheError::NoRuntime` if no Tokio runtime is available
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }
        tokio::runtime::Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let first_sweep = Instant::now()
            .checked_add(interval)
            .ok_or(CacheError::InvalidInterval(interval))?;

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reaper_task(store.clone(), first_sweep, interval);
        info!("Cache created with interval {:?}", interval);

        Ok(Self {
            store,
            interval,
            reaper: Mutex::new(Some(reaper)),
        })
    }

    // == Add ==
    /// Inserts or overwrites `key`, resetting its expiry clock.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!("cache add: {} ({} bytes)", key, value.len());

        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Looks up `key`. `None` is a miss: never added, or already reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.store.lock().await.get(key);
        debug!(
            "cache {}: {}",
            if value.is_some() { "hit" } else { "miss" },
            key
        );
        value
    }

    // == Stop ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Stored entries are left in place and stay readable; they are simply
    /// never reaped again. A sweep in progress completes first.
    ///
    /// # Errors
    /// - `CacheError::AlreadyStopped` on any call after the first
    pub async fn stop(&self) -> Result<(), CacheError> {
        let reaper = self.reaper.lock().await.take();
        match reaper {
            Some(reaper) => {
                reaper.stop().await;
                info!("Cache stopped");
                Ok(())
            }
            None => Err(CacheError::AlreadyStopped),
        }
    }

    /// The fixed sweep period and staleness threshold.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}
