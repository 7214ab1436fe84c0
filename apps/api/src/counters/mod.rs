//! Counter Store — durable, monotonically increasing usage counters.
//!
//! Handlers only see `Arc<dyn CounterStore>`; the SQLite backend lives in
//! `sqlite`, and tests swap in `MemoryCounterStore`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[cfg(test)]
pub mod memory;
pub mod sqlite;

#[cfg(test)]
pub use memory::MemoryCounterStore;
pub use sqlite::SqliteCounterStore;

pub const SITE_VISITS: &str = "site_visits";
pub const API_CALLS: &str = "api_calls";

/// The storage layer could not be reached, or stayed locked past the busy timeout.
#[derive(Debug, Error)]
#[error("Counter storage unavailable: {0}")]
pub struct StorageError(#[from] sqlx::Error);

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Adds `amount` to `key`, creating it at 0 first if it has never been seen.
    /// All-or-nothing: a failed or cancelled call leaves the value untouched.
    async fn increment(&self, key: &str, amount: u32) -> Result<(), StorageError>;

    /// Current value of `key`; 0 for keys that were never incremented.
    async fn get(&self, key: &str) -> Result<i64, StorageError>;
}

/// Bumps `key` by one for analytics. Failures are logged and dropped so a
/// broken counter never takes a response down with it.
pub async fn record(store: &dyn CounterStore, key: &str) {
    if let Err(e) = store.increment(key, 1).await {
        warn!(counter = key, "Failed to record counter: {e}");
    }
}
