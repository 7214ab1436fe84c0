use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CounterStore, StorageError};

/// Process-local counter store for tests. Never fails.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    values: Mutex<HashMap<String, i64>>,
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(&self, key: &str, amount: u32) -> Result<(), StorageError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        *values.entry(key.to_string()).or_insert(0) += i64::from(amount);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<i64, StorageError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).copied().unwrap_or(0))
    }
}
