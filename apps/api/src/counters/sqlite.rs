use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::{CounterStore, StorageError};

/// Counter store backed by the `counters` table.
///
/// Each increment is a single upsert statement, so SQLite serialises
/// concurrent writers on the same key instead of interleaving a read and a
/// write. Writers that find the database locked wait up to the pool's busy
/// timeout and then fail with `StorageError`.
#[derive(Clone)]
pub struct SqliteCounterStore {
    pool: SqlitePool,
}

impl SqliteCounterStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterStore for SqliteCounterStore {
    async fn increment(&self, key: &str, amount: u32) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO counters (key, value) VALUES (?1, ?2)
            ON CONFLICT (key) DO UPDATE SET value = value + excluded.value
            "#,
        )
        .bind(key)
        .bind(i64::from(amount))
        .execute(&self.pool)
        .await?;

        debug!(counter = key, amount, "Counter incremented");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<i64, StorageError> {
        let value: Option<i64> = sqlx::query_scalar("SELECT value FROM counters WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value.unwrap_or(0))
    }
}
