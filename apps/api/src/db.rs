use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::info;

const MAX_CONNECTIONS: u32 = 4;

/// Opens (creating if needed) the SQLite metrics database and ensures the
/// counter table exists.
pub async fn create_pool(database_path: &Path, busy_timeout: Duration) -> Result<SqlitePool> {
    info!("Opening SQLite database at {}", database_path.display());

    if let Some(parent) = database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open database: {}", database_path.display()))?;

    run_migrations(&pool).await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS counters (
            key   TEXT PRIMARY KEY,
            value INTEGER NOT NULL CHECK (value >= 0)
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create counters table")?;

    Ok(())
}
