use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub resume_path: PathBuf,
    pub database_path: PathBuf,
    pub db_busy_timeout: Duration,
    pub cors_origin: String,
    pub documentation_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            resume_path: PathBuf::from(env_or("RESUME_PATH", "resume.json")),
            database_path: PathBuf::from(env_or(
                "DATABASE_PATH",
                "/var/lib/resume-api/metrics.db",
            )),
            db_busy_timeout: Duration::from_secs(
                env_or("DB_BUSY_TIMEOUT_SECS", "5")
                    .parse::<u64>()
                    .context("DB_BUSY_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            cors_origin: env_or("CORS_ORIGIN", "https://docs.dealapiops.dev"),
            documentation_url: env_or("DOCUMENTATION_URL", "https://docs.dealapiops.dev"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
