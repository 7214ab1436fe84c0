use std::sync::Arc;

use crate::config::Config;
use crate::counters::CounterStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Usage counters. SQLite in production; tests inject an in-memory store.
    pub counters: Arc<dyn CounterStore>,
    pub config: Config,
}
