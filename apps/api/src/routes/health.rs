use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::counters::{self, API_CALLS};
use crate::state::AppState;

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    counters::record(state.counters.as_ref(), API_CALLS).await;
    Json(json!({ "status": "ok" }))
}
