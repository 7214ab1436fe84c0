use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::counters::{self, API_CALLS, SITE_VISITS};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub site_visits: i64,
    pub api_calls: i64,
}

/// GET /metrics
///
/// The call being served is counted before the values are read.
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, AppError> {
    let store = state.counters.as_ref();
    counters::record(store, API_CALLS).await;

    Ok(Json(MetricsResponse {
        site_visits: store.get(SITE_VISITS).await?,
        api_calls: store.get(API_CALLS).await?,
    }))
}

/// GET /visit
pub async fn visit_handler(State(state): State<AppState>) -> Json<Value> {
    let store = state.counters.as_ref();
    counters::record(store, SITE_VISITS).await;
    counters::record(store, API_CALLS).await;
    Json(json!({ "status": "counted" }))
}
