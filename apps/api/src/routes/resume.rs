//! Résumé endpoints. Every handler reloads the document from disk.

use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;

use crate::counters::{self, API_CALLS};
use crate::errors::AppError;
use crate::resume::{self, load_resume, TrimmedResume};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "resume-api";

pub const ENDPOINTS: &[&str] = &[
    "/resume",
    "/resume.min",
    "/resume.txt",
    "/health",
    "/metrics",
    "/visit",
];

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub service: &'static str,
    pub name: Value,
    pub label: Value,
    pub endpoints: &'static [&'static str],
    pub documentation: String,
}

/// GET /
pub async fn handle_root(
    State(state): State<AppState>,
) -> Result<Json<ServiceDescriptor>, AppError> {
    counters::record(state.counters.as_ref(), API_CALLS).await;
    let doc = load_resume(&state.config.resume_path).await?;

    let basics_field = |key: &str| {
        doc.as_ref()
            .and_then(|d| d.basics_field(key))
            .cloned()
            .unwrap_or(Value::Null)
    };

    Ok(Json(ServiceDescriptor {
        service: SERVICE_NAME,
        name: basics_field("name"),
        label: basics_field("label"),
        endpoints: ENDPOINTS,
        documentation: state.config.documentation_url.clone(),
    }))
}

/// GET /resume
///
/// A missing document answers 200 with `{"error": "resume.json not found"}`.
pub async fn handle_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    counters::record(state.counters.as_ref(), API_CALLS).await;
    let doc = load_resume(&state.config.resume_path).await?;
    Ok(Json(resume::full(doc)))
}

/// GET /resume.min
pub async fn handle_resume_min(
    State(state): State<AppState>,
) -> Result<Json<TrimmedResume>, AppError> {
    counters::record(state.counters.as_ref(), API_CALLS).await;
    let doc = load_resume(&state.config.resume_path).await?;
    Ok(Json(resume::trimmed(doc.as_ref())))
}

/// GET /resume.txt
pub async fn handle_resume_txt(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    counters::record(state.counters.as_ref(), API_CALLS).await;
    let doc = load_resume(&state.config.resume_path).await?;
    let text = resume::plain_text(doc.as_ref())?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
