use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::llm::ChatBackend;

#[derive(Debug, Serialize, PartialEq)]
pub struct BackendStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BackendsStatus {
    pub openai: BackendStatus,
    pub gemini: BackendStatus,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backends: BackendsStatus,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let providers = state.generator.providers();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backends: BackendsStatus {
            openai: compute_backend_status(&providers.primary),
            gemini: compute_backend_status(&providers.secondary),
        },
    })
}

// Separated helper so tests can exercise it without a running router
pub fn compute_backend_status(backend: &Option<Arc<dyn ChatBackend>>) -> BackendStatus {
    match backend {
        Some(backend) => BackendStatus {
            status: "available".to_string(),
            model: Some(backend.model_name().to_string()),
        },
        None => BackendStatus {
            status: "unavailable".to_string(),
            model: None,
        },
    }
}
