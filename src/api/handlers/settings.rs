use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::error::Result;
use crate::prompts::PromptDocument;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct SaveSettingsResponse {
    pub status: SaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Replaces the whole prompt document with the request body. Parse and
/// write failures are reported in the response body, never as an HTTP error.
pub async fn save_settings(State(state): State<AppState>, body: Bytes) -> Json<SaveSettingsResponse> {
    match persist(&state, &body).await {
        Ok(()) => Json(SaveSettingsResponse {
            status: SaveStatus::Success,
            message: None,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Saving prompt settings failed");
            Json(SaveSettingsResponse {
                status: SaveStatus::Error,
                message: Some(e.to_string()),
            })
        }
    }
}

async fn persist(state: &AppState, body: &[u8]) -> Result<()> {
    let document: PromptDocument = serde_json::from_slice(body)?;
    state.store.save(&document).await
}
