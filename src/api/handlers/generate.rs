use axum::{extract::State, Form, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::error::Result;
use crate::generation::GenerationRequest;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

pub async fn generate(
    State(state): State<AppState>,
    Form(req): Form<GenerationRequest>,
) -> Result<Json<GenerateResponse>> {
    let prompts = state.store.load().await?;
    let result = state.generator.generate(&prompts, &req).await;

    Ok(Json(GenerateResponse { result }))
}
