use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("Prompt store error: {0}")]
    PromptStore(#[from] std::io::Error),

    #[error("Invalid prompt document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("{0}")]
    Llm(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;

impl DeskError {
    fn status_code(&self) -> StatusCode {
        match self {
            DeskError::Llm(_) | DeskError::Http(_) => StatusCode::BAD_GATEWAY,
            DeskError::PromptStore(_) | DeskError::InvalidDocument(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(error = %self, status = %status, "Request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
