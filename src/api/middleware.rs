use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::Engine;
use serde_json::json;
use sha2::{Digest, Sha256};

use super::AppState;

/// Compares two secrets without an early exit. Both sides are hashed first
/// so neither the mismatch position nor the length difference shows up in
/// the running time.
fn secure_eq(provided: &str, expected: &str) -> bool {
    let provided = Sha256::digest(provided.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());

    provided
        .iter()
        .zip(expected.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Extracts `(username, password)` from an `Authorization: Basic` header.
fn basic_credentials(request: &Request<Body>) -> Option<(String, String)> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic")],
        Json(json!({ "error": "Zugriff verweigert" })),
    )
        .into_response()
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let credentials = basic_credentials(&request);
    let present = credentials.is_some();
    let (username, password) = credentials.unwrap_or_default();

    // Both comparisons always run, even when the header was missing
    let user_ok = secure_eq(&username, &state.config.auth.username);
    let pass_ok = secure_eq(&password, &state.config.auth.password);

    if present & user_ok & pass_ok {
        next.run(request).await
    } else {
        tracing::debug!(path = %request.uri().path(), "Rejected request without valid credentials");
        unauthorized()
    }
}
