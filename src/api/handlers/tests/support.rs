use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use base64::Engine;
use serde_json::Value;
use std::path::Path;
use tower::ServiceExt;

use crate::api::{create_router, AppState};
use crate::config::{AuthConfig, BackendConfig, Config, PromptsConfig, ServerConfig};
use crate::llm::LlmProviders;

pub fn test_config(prompts_path: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        auth: AuthConfig {
            username: "admin".to_string(),
            password: "passwort".to_string(),
        },
        prompts: PromptsConfig {
            path: prompts_path.to_path_buf(),
            normalize_output: true,
        },
        openai: None,
        gemini: None,
    }
}

pub fn backend(base_url: String) -> BackendConfig {
    BackendConfig {
        api_key: "test-key".to_string(),
        base_url,
    }
}

pub fn app(config: Config) -> Router {
    let providers = LlmProviders::from_config(&config).unwrap();
    create_router(AppState::new(config, providers))
}

pub fn auth_header() -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode("admin:passwort");
    format!("Basic {}", encoded)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", auth_header())
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, form: &[(&str, &str)]) -> Response {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form.iter())
        .finish();

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", auth_header())
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", auth_header())
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn response_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).expect("parse response json")
}
