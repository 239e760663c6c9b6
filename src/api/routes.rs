use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::middleware::auth_middleware;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/save_settings", post(handlers::save_settings))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(protected)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
