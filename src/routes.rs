use axum::routing::{get, post};
use axum::Router;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let max_concurrent = state.config.system_config.max_concurrent_requests;

    Router::new()
        .route(
            "/api/legal-chat",
            post(handlers::legal_chat).fallback(handlers::method_not_allowed),
        )
        .route("/api/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrent))
        .with_state(state)
}
