use crate::handlers::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builds the HTTP surface around an already-loaded state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/leads", post(handlers::create_lead))
        .route("/publish/ideasoft", post(handlers::publish_ideasoft))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
