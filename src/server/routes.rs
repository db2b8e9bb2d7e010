// src/server/routes.rs
//! Axum router configuration for the recipe server

use crate::server::ServerState;
use crate::server::handlers::{api, pages};
use axum::{
    Router,
    http::Method,
    routing::get,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    // Read-only API, any origin may fetch it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);

    let api_routes: Router<Arc<ServerState>> = Router::new()
        .route("/api/v1/recipes", get(api::list_recipes))
        .route("/api/v1/:id", get(api::get_recipe))
        .layer(cors);

    // Static segments win over `/:id` when matching
    let page_routes: Router<Arc<ServerState>> = Router::new()
        .route("/", get(pages::index))
        .route("/random", get(pages::random))
        .route("/categories/:title", get(pages::category))
        .route("/:id", get(pages::recipe));

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes)
        .merge(page_routes)
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
