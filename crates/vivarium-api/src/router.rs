//! Axum router construction for the care API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for the web client and request tracing for operators.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the care API.
///
/// CORS is configured to allow any origin for development. In production
/// this should be restricted to the client origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/pets", post(handlers::create_pet).get(handlers::list_pets))
        .route("/api/pets/active", get(handlers::active_pet))
        .route("/api/pets/{id}", get(handlers::get_pet))
        .route("/api/pets/{id}/activate", post(handlers::activate_pet))
        .route("/api/pets/{id}/feed", post(handlers::feed_pet))
        .route("/api/pets/{id}/pet", post(handlers::pet_pet))
        .route("/api/pets/{id}/play", post(handlers::play_with_pet))
        .route("/api/pets/{id}/sleep", post(handlers::sleep_pet))
        .route("/api/pets/{id}/wake", post(handlers::wake_pet))
        .route("/api/pets/{id}/item", post(handlers::use_item))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
