//! JSON API routes
//!
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/config` - Client configuration (auth URLs, default theme)
//! - `GET /api/session` - Session view for the navigation bar

use axum::{Router, routing::get};
use plantventory_core::routes::api;

use crate::state::AppState;

pub mod config;
pub mod health;
pub mod session;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(api::HEALTH, get(health::health_check))
        .route(api::CONFIG, get(config::client_config))
        .route(api::SESSION, get(session::current_session))
        .with_state(state)
}
