//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`products`] - product catalog endpoints
//! - [`sheet`] - generic two-column sheet endpoints

pub mod health;
pub mod products;
pub mod sheet;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(sheet::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Re-export common types for handlers
pub use shared::error::AppResult;
