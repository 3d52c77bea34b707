//! API route definitions
//!
//! - /orders - order board JSON
//! - /health - liveness check

use axum::{routing::get, Router};

use super::handlers::{self, BoardState};

/// Create all board routes
pub fn board_routes(state: BoardState) -> Router {
    Router::new()
        .route("/orders", get(handlers::get_orders))
        .route("/health", get(handlers::get_health))
        .with_state(state)
}
