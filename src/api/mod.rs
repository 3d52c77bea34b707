//! REST API module using Axum
//!
//! Provides HTTP endpoints for the order board display:
//! - `GET /orders` with the ready / in-progress split
//! - `GET /health`
//! - Dashboard HTML/JS/CSS served from a directory for every other path,
//!   dotfiles excluded

pub mod handlers;
mod middleware;
mod routes;

pub use handlers::BoardState;

use std::path::Path;

use axum::http::{header, Method};
use axum::{middleware as axum_mw, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `ORDER_BOARD_CORS_ORIGINS` to a comma-separated list of allowed
/// origins when the display is hosted elsewhere.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var("ORDER_BOARD_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        // No cross-origin allowed; the dashboard is same-origin
        Err(_) => base,
    }
}

/// Create the complete application router with API and dashboard serving.
pub fn create_app(state: BoardState, static_dir: &Path) -> Router {
    Router::new()
        .merge(routes::board_routes(state))
        // Dashboard assets for any unmatched path
        .fallback_service(ServeDir::new(static_dir))
        // Middleware
        .layer(axum_mw::from_fn(middleware::reject_hidden_paths))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer())
}
