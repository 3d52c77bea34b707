//! HTTP request handlers for the order board

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::pipeline::BoardCoordinator;

/// Plain-text body returned whenever the board cannot be built.
pub const FETCH_ERROR_BODY: &str = "Error fetching orders";

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardState {
    pub coordinator: Arc<BoardCoordinator>,
}

impl BoardState {
    pub fn new(coordinator: BoardCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }
}

/// GET /orders - ready and in-progress orders for the display
pub async fn get_orders(State(state): State<BoardState>) -> Response {
    match state.coordinator.refresh().await {
        Ok(board) => Json(board).into_response(),
        Err(e) => {
            match e.status() {
                Some(status) => error!(error = %e, upstream_status = %status, "Error fetching orders"),
                None => error!(error = %e, "Error fetching orders"),
            }
            (StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_BODY).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub menu_groups: usize,
}

/// GET /health - liveness only; does not call upstream
pub async fn get_health(State(state): State<BoardState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        menu_groups: state.coordinator.allow_list().len(),
    })
}
