//! API middleware layers.
//!
//! Keeps hidden files (`.env`, `.git/...`) in the dashboard directory from
//! being served.

use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// True if any path segment names a dotfile, including percent-encoded dots.
fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.')
            || segment
                .get(..3)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}

/// Axum middleware that answers 404 for dotfile paths before they reach
/// the static file service.
pub async fn reject_hidden_paths(request: axum::extract::Request, next: Next) -> Response {
    if is_hidden_path(request.uri().path()) {
        tracing::warn!(path = %request.uri().path(), "Refused hidden path");
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::middleware;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    #[test]
    fn test_hidden_segments_detected() {
        assert!(is_hidden_path("/.env"));
        assert!(is_hidden_path("/.git/config"));
        assert!(is_hidden_path("/assets/.secret"));
        assert!(is_hidden_path("/%2Eenv"));
        assert!(is_hidden_path("/%2e%2e/etc/passwd"));
        assert!(!is_hidden_path("/"));
        assert!(!is_hidden_path("/orders"));
        assert!(!is_hidden_path("/board.v2.js"));
    }

    #[tokio::test]
    async fn test_hidden_path_returns_404() {
        let app = Router::new()
            .route("/.env", get(|| async { "secret" }))
            .route("/orders", get(|| async { "ok" }))
            .layer(middleware::from_fn(reject_hidden_paths));

        let resp = app
            .clone()
            .oneshot(Request::get("/.env").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = app
            .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
