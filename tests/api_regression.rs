//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the board endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port, no Toast credentials.

use order_board::api::{create_app, BoardState};
use order_board::toast::timestamp;
use order_board::types::{Check, ItemGroup};
use order_board::{
    BoardCoordinator, ManualClock, MenuGroupAllowList, Order, OrderSource, Selection, ToastError,
};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

const BREAKFAST: &str = "900000005197891538";
const LUNCH: &str = "900000005197890750";
const GIFT_CARDS: &str = "123456789";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn selection(group: &str, status: &str) -> Selection {
    Selection {
        item_group: Some(ItemGroup {
            multi_location_id: Some(group.to_string()),
            ..Default::default()
        }),
        fulfillment_status: Some(status.to_string()),
        voided: Some(false),
        ..Default::default()
    }
}

fn order(number: &str, name: Option<&str>, age_mins: i64, selections: Vec<Selection>) -> Order {
    Order {
        display_number: Some(number.to_string()),
        created_date: Some(timestamp::format(now() - Duration::minutes(age_mins))),
        checks: Some(vec![Check {
            tab_name: name.map(str::to_string),
            selections: Some(selections),
        }]),
        ..Default::default()
    }
}

/// Serves a fixed listing; IDs without a record fail to fetch.
struct FixtureSource {
    listing: Option<Vec<String>>,
    orders: HashMap<String, Order>,
}

#[async_trait]
impl OrderSource for FixtureSource {
    async fn order_ids(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<String>, ToastError> {
        self.listing.clone().ok_or(ToastError::Upstream {
            endpoint: "/orders/v2/orders".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        })
    }

    async fn order(&self, id: &str) -> Result<Order, ToastError> {
        self.orders.get(id).cloned().ok_or(ToastError::Upstream {
            endpoint: format!("/orders/v2/orders/{id}"),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        })
    }

    fn source_name(&self) -> &str {
        "fixture"
    }
}

/// A lunch rush: one of everything the board has to handle.
fn lunch_rush() -> FixtureSource {
    let mut pickup = order("105", Some("Robin"), 12, vec![selection(LUNCH, "VOIDED")]);
    pickup.approval_status = Some("READY_FOR_PICKUP".to_string());

    let orders = vec![
        ("o1", order("101", Some("Alex"), 10, vec![selection(BREAKFAST, "READY")])),
        ("o2", order("102", None, 1, vec![selection(LUNCH, "SENT")])),
        ("o3", order("103", Some("Kim"), 16, vec![selection(LUNCH, "HOLD")])),
        ("o4", order("104", Some("Lee"), 25, vec![selection(BREAKFAST, "SENT")])),
        ("o5", pickup),
        ("o6", order("106", Some("Gift"), 2, vec![selection(GIFT_CARDS, "SENT")])),
        ("o7", order("107", Some("Old"), 50, vec![selection(BREAKFAST, "SENT")])),
    ];

    FixtureSource {
        listing: Some(
            ["o1", "o2", "broken", "o3", "o4", "o5", "o6", "o7"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        orders: orders
            .into_iter()
            .map(|(id, o)| (id.to_string(), o))
            .collect(),
    }
}

fn create_test_app(source: FixtureSource, static_dir: &Path) -> Router {
    let coordinator = BoardCoordinator::new(
        Arc::new(source),
        MenuGroupAllowList::default(),
        Arc::new(ManualClock::new(now())),
        Duration::minutes(60),
    );
    create_app(BoardState::new(coordinator), static_dir)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, bytes.to_vec())
}

/// GET /orders returns the ready / progress split with exact labels.
#[tokio::test]
async fn test_orders_board_shape_and_labels() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(lunch_rush(), dir.path());

    let (status, content_type, body) = get(app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));

    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        v["ready"],
        serde_json::json!([
            {"name": "Alex", "number": "101"},
            {"name": "Robin", "number": "105"},
        ])
    );
    assert_eq!(
        v["progress"],
        serde_json::json!([
            {"name": "Guest", "number": "102", "statusTime": "Just placed"},
            {"name": "Kim", "number": "103", "statusTime": "Almost ready"},
            {"name": "Lee", "number": "104", "statusTime": "25 mins ago"},
        ])
    );
}

/// A listing failure is a whole-request failure with a plain-text body.
#[tokio::test]
async fn test_orders_listing_failure_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixtureSource {
        listing: None,
        orders: HashMap::new(),
    };
    let app = create_test_app(source, dir.path());

    let (status, content_type, body) = get(app, "/orders").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, b"Error fetching orders");
}

/// Every detail fetch failing still yields an empty, successful board.
#[tokio::test]
async fn test_orders_all_details_failing_is_empty_board() {
    let dir = tempfile::tempdir().unwrap();
    let source = FixtureSource {
        listing: Some(vec!["x".to_string(), "y".to_string()]),
        orders: HashMap::new(),
    };
    let app = create_test_app(source, dir.path());

    let (status, _, body) = get(app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v, serde_json::json!({"ready": [], "progress": []}));
}

#[tokio::test]
async fn test_health_returns_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(lunch_rush(), dir.path());

    let (status, _, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["menu_groups"], 11);
}

/// Non-API paths are served from the dashboard directory.
#[tokio::test]
async fn test_dashboard_files_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Orders</h1>").unwrap();
    std::fs::write(dir.path().join("board.js"), "poll('/orders');").unwrap();

    let (status, content_type, body) = get(create_test_app(lunch_rush(), dir.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, b"<h1>Orders</h1>");

    let (status, _, body) = get(create_test_app(lunch_rush(), dir.path()), "/board.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"poll('/orders');");

    let (status, _, _) = get(create_test_app(lunch_rush(), dir.path()), "/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Dotfiles in the dashboard directory (the default is the working
/// directory, where `.env` lives) are never served.
#[tokio::test]
async fn test_dotfiles_not_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "TOAST_CLIENT_SECRET=hunter2\n").unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join(".git").join("config"), "[core]").unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Orders</h1>").unwrap();

    for uri in ["/.env", "/%2Eenv", "/.git/config"] {
        let (status, _, body) = get(create_test_app(lunch_rush(), dir.path()), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(!String::from_utf8_lossy(&body).contains("hunter2"), "{uri}");
    }

    let (status, _, _) = get(create_test_app(lunch_rush(), dir.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
}
