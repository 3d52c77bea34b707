//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// HTTP Server
// ============================================================================

/// Bind address for the order board server.
pub const SERVER_ADDR: &str = "0.0.0.0:3000";

/// Directory served as the dashboard (HTML/JS/CSS).
pub const STATIC_DIR: &str = ".";

// ============================================================================
// Toast API
// ============================================================================

/// How far back the order listing window reaches (minutes).
pub const LOOKBACK_MINUTES: i64 = 60;

/// Upper bound for a configured lookback (one week).
pub const MAX_LOOKBACK_MINUTES: i64 = 7 * 24 * 60;

/// Page size requested from the order listing endpoint.
pub const ORDER_PAGE_SIZE: u32 = 50;

/// Per-request timeout for upstream calls (seconds).
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Cached access tokens are treated as expired this long before the
/// upstream-reported expiry (seconds).
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Access type sent with the client-credentials login.
pub const USER_ACCESS_TYPE: &str = "TOAST_MACHINE_CLIENT";

/// Header carrying the restaurant/location identifier on authenticated calls.
pub const RESTAURANT_HEADER: &str = "Toast-Restaurant-External-ID";

// ============================================================================
// Classification
// ============================================================================

/// Orders older than this are dropped from the board entirely (minutes).
pub const STALE_AFTER_MINUTES: i64 = 35;

/// Nominal kitchen preparation window (minutes).
pub const PREP_WINDOW_MINUTES: i64 = 20;

/// Remaining minutes above which an order is shown as "Just placed".
pub const JUST_PLACED_ABOVE_MINUTES: i64 = 18;

/// Remaining minutes at or below which an order is shown as "Almost ready".
pub const ALMOST_READY_MINUTES: i64 = 5;

/// Name shown when an order carries no tab name.
pub const GUEST_NAME: &str = "Guest";
