//! Order Board: Toast POS kitchen display
//!
//! Polls a Toast restaurant location for recent orders and serves a
//! ready / in-progress split to a browser display.
//!
//! ## Architecture
//!
//! - **Toast Client**: token cache, order listing and detail fetches
//! - **Classifier**: allow-list admission, staleness and readiness policy
//! - **Pipeline**: per-request fetch → classify → aggregate
//! - **API**: `GET /orders`, `GET /health`, dashboard static files

pub mod api;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod menu_groups;
pub mod pipeline;
pub mod toast;
pub mod types;

// Re-export configuration
pub use config::{AppConfig, ConfigError, ToastConfig};

// Re-export commonly used types
pub use types::{MenuGroup, Order, OrderBoard, ProgressOrder, ReadyOrder, Selection};

// Re-export the classification core
pub use classifier::{classify, Classification, SkipReason};
pub use menu_groups::MenuGroupAllowList;

// Re-export pipeline and upstream client
pub use clock::{Clock, ManualClock, SystemClock};
pub use pipeline::{BoardCoordinator, OrderSource};
pub use toast::{ToastClient, ToastError};
