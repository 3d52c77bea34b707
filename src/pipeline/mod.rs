//! Board Pipeline Module
//!
//! ```text
//! OrderSource (Toast) ──► BoardCoordinator ──► classifier ──► OrderBoard
//! ```
//!
//! Upstream calls run sequentially; a failed order fetch never aborts the
//! refresh.

mod coordinator;
pub mod source;

pub use coordinator::{BoardCoordinator, RefreshStats};
pub use source::OrderSource;
