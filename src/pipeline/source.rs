//! Order source abstraction.
//!
//! The coordinator only needs two upstream operations: list the orders in a
//! time window, then fetch each one. [`crate::toast::ToastClient`] is the
//! production implementation; tests supply in-memory fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::toast::ToastError;
use crate::types::Order;

/// Trait abstracting where orders come from.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
    /// Identifiers of orders created within `[start, end]`, in upstream order.
    ///
    /// A failure here fails the whole board refresh.
    async fn order_ids(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<String>, ToastError>;

    /// Full record for one order. A failure here only drops that order.
    async fn order(&self, id: &str) -> Result<Order, ToastError>;

    /// Human-readable name for logging (e.g. "Toast").
    fn source_name(&self) -> &str;
}
