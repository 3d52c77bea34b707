//! Board payload served to the browser at `GET /orders`

use serde::{Deserialize, Serialize};

/// An order waiting at the counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyOrder {
    pub name: String,
    pub number: String,
}

/// An order still being prepared, with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOrder {
    pub name: String,
    pub number: String,
    /// "Just placed", "12 mins", "Almost ready" or "27 mins ago"
    pub status_time: String,
}

/// Orders split by readiness, each list in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBoard {
    pub ready: Vec<ReadyOrder>,
    pub progress: Vec<ProgressOrder>,
}

impl OrderBoard {
    pub fn len(&self) -> usize {
        self.ready.len() + self.progress.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.progress.is_empty()
    }
}
