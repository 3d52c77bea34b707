//! Board Coordinator - fetch, classify, aggregate
//!
//! ```text
//! STEP 1: List order IDs in [now - lookback, now]   (failure aborts)
//! STEP 2: Fetch each order's detail, one at a time  (failure skips the order)
//! STEP 3: Classify against the menu-group allow-list
//! STEP 4: Append to `ready` or `progress` in fetch order
//! ```

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use super::source::OrderSource;
use crate::classifier::{classify, Classification};
use crate::clock::Clock;
use crate::menu_groups::MenuGroupAllowList;
use crate::toast::ToastError;
use crate::types::OrderBoard;

/// Counters from one board refresh, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub listed: usize,
    pub fetch_failures: usize,
    pub skipped: usize,
    pub ready: usize,
    pub progress: usize,
}

/// Builds the order board on demand.
pub struct BoardCoordinator {
    source: Arc<dyn OrderSource>,
    allow_list: MenuGroupAllowList,
    clock: Arc<dyn Clock>,
    lookback: Duration,
}

impl BoardCoordinator {
    pub fn new(
        source: Arc<dyn OrderSource>,
        allow_list: MenuGroupAllowList,
        clock: Arc<dyn Clock>,
        lookback: Duration,
    ) -> Self {
        Self {
            source,
            allow_list,
            clock,
            lookback,
        }
    }

    /// Build the board as of the current clock reading.
    pub async fn refresh(&self) -> Result<OrderBoard, ToastError> {
        let (board, _) = self.refresh_at(self.clock.now()).await?;
        Ok(board)
    }

    /// Build the board as of `now`, also returning refresh counters.
    pub async fn refresh_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<(OrderBoard, RefreshStats), ToastError> {
        let start = now
            .checked_sub_signed(self.lookback)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let ids = self.source.order_ids(start, now).await?;

        let mut stats = RefreshStats {
            listed: ids.len(),
            ..Default::default()
        };
        info!(
            source = self.source.source_name(),
            count = ids.len(),
            "Found order IDs"
        );

        let mut board = OrderBoard::default();
        for id in &ids {
            let order = match self.source.order(id).await {
                Ok(order) => order,
                Err(e) => {
                    warn!(order_id = %id, error = %e, "Error fetching order details, skipping");
                    stats.fetch_failures += 1;
                    continue;
                }
            };

            match classify(&order, &self.allow_list, now) {
                Classification::Ready(entry) => {
                    debug!(order_id = %id, number = %entry.number, "Order ready");
                    board.ready.push(entry);
                }
                Classification::InProgress(entry) => {
                    debug!(
                        order_id = %id,
                        number = %entry.number,
                        status = %entry.status_time,
                        "Order in progress"
                    );
                    board.progress.push(entry);
                }
                Classification::Skipped(reason) => {
                    debug!(
                        order_id = %id,
                        number = order.display_number().unwrap_or("-"),
                        %reason,
                        "Order skipped"
                    );
                    stats.skipped += 1;
                }
            }
        }

        stats.ready = board.ready.len();
        stats.progress = board.progress.len();
        info!(
            ready = stats.ready,
            progress = stats.progress,
            skipped = stats.skipped,
            fetch_failures = stats.fetch_failures,
            "Order board refreshed"
        );

        Ok((board, stats))
    }

    pub fn allow_list(&self) -> &MenuGroupAllowList {
        &self.allow_list
    }
}
