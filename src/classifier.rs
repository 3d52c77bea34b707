//! Order classification
//!
//! Decides, for one fetched order, whether it appears on the board and in
//! which column:
//!
//! 1. No display number, or no selection in an allowed menu group → skipped
//! 2. Older than [`STALE_AFTER_MINUTES`] → skipped
//! 3. Every allowed, non-voided selection READY (and at least one exists), or
//!    the order approved `READY_FOR_PICKUP` → ready
//! 4. Otherwise → in progress, labelled from the minutes left in the
//!    [`PREP_WINDOW_MINUTES`] preparation window
//!
//! The current time is a parameter so classification is deterministic.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::config::defaults::{
    ALMOST_READY_MINUTES, GUEST_NAME, JUST_PLACED_ABOVE_MINUTES, PREP_WINDOW_MINUTES,
    STALE_AFTER_MINUTES,
};
use crate::menu_groups::MenuGroupAllowList;
use crate::toast::timestamp;
use crate::types::{Order, ProgressOrder, ReadyOrder};

/// Where an order lands on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Ready(ReadyOrder),
    InProgress(ProgressOrder),
    Skipped(SkipReason),
}

/// Why an order was left off the board. Only ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoDisplayNumber,
    NoAllowedMenuGroup,
    MissingCreatedDate,
    InvalidCreatedDate,
    Stale { age_minutes: i64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDisplayNumber => write!(f, "no display number"),
            Self::NoAllowedMenuGroup => write!(f, "no allowed menu group"),
            Self::MissingCreatedDate => write!(f, "missing created date"),
            Self::InvalidCreatedDate => write!(f, "unparseable created date"),
            Self::Stale { age_minutes } => write!(f, "stale ({age_minutes} mins old)"),
        }
    }
}

/// Classify one order against the allow-list at instant `now`.
pub fn classify(order: &Order, allowed: &MenuGroupAllowList, now: DateTime<Utc>) -> Classification {
    let Some(number) = order.display_number() else {
        return Classification::Skipped(SkipReason::NoDisplayNumber);
    };

    let selections = order.selections();
    if !selections.iter().any(|s| allowed.admits(s)) {
        return Classification::Skipped(SkipReason::NoAllowedMenuGroup);
    }

    let created = match order.created_date.as_deref() {
        None => return Classification::Skipped(SkipReason::MissingCreatedDate),
        Some(raw) => match timestamp::parse(raw) {
            Some(created) => created,
            None => return Classification::Skipped(SkipReason::InvalidCreatedDate),
        },
    };

    let age = age_minutes(created, now);
    if age > STALE_AFTER_MINUTES {
        return Classification::Skipped(SkipReason::Stale { age_minutes: age });
    }

    let mut valid = selections
        .iter()
        .filter(|s| allowed.admits(s) && !s.is_voided())
        .peekable();
    let items_ready = valid.peek().is_some() && valid.all(|s| s.is_ready());

    let name = order.tab_name().unwrap_or(GUEST_NAME).to_string();
    let number = number.to_string();

    if items_ready || order.is_ready_for_pickup() {
        Classification::Ready(ReadyOrder { name, number })
    } else {
        Classification::InProgress(ProgressOrder {
            name,
            number,
            status_time: status_label(age),
        })
    }
}

/// Whole minutes between `created` and `now`, rounding half-minutes up.
pub fn age_minutes(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed_ms = (now - created).num_milliseconds();
    (elapsed_ms + 30_000).div_euclid(60_000)
}

/// Display label for an order still in preparation.
pub fn status_label(age_minutes: i64) -> String {
    let mins_left = PREP_WINDOW_MINUTES - age_minutes;
    if mins_left <= 0 {
        format!("{age_minutes} mins ago")
    } else if mins_left > JUST_PLACED_ABOVE_MINUTES {
        "Just placed".to_string()
    } else if mins_left <= ALMOST_READY_MINUTES {
        "Almost ready".to_string()
    } else {
        format!("{mins_left} mins")
    }
}
