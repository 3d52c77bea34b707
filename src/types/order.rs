//! Toast order records, as returned by `GET /orders/v2/orders/{id}`
//!
//! Only the fields the board needs are modelled; everything else in the
//! upstream payload is ignored. Every field is optional because the upstream
//! omits or nulls them freely.

use serde::{Deserialize, Serialize};

/// Fulfillment status of a selection the kitchen has finished.
pub const FULFILLMENT_READY: &str = "READY";
/// Fulfillment status of a selection removed from the order.
pub const FULFILLMENT_VOIDED: &str = "VOIDED";
/// Order-level approval status set when front-of-house confirms pickup.
pub const APPROVAL_READY_FOR_PICKUP: &str = "READY_FOR_PICKUP";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub guid: Option<String>,
    /// Short number called out at the counter
    pub display_number: Option<String>,
    /// ISO-8601, e.g. `2024-05-01T14:03:11.123+0000`
    pub created_date: Option<String>,
    pub approval_status: Option<String>,
    pub checks: Option<Vec<Check>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub tab_name: Option<String>,
    pub selections: Option<Vec<Selection>>,
}

/// A line item within a check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub display_name: Option<String>,
    pub item_group: Option<ItemGroup>,
    pub fulfillment_status: Option<String>,
    pub voided: Option<bool>,
}

/// Menu-group reference attached to a selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemGroup {
    pub guid: Option<String>,
    pub multi_location_id: Option<String>,
}

impl Order {
    /// The board only looks at the first check.
    pub fn first_check(&self) -> Option<&Check> {
        self.checks.as_deref().and_then(|checks| checks.first())
    }

    /// Guest tab name, if one was entered.
    pub fn tab_name(&self) -> Option<&str> {
        self.first_check()
            .and_then(|c| c.tab_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn display_number(&self) -> Option<&str> {
        self.display_number.as_deref().filter(|n| !n.is_empty())
    }

    pub fn selections(&self) -> &[Selection] {
        self.first_check()
            .and_then(|c| c.selections.as_deref())
            .unwrap_or(&[])
    }

    pub fn is_ready_for_pickup(&self) -> bool {
        self.approval_status.as_deref() == Some(APPROVAL_READY_FOR_PICKUP)
    }
}

impl Selection {
    pub fn menu_group_id(&self) -> Option<&str> {
        self.item_group
            .as_ref()
            .and_then(|g| g.multi_location_id.as_deref())
    }

    /// Voided either by flag or by fulfillment status.
    pub fn is_voided(&self) -> bool {
        self.voided == Some(true) || self.fulfillment_status.as_deref() == Some(FULFILLMENT_VOIDED)
    }

    pub fn is_ready(&self) -> bool {
        self.fulfillment_status.as_deref() == Some(FULFILLMENT_READY)
    }
}
