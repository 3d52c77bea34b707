//! Menu-group allow-list
//!
//! An order reaches the board only if at least one of its selections belongs
//! to an allowed menu group. Groups are matched on their cross-location
//! identifier (`multiLocationId`), not the per-restaurant GUID.

use std::collections::HashSet;

use crate::types::Selection;

/// Kitchen menu groups shown on the board by default, with their POS names.
pub const DEFAULT_MENU_GROUPS: &[(&str, &str)] = &[
    ("900000005197891538", "Breakfast"),
    ("900000005197890750", "Lunch and Dinner"),
    ("900000005197893437", "Specials"),
    ("900000005197891749", "Oatmeal"),
    ("900000005197891915", "Bacon"),
    ("900000005197891715", "Toast"),
    ("900000005197890752", "Burgers and Sandwiches"),
    ("900000005197890902", "Crispy Sides"),
    ("900000005197890930", "Entrees, Baskets and Meat"),
    ("900000005197891170", "Salads and cold food"),
    // Listed for both "Misc" and "Eggs and Omelets" in the POS export
    ("900000005197891160", "Misc"),
    ("900000005197891160", "Eggs and Omelets"),
];

/// Set of admitted menu-group identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroupAllowList {
    ids: HashSet<String>,
}

impl Default for MenuGroupAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_GROUPS.iter().map(|(id, _)| *id))
    }
}

impl MenuGroupAllowList {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated list, ignoring blanks and surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(',').map(str::trim).filter(|id| !id.is_empty()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether the selection's menu group is on the list.
    pub fn admits(&self, selection: &Selection) -> bool {
        selection
            .menu_group_id()
            .is_some_and(|id| self.contains(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in sorted order, for stable log output.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
