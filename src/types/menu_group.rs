//! Menu groups, as returned by `GET /config/v2/menuGroups`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub name: Option<String>,
    pub guid: Option<String>,
    pub multi_location_id: Option<String>,
}
