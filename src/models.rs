//! Frontend Models
//!
//! Grocery item records, matching the remote document shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single grocery list entry (matches the stored document)
///
/// `quantity` is fixed at 1 on creation and never edited. `checked_at`
/// is set when the item is checked off and cleared when it is unchecked;
/// documents written before the field existed deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub purchased: bool,
    #[serde(rename = "checkedAt", default)]
    pub checked_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
