use crate::order::Order;
use crate::types::Status;
use serde::{Deserialize, Serialize};

/// Filter criteria for a view of the order table.
///
/// Criteria combine with AND; the set criteria (`warehouses`, `statuses`,
/// `priorities`) are OR within themselves, and an empty set means no
/// restriction. Date bounds compare the ISO `DueDate` string
/// lexicographically, inclusive on both ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    #[serde(default)]
    pub warehouses: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(default)]
    pub priorities: Vec<String>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub date_from: String,
    #[serde(default)]
    pub date_to: String,
}

impl OrderFilter {
    /// Restrict to a single warehouse (the per-warehouse dashboard views).
    pub fn for_warehouse(warehouse: impl Into<String>) -> Self {
        Self {
            warehouses: vec![warehouse.into()],
            ..Self::default()
        }
    }

    /// Return the rows matching every supplied criterion. Pure: the input
    /// table is untouched and the result is a fresh copy.
    pub fn apply(&self, table: &[Order]) -> Vec<Order> {
        let needle = self.search.trim().to_lowercase();
        table
            .iter()
            .filter(|o| self.warehouses.is_empty() || self.warehouses.contains(&o.warehouse))
            .filter(|o| self.statuses.is_empty() || self.statuses.contains(&o.status))
            .filter(|o| self.priorities.is_empty() || self.priorities.contains(&o.priority))
            .filter(|o| needle.is_empty() || row_haystack(o).contains(&needle))
            .filter(|o| self.date_from.is_empty() || o.due_date.as_str() >= self.date_from.as_str())
            .filter(|o| self.date_to.is_empty() || o.due_date.as_str() <= self.date_to.as_str())
            .cloned()
            .collect()
    }
}

/// Full-row scan target: every field value space-joined, lowercased.
fn row_haystack(order: &Order) -> String {
    order.field_values().join(" ").to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
