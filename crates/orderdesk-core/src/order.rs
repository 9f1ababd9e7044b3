use crate::error::{OrderdeskError, Result};
use crate::types::Status;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used for `LastUpdatedOn` and the change log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column order of the seed dataset; exports preserve it.
pub const COLUMNS: &[&str] = &[
    "OrderID",
    "Warehouse",
    "Status",
    "Priority",
    "DueDate",
    "InvoiceNo",
    "UpdatedBy",
    "LastUpdatedOn",
];

/// One row of the order table. All fields except `status` are free-form text
/// straight from the dataset; empty string means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderID")]
    pub order_id: String,
    #[serde(rename = "Warehouse")]
    pub warehouse: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Priority")]
    pub priority: String,
    /// ISO `YYYY-MM-DD` date; compared lexicographically for range filters.
    #[serde(rename = "DueDate")]
    pub due_date: String,
    #[serde(rename = "InvoiceNo", default)]
    pub invoice_no: String,
    #[serde(rename = "UpdatedBy", default)]
    pub updated_by: String,
    #[serde(rename = "LastUpdatedOn", default)]
    pub last_updated_on: String,
}

impl Order {
    /// Field values in dataset column order, as display strings.
    pub fn field_values(&self) -> [String; 8] {
        [
            self.order_id.clone(),
            self.warehouse.clone(),
            self.status.to_string(),
            self.priority.clone(),
            self.due_date.clone(),
            self.invoice_no.clone(),
            self.updated_by.clone(),
            self.last_updated_on.clone(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Table operations (operate on a mutable Vec<Order>)
// ---------------------------------------------------------------------------

/// Apply a status/invoice edit to the row with the given id.
///
/// All four mutated fields change together or not at all. Returns the PRIOR
/// status so the caller can record a from→to change-log entry. A missing id
/// is `OrderNotFound`; the table is left untouched in that case.
pub fn update_order(
    table: &mut [Order],
    order_id: &str,
    new_status: Status,
    new_invoice: &str,
    actor: &str,
) -> Result<Status> {
    update_order_at(
        table,
        order_id,
        new_status,
        new_invoice,
        actor,
        chrono::Local::now().naive_local(),
    )
}

pub fn update_order_at(
    table: &mut [Order],
    order_id: &str,
    new_status: Status,
    new_invoice: &str,
    actor: &str,
    now: NaiveDateTime,
) -> Result<Status> {
    let order = find_mut(table, order_id)?;
    let prior = order.status;
    order.status = new_status;
    order.invoice_no = new_invoice.to_string();
    order.updated_by = actor.to_string();
    order.last_updated_on = now.format(TIMESTAMP_FORMAT).to_string();
    Ok(prior)
}

pub fn find<'a>(table: &'a [Order], order_id: &str) -> Option<&'a Order> {
    table.iter().find(|o| o.order_id == order_id)
}

fn find_mut<'a>(table: &'a mut [Order], order_id: &str) -> Result<&'a mut Order> {
    table
        .iter_mut()
        .find(|o| o.order_id == order_id)
        .ok_or_else(|| OrderdeskError::OrderNotFound(order_id.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
