//! Seed dataset loading.
//!
//! The order table is loaded fresh from a flat CSV file at session start and
//! never written back; edits live only in the session's in-memory copy.

use crate::error::{OrderdeskError, Result};
use crate::order::{Order, COLUMNS};
use std::collections::HashSet;
use std::path::Path;

/// Parse the seed CSV into an ordered table of `Order` rows.
///
/// Validation is all-or-nothing: a missing required column, an unknown status
/// value, or a duplicate OrderID fails the whole load and no partial table is
/// returned. Missing cells default to the empty string.
pub fn load(path: &Path) -> Result<Vec<Order>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut index = [0usize; 8];
    for (i, col) in COLUMNS.iter().enumerate() {
        index[i] = headers
            .iter()
            .position(|h| h == *col)
            .ok_or_else(|| OrderdeskError::MissingColumn(col.to_string()))?;
    }

    let cell = |record: &csv::StringRecord, i: usize| -> String {
        record.get(index[i]).unwrap_or("").trim().to_string()
    };

    let mut table = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for record in reader.records() {
        let record = record?;
        let order_id = cell(&record, 0);
        if !seen.insert(order_id.clone()) {
            // Update-by-id assumes unique ids; reject the dataset rather than
            // silently editing only the first occurrence later.
            return Err(OrderdeskError::DuplicateOrderId(order_id));
        }
        table.push(Order {
            order_id,
            warehouse: cell(&record, 1),
            status: cell(&record, 2).parse()?,
            priority: cell(&record, 3),
            due_date: cell(&record, 4),
            invoice_no: cell(&record, 5),
            updated_by: cell(&record, 6),
            last_updated_on: cell(&record, 7),
        });
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
