use crate::error::{OrderdeskError, Result};
use crate::order::{Order, COLUMNS};
use rust_xlsxwriter::Workbook;

/// Serialize the given rows into a single-sheet `.xlsx` workbook: header row
/// in dataset column order, then one row per order, all cells as text.
///
/// `rust_xlsxwriter` pins the workbook creation date by default, so output
/// depends only on the rows passed in.
pub fn to_xlsx_bytes(rows: &[Order]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Orders")
        .map_err(|e| OrderdeskError::Export(e.to_string()))?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .map_err(|e| OrderdeskError::Export(e.to_string()))?;
    }
    for (row, order) in rows.iter().enumerate() {
        for (col, value) in order.field_values().iter().enumerate() {
            worksheet
                .write_string((row + 1) as u32, col as u16, value)
                .map_err(|e| OrderdeskError::Export(e.to_string()))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| OrderdeskError::Export(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
