//! View exports: spreadsheet and paginated document bytes.
//!
//! Both renderers are pure functions of the rows passed in — the same view
//! produces byte-identical output, so downloads are cache- and diff-friendly.

mod pdf;
mod xlsx;

pub use pdf::to_pdf_bytes;
pub use xlsx::to_xlsx_bytes;

use crate::order::Order;

/// Download filename stem for the current view: the warehouse name when the
/// filter names exactly one, otherwise "master".
pub fn export_scope(warehouses: &[String]) -> &str {
    match warehouses {
        [single] => single.as_str(),
        _ => "master",
    }
}

/// Cell display values for one row, truncated the way the document export
/// needs them: at most 20 characters, with a trailing "..." marker.
pub(crate) fn truncated_cells(order: &Order) -> Vec<String> {
    order
        .field_values()
        .iter()
        .map(|v| truncate(v, 20))
        .collect()
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let head: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_is_warehouse_only_when_single() {
        assert_eq!(export_scope(&["VIC".to_string()]), "VIC");
        assert_eq!(export_scope(&[]), "master");
        assert_eq!(
            export_scope(&["VIC".to_string(), "NSW".to_string()]),
            "master"
        );
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("ORD-100", 20), "ORD-100");
        assert_eq!(truncate("exactly-twenty-chars", 20), "exactly-twenty-chars");
    }

    #[test]
    fn truncate_marks_long_values() {
        let long = "a-very-long-invoice-number-that-overflows";
        let out = truncate(long, 20);
        assert_eq!(out.chars().count(), 20);
        assert!(out.ends_with("..."));
        assert_eq!(out, "a-very-long-invoi...");
    }
}
