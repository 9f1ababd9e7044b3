use crate::order::{Order, TIMESTAMP_FORMAT};
use crate::types::Status;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Aggregate counts shown above every table view.
///
/// Always computed fresh from the rows passed in; there is no caching or
/// incremental maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    pub open: usize,
    pub due_today: usize,
    pub overdue: usize,
    pub invoiced_this_week: usize,
}

/// Compute KPIs against the local wall clock.
pub fn compute(table: &[Order]) -> Kpis {
    compute_at(table, chrono::Local::now().naive_local())
}

/// Compute KPIs relative to an explicit `now`.
///
/// Rows with an empty or unparseable DueDate are neither due today nor
/// overdue. "This week" starts at the most recent Monday 00:00.
pub fn compute_at(table: &[Order], now: NaiveDateTime) -> Kpis {
    let today = now.date();
    let week_start = start_of_week(today).and_hms_opt(0, 0, 0).unwrap_or(now);

    let mut kpis = Kpis {
        open: 0,
        due_today: 0,
        overdue: 0,
        invoiced_this_week: 0,
    };
    for order in table {
        if order.status.is_open() {
            kpis.open += 1;
        }
        if let Ok(due) = NaiveDate::parse_from_str(&order.due_date, "%Y-%m-%d") {
            if due == today {
                kpis.due_today += 1;
            } else if due < today {
                kpis.overdue += 1;
            }
        }
        if order.status == Status::Invoiced {
            if let Ok(updated) =
                NaiveDateTime::parse_from_str(&order.last_updated_on, TIMESTAMP_FORMAT)
            {
                if updated >= week_start {
                    kpis.invoiced_this_week += 1;
                }
            }
        }
    }
    kpis
}

/// Most recent Monday on or before the given date.
fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: Status, due: &str, updated: &str) -> Order {
        Order {
            order_id: "ORD-1".to_string(),
            warehouse: "VIC".to_string(),
            status,
            priority: "Normal".to_string(),
            due_date: due.to_string(),
            invoice_no: String::new(),
            updated_by: String::new(),
            last_updated_on: updated.to_string(),
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn due_counts_split_past_today_and_unparseable() {
        // Wednesday 2024-06-12.
        let now = noon(2024, 6, 12);
        let table = vec![
            order(Status::New, "2024-01-01", ""),
            order(Status::New, "2024-01-01", ""),
            order(Status::New, "2024-01-01", ""),
            order(Status::New, "2024-06-12", ""),
            order(Status::New, "2024-06-12", ""),
            order(Status::New, "", ""),
        ];
        let kpis = compute_at(&table, now);
        assert_eq!(kpis.overdue, 3);
        assert_eq!(kpis.due_today, 2);
        // The empty-DueDate row contributes to neither.
        assert_eq!(kpis.overdue + kpis.due_today, 5);
    }

    #[test]
    fn open_counts_new_in_progress_on_hold() {
        let now = noon(2024, 6, 12);
        let table = vec![
            order(Status::New, "2024-06-20", ""),
            order(Status::InProgress, "2024-06-20", ""),
            order(Status::OnHold, "2024-06-20", ""),
            order(Status::Completed, "2024-06-20", ""),
            order(Status::Invoiced, "2024-06-20", ""),
        ];
        assert_eq!(compute_at(&table, now).open, 3);
    }

    #[test]
    fn invoiced_this_week_starts_monday() {
        // Wednesday 2024-06-12; the week started Monday 2024-06-10 00:00.
        let now = noon(2024, 6, 12);
        let table = vec![
            order(Status::Invoiced, "2024-06-01", "2024-06-10 00:00:00"),
            order(Status::Invoiced, "2024-06-01", "2024-06-11 15:30:00"),
            order(Status::Invoiced, "2024-06-01", "2024-06-09 23:59:59"),
            order(Status::Completed, "2024-06-01", "2024-06-11 15:30:00"),
            order(Status::Invoiced, "2024-06-01", ""),
        ];
        assert_eq!(compute_at(&table, now).invoiced_this_week, 2);
    }

    #[test]
    fn monday_is_its_own_week_start() {
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(start_of_week(monday), monday);
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        assert_eq!(start_of_week(sunday), monday);
    }

    #[test]
    fn future_due_dates_count_nowhere() {
        let now = noon(2024, 6, 12);
        let table = vec![order(Status::New, "2024-12-25", "")];
        let kpis = compute_at(&table, now);
        assert_eq!(kpis.due_today, 0);
        assert_eq!(kpis.overdue, 0);
    }
}
