use crate::order::TIMESTAMP_FORMAT;
use crate::types::Status;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One status transition recorded in the session change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    pub timestamp: String,
    pub user: String,
    pub order_id: String,
    pub from: Status,
    pub to: Status,
}

/// Append a timestamped from→to entry. The log is session-scoped and never
/// persisted.
pub fn record(log: &mut Vec<ChangeLogEntry>, user: &str, order_id: &str, from: Status, to: Status) {
    record_at(
        log,
        user,
        order_id,
        from,
        to,
        chrono::Local::now().naive_local(),
    );
}

pub fn record_at(
    log: &mut Vec<ChangeLogEntry>,
    user: &str,
    order_id: &str,
    from: Status,
    to: Status,
    now: NaiveDateTime,
) {
    log.push(ChangeLogEntry {
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        user: user.to_string(),
        order_id: order_id.to_string(),
        from,
        to,
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut log = Vec::new();
        record(&mut log, "alice", "ORD-1", Status::New, Status::InProgress);
        record(&mut log, "bob", "ORD-2", Status::InProgress, Status::Completed);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].user, "alice");
        assert_eq!(log[1].order_id, "ORD-2");
        assert_eq!(log[1].from, Status::InProgress);
        assert_eq!(log[1].to, Status::Completed);
    }

    #[test]
    fn record_at_formats_timestamp() {
        let mut log = Vec::new();
        let now = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        record_at(&mut log, "alice", "ORD-1", Status::New, Status::OnHold, now);
        assert_eq!(log[0].timestamp, "2024-05-01 08:15:00");
    }
}
