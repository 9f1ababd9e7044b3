use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Order lifecycle status. The serialized form uses the dataset's display
/// strings ("In Progress", not "in_progress") so rows round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    Invoiced,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[
            Status::New,
            Status::InProgress,
            Status::OnHold,
            Status::Completed,
            Status::Invoiced,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In Progress",
            Status::OnHold => "On Hold",
            Status::Completed => "Completed",
            Status::Invoiced => "Invoiced",
        }
    }

    /// Statuses counted as "open" by the KPI row.
    pub fn is_open(self) -> bool {
        matches!(self, Status::New | Status::InProgress | Status::OnHold)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::OrderdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Status::New),
            "In Progress" => Ok(Status::InProgress),
            "On Hold" => Ok(Status::OnHold),
            "Completed" => Ok(Status::Completed),
            "Invoiced" => Ok(Status::Invoiced),
            _ => Err(crate::error::OrderdeskError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
