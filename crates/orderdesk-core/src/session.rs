use crate::changelog::ChangeLogEntry;
use crate::order::Order;
use crate::types::Role;

/// Session-scoped state: who is signed in and their private copy of the
/// order table plus change log.
///
/// Created at first interaction, reset by an explicit admin action, and
/// discarded at session end. Edits never reach the seed dataset.
#[derive(Debug, Clone)]
pub struct Session {
    pub role: Option<Role>,
    pub username: String,
    pub company: String,
    pub table: Vec<Order>,
    pub log: Vec<ChangeLogEntry>,
}

impl Session {
    /// Fresh, unauthenticated session over a newly loaded table.
    pub fn new(company: impl Into<String>, table: Vec<Order>) -> Self {
        Self {
            role: None,
            username: String::new(),
            company: company.into(),
            table,
            log: Vec::new(),
        }
    }

    /// Establish a role after a successful login.
    pub fn grant(&mut self, role: Role, username: impl Into<String>) {
        self.role = Some(role);
        self.username = username.into();
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Any signed-in role may view and edit orders.
    pub fn can_edit(&self) -> bool {
        self.role.is_some()
    }

    /// Drop in-session edits and the change log, swapping in a freshly
    /// loaded table. Role and identity survive the reset.
    pub fn reset(&mut self, table: Vec<Order>) {
        self.table = table;
        self.log.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
