pub mod admin;
pub mod export;
pub mod faq;
pub mod log;
pub mod login;
pub mod orders;

use crate::error::AppError;
use crate::state::{session_id_from_headers, AppState};
use axum::http::HeaderMap;
use orderdesk_core::filter::OrderFilter;
use orderdesk_core::session::Session;
use serde::Deserialize;

/// Look up the caller's session id, or fail with a generic 401.
///
/// The auth middleware has already vetted the session, so this only re-reads
/// the cookie; handlers use the id to lock the session map themselves.
pub(crate) fn require_session_id(headers: &HeaderMap) -> Result<String, AppError> {
    session_id_from_headers(headers).ok_or_else(AppError::unauthorized)
}

/// Run `f` against the caller's session under the map's write lock.
///
/// Updates and resets go through here so a row mutation and its change-log
/// entry are observed atomically by any other request on the same session.
pub(crate) async fn with_session_mut<T>(
    app: &AppState,
    headers: &HeaderMap,
    f: impl FnOnce(&mut Session) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let sid = require_session_id(headers)?;
    let mut sessions = app.sessions.write().await;
    let session = sessions.get_mut(&sid).ok_or_else(AppError::unauthorized)?;
    f(session)
}

/// Run `f` against the caller's session under the map's read lock.
pub(crate) async fn with_session<T>(
    app: &AppState,
    headers: &HeaderMap,
    f: impl FnOnce(&Session) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let sid = require_session_id(headers)?;
    let sessions = app.sessions.read().await;
    let session = sessions.get(&sid).ok_or_else(AppError::unauthorized)?;
    f(session)
}

// ---------------------------------------------------------------------------
// Filter query parameters (shared by the orders view and both exports)
// ---------------------------------------------------------------------------

/// Query-string form of a view filter. Set criteria are comma-separated:
/// `?warehouse=VIC,NSW&status=New,Invoiced&search=acme&date_from=2024-06-01`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub warehouse: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub date_from: String,
    #[serde(default)]
    pub date_to: String,
}

impl FilterParams {
    pub fn into_filter(self) -> Result<OrderFilter, AppError> {
        let statuses = split_list(&self.status)
            .iter()
            .map(|s| s.parse())
            .collect::<orderdesk_core::Result<Vec<_>>>()?;
        Ok(OrderFilter {
            warehouses: split_list(&self.warehouse),
            statuses,
            priorities: split_list(&self.priority),
            search: self.search,
            date_from: self.date_from,
            date_to: self.date_to,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
