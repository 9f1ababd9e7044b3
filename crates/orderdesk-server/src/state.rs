use orderdesk_core::config::Config;
use orderdesk_core::session::Session;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "orderdesk_session";

/// Shared application state passed to all route handlers.
///
/// Each entry in `sessions` owns its private order table and change log, so
/// concurrent sessions are isolated; the `RwLock` serializes access to the
/// map itself and to any session being mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Load a fresh order table from the seed dataset.
    pub fn load_table(&self) -> orderdesk_core::Result<Vec<orderdesk_core::order::Order>> {
        orderdesk_core::store::load(&self.config.data_path)
    }
}

/// Random URL-safe session identifier.
pub fn new_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Extract the session id from the request's Cookie header, if present.
pub fn session_id_from_headers(headers: &axum::http::HeaderMap) -> Option<String> {
    let cookies = headers.get("cookie")?.to_str().ok()?;
    for part in cookies.split(';') {
        if let Some(val) = part
            .trim()
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
        {
            if !val.is_empty() {
                return Some(val.to_string());
            }
        }
    }
    None
}

/// Set-Cookie value for a newly established session.
pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; HttpOnly; SameSite=Lax; Path=/")
}

/// Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
