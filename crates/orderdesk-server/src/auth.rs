use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use orderdesk_core::session::Session;
use orderdesk_core::types::Role;

use crate::state::{new_session_id, session_cookie, session_id_from_headers, AppState};

/// Axum middleware gating every `/api/*` route behind a signed-in session.
///
/// Auth flow (evaluated in order):
/// 1. Path is a login endpoint → passthrough
/// 2. Session cookie maps to a signed-in session → passthrough
///    (`/api/admin/*` additionally requires the admin role)
/// 3. Query param `?token=EDITOR_TOKEN` verifies → create editor session,
///    set session cookie, 302 to same path without the param
/// 4. None matched → 401 JSON with a generic message (the response never
///    reveals which check failed)
pub async fn auth_middleware(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if path.starts_with("/api/login/") {
        return next.run(req).await;
    }

    // Valid session — allow, with a role check for the admin surface.
    if let Some(sid) = session_id_from_headers(req.headers()) {
        let sessions = app.sessions.read().await;
        if let Some(session) = sessions.get(&sid) {
            let allowed = if path.starts_with("/api/admin/") {
                session.is_admin()
            } else {
                session.can_edit()
            };
            if allowed {
                drop(sessions);
                return next.run(req).await;
            }
        }
    }

    // One-time bootstrap via `?token=...` — the shareable editor link.
    let uri = req.uri().clone();
    if let Some(query) = uri.query() {
        if let Some(raw) = extract_token_param(query) {
            if let Some(claims) = orderdesk_core::token::verify(&app.config.app_secret, raw) {
                match app.load_table() {
                    Ok(table) => {
                        let mut session = Session::new(claims.company, table);
                        session.grant(Role::Editor, "Client");
                        let sid = new_session_id();
                        app.sessions.write().await.insert(sid.clone(), session);

                        let destination = strip_token_param(uri.path(), query);
                        return Response::builder()
                            .status(302)
                            .header("Location", destination)
                            .header("Set-Cookie", session_cookie(&sid))
                            .body(Body::empty())
                            .expect("infallible: all header values are valid ASCII");
                    }
                    Err(err) => {
                        tracing::error!("seed dataset load failed during token login: {err}");
                        let body = serde_json::json!({ "error": "seed dataset unavailable" });
                        return Response::builder()
                            .status(500)
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.to_string()))
                            .expect("infallible: all header values are valid ASCII");
                    }
                }
            }
        }
    }

    // Unauthorized — generic message, never says which check failed.
    Response::builder()
        .status(401)
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"error":"invalid credentials or token"}"#))
        .expect("infallible: all header values are valid ASCII")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn extract_token_param(query: &str) -> Option<&str> {
    query.split('&').find_map(|kv| kv.strip_prefix("token="))
}

fn strip_token_param(path: &str, query: &str) -> String {
    let remaining: Vec<&str> = query
        .split('&')
        .filter(|kv| !kv.starts_with("token="))
        .collect();
    if remaining.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, remaining.join("&"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_token_only_param() {
        assert_eq!(strip_token_param("/", "token=abc"), "/");
    }

    #[test]
    fn strip_token_preserves_other_params() {
        assert_eq!(
            strip_token_param("/api/orders", "warehouse=VIC&token=abc&search=x"),
            "/api/orders?warehouse=VIC&search=x"
        );
    }

    #[test]
    fn extract_token_param_found() {
        assert_eq!(extract_token_param("token=tok"), Some("tok"));
        assert_eq!(extract_token_param("x=1&token=tok"), Some("tok"));
    }

    #[test]
    fn extract_token_param_not_found() {
        assert_eq!(extract_token_param("x=1"), None);
    }
}
