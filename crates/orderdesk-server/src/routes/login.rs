use axum::body::Body;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use orderdesk_core::session::Session;
use orderdesk_core::types::Role;
use orderdesk_core::{credential, token};

use crate::error::AppError;
use crate::state::{
    clear_session_cookie, new_session_id, session_cookie, session_id_from_headers, AppState,
};

#[derive(serde::Deserialize)]
pub struct AdminLoginBody {
    pub username: String,
    pub password: String,
}

#[derive(serde::Deserialize)]
pub struct TokenLoginBody {
    pub token: String,
}

/// POST /api/login/admin — establish an admin session from username/password.
pub async fn login_admin(
    State(app): State<AppState>,
    Json(body): Json<AdminLoginBody>,
) -> Result<Response, AppError> {
    let ok = credential::verify_admin(
        &body.username,
        &body.password,
        &app.config.admin_user,
        &app.config.admin_password_hash,
    );
    if !ok {
        return Err(AppError::unauthorized());
    }

    let company = app.config.company.clone();
    let mut session = Session::new(company, load_table(&app).await?);
    session.grant(Role::Admin, body.username);
    establish(&app, session).await
}

/// POST /api/login/token — establish an editor session from a token.
pub async fn login_token(
    State(app): State<AppState>,
    Json(body): Json<TokenLoginBody>,
) -> Result<Response, AppError> {
    let claims = token::verify(&app.config.app_secret, body.token.trim())
        .ok_or_else(AppError::unauthorized)?;

    let mut session = Session::new(claims.company, load_table(&app).await?);
    session.grant(Role::Editor, "Client");
    establish(&app, session).await
}

/// POST /api/logout — drop the caller's session and clear the cookie.
pub async fn logout(State(app): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(sid) = session_id_from_headers(&headers) {
        app.sessions.write().await.remove(&sid);
    }
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Set-Cookie", clear_session_cookie())
        .body(Body::from(r#"{"ok":true}"#))
        .expect("infallible: all header values are valid ASCII")
}

/// GET /api/session — who the caller is.
pub async fn get_session(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    super::with_session(&app, &headers, |session| {
        Ok(Json(serde_json::json!({
            "role": session.role,
            "username": session.username,
            "company": session.company,
        })))
    })
    .await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the seed dataset off the async runtime.
async fn load_table(app: &AppState) -> Result<Vec<orderdesk_core::order::Order>, AppError> {
    let path = app.config.data_path.clone();
    tokio::task::spawn_blocking(move || orderdesk_core::store::load(&path))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?
        .map_err(AppError::from)
}

/// Insert the session, set the cookie, and describe the signed-in identity.
async fn establish(app: &AppState, session: Session) -> Result<Response, AppError> {
    let body = serde_json::json!({
        "role": session.role,
        "username": session.username,
        "company": session.company,
    });
    let sid = new_session_id();
    app.sessions.write().await.insert(sid.clone(), session);

    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Set-Cookie", session_cookie(&sid))
        .body(Body::from(body.to_string()))
        .expect("infallible: all header values are valid ASCII"))
}
