use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use orderdesk_core::token;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct GenerateTokenBody {
    #[serde(default)]
    pub company: Option<String>,
    pub hours: u32,
}

/// POST /api/admin/token — mint a shareable editor token link.
///
/// The middleware has already required the admin role for this path.
pub async fn generate_token(
    State(app): State<AppState>,
    Json(body): Json<GenerateTokenBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let company = body
        .company
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| app.config.company.clone());
    let token = token::issue(&app.config.app_secret, &company, body.hours)?;
    let link = app.config.token_link(&token);

    tracing::info!(company = %company, hours = body.hours, "editor token issued");
    Ok(Json(serde_json::json!({
        "token": token,
        "link": link,
        "company": company,
        "hours": body.hours,
    })))
}

/// POST /api/admin/reset — reload the seed dataset and clear the change log
/// for the caller's session.
pub async fn reset_session(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let path = app.config.data_path.clone();
    let table = tokio::task::spawn_blocking(move || orderdesk_core::store::load(&path))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    let rows = table.len();
    super::with_session_mut(&app, &headers, move |session| {
        session.reset(table);
        Ok(Json(serde_json::json!({ "ok": true, "rows": rows })))
    })
    .await
}
