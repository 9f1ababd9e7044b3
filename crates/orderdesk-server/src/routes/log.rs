use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/log — this session's change log, oldest first.
pub async fn list_log(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    super::with_session(&app, &headers, |session| {
        Ok(Json(serde_json::json!({ "entries": session.log })))
    })
    .await
}
