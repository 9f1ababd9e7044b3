use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use orderdesk_core::types::Status;
use orderdesk_core::{changelog, kpi, order};

use crate::error::AppError;
use crate::routes::FilterParams;
use crate::state::AppState;

/// GET /api/orders — the filtered view plus its KPI row.
///
/// KPIs are computed over the filtered rows, matching the dashboard where
/// the KPI row sits above the table it describes.
pub async fn list_orders(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FilterParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let filter = params.into_filter()?;
    super::with_session(&app, &headers, |session| {
        let rows = filter.apply(&session.table);
        let kpis = kpi::compute(&rows);
        Ok(Json(serde_json::json!({
            "rows": rows,
            "kpis": kpis,
        })))
    })
    .await
}

#[derive(serde::Deserialize)]
pub struct UpdateOrderBody {
    pub status: String,
    #[serde(default)]
    pub invoice_no: String,
}

/// POST /api/orders/{id} — apply a status/invoice edit and log the change.
///
/// An unknown order id is a visible 404, never a silent no-op.
pub async fn update_order(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
    Json(body): Json<UpdateOrderBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let new_status: Status = body.status.parse()?;
    super::with_session_mut(&app, &headers, |session| {
        let actor = if session.username.is_empty() {
            "User".to_string()
        } else {
            session.username.clone()
        };
        let prior = order::update_order(
            &mut session.table,
            &order_id,
            new_status,
            &body.invoice_no,
            &actor,
        )?;
        changelog::record(&mut session.log, &actor, &order_id, prior, new_status);

        Ok(Json(serde_json::json!({
            "order_id": order_id,
            "from": prior,
            "to": new_status,
        })))
    })
    .await
}
