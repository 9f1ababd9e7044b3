use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use orderdesk_core::export;
use orderdesk_core::order::Order;

use crate::error::AppError;
use crate::routes::FilterParams;
use crate::state::AppState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PDF_MIME: &str = "application/pdf";

/// GET /api/export/orders.xlsx — the current filtered view as a spreadsheet.
pub async fn export_xlsx(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FilterParams>,
) -> Result<Response, AppError> {
    let filter = params.into_filter()?;
    let scope = export::export_scope(&filter.warehouses).to_string();
    let rows = super::with_session(&app, &headers, |session| Ok(filter.apply(&session.table))).await?;

    let bytes = tokio::task::spawn_blocking(move || export::to_xlsx_bytes(&rows))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    download(bytes, XLSX_MIME, &format!("{scope}_orders.xlsx"))
}

/// GET /api/export/orders.pdf — the current filtered view as a paginated
/// document titled with the session's company.
pub async fn export_pdf(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<FilterParams>,
) -> Result<Response, AppError> {
    let filter = params.into_filter()?;
    let scope = export::export_scope(&filter.warehouses).to_string();
    let (rows, company): (Vec<Order>, String) =
        super::with_session(&app, &headers, |session| {
            Ok((filter.apply(&session.table), session.company.clone()))
        })
        .await?;

    let bytes = tokio::task::spawn_blocking(move || export::to_pdf_bytes(&rows, &company))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    download(bytes, PDF_MIME, &format!("{scope}_orders.pdf"))
}

fn download(bytes: Vec<u8>, mime: &str, filename: &str) -> Result<Response, AppError> {
    Response::builder()
        .status(200)
        .header("Content-Type", mime)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(bytes))
        .map_err(|e| AppError(anyhow::anyhow!("response build error: {e}")))
}
