use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// Static Q&A shown on the dashboard's FAQ page.
const FAQ: &[(&str, &str)] = &[
    (
        "How do I filter orders?",
        "Use the filter parameters on each view: warehouse, status, priority, search, and due-date range.",
    ),
    (
        "How do I update a status or invoice?",
        "Open any warehouse view, pick an order, and submit the new status and invoice number.",
    ),
    ("Where can I see KPIs?", "KPIs appear above every table view."),
    ("Can I export the view?", "Yes, every view exports to spreadsheet and PDF."),
    (
        "What happens to my edits?",
        "Edits are session-scoped and reset when the session ends or an admin resets it.",
    ),
    (
        "Can multiple managers use it?",
        "Yes, each session is isolated with its own copy of the data.",
    ),
    (
        "What statuses exist?",
        "New, In Progress, On Hold, Completed, and Invoiced.",
    ),
    (
        "Do you log changes?",
        "Yes, the log view lists every status change made this session.",
    ),
    (
        "How do I access as Editor?",
        "The admin generates a short-lived token link to share.",
    ),
];

/// GET /api/faq — the Q&A list. Requires a signed-in session like every
/// other dashboard page.
pub async fn list_faq(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    super::with_session(&app, &headers, |_session| {
        let entries: Vec<serde_json::Value> = FAQ
            .iter()
            .map(|(q, a)| serde_json::json!({ "question": q, "answer": a }))
            .collect();
        Ok(Json(serde_json::json!({ "entries": entries })))
    })
    .await
}
