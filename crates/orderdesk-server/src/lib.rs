pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use orderdesk_core::config::Config;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: Config) -> Router {
    let app_state = state::AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Login / session
        .route("/api/login/admin", post(routes::login::login_admin))
        .route("/api/login/token", post(routes::login::login_token))
        .route("/api/logout", post(routes::login::logout))
        .route("/api/session", get(routes::login::get_session))
        // Orders
        .route("/api/orders", get(routes::orders::list_orders))
        .route("/api/orders/{id}", post(routes::orders::update_order))
        // Change log
        .route("/api/log", get(routes::log::list_log))
        // FAQ
        .route("/api/faq", get(routes::faq::list_faq))
        // Exports
        .route("/api/export/orders.xlsx", get(routes::export::export_xlsx))
        .route("/api/export/orders.pdf", get(routes::export::export_pdf))
        // Admin
        .route("/api/admin/token", post(routes::admin::generate_token))
        .route("/api/admin/reset", post(routes::admin::reset_session))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth::auth_middleware,
        ))
        .layer(cors)
        .with_state(app_state)
}

/// Start the dashboard API server.
pub async fn serve(config: Config, port: u16) -> anyhow::Result<()> {
    let app = build_router(config);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("orderdesk server listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
