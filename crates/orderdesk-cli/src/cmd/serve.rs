use anyhow::{Context, Result};
use orderdesk_core::config::Config;
use std::path::Path;

pub fn run(config_path: &Path, port: u16) -> Result<()> {
    let config = Config::load(config_path).context("failed to load config")?;

    if config.admin_password_hash.is_empty() {
        tracing::warn!("admin_password_hash is not configured; admin login is disabled");
    }
    if config.app_secret.is_empty() {
        tracing::warn!("app_secret is not configured; editor tokens are disabled");
    }

    // Fail fast on an unreadable or malformed seed dataset rather than at
    // first login.
    let rows = orderdesk_core::store::load(&config.data_path)
        .with_context(|| format!("failed to load seed dataset {}", config.data_path.display()))?
        .len();
    tracing::info!("seed dataset ok: {rows} orders from {}", config.data_path.display());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(orderdesk_server::serve(config, port))
}
