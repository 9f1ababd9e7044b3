use anyhow::{Context, Result};
use orderdesk_core::config::Config;
use orderdesk_core::kpi;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path).context("failed to load config")?;
    let table = orderdesk_core::store::load(&config.data_path)
        .with_context(|| format!("failed to load seed dataset {}", config.data_path.display()))?;

    let kpis = kpi::compute(&table);
    println!("{} orders loaded from {}", table.len(), config.data_path.display());
    println!(
        "open: {}  due today: {}  overdue: {}  invoiced this week: {}",
        kpis.open, kpis.due_today, kpis.overdue, kpis.invoiced_this_week
    );

    let mut warehouses: Vec<&str> = table.iter().map(|o| o.warehouse.as_str()).collect();
    warehouses.sort_unstable();
    warehouses.dedup();
    println!("warehouses: {}", warehouses.join(", "));
    Ok(())
}
