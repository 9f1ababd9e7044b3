use anyhow::{Context, Result};
use orderdesk_core::config::Config;
use orderdesk_core::token;
use std::path::Path;

pub fn run(config_path: &Path, company: Option<&str>, hours: u32) -> Result<()> {
    let config = Config::load(config_path).context("failed to load config")?;
    let company = company.unwrap_or(&config.company);

    let token = token::issue(&config.app_secret, company, hours)?;
    println!("token: {token}");
    println!("link:  {}", config.token_link(&token));
    println!("valid: {hours}h (company: {company})");
    Ok(())
}
