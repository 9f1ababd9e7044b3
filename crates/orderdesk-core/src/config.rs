use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Deployment configuration.
///
/// Loaded from a YAML file, then overridden by `ORDERDESK_*` environment
/// variables so the admin hash and signing secret never have to live in a
/// committed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_admin_user")]
    pub admin_user: String,
    /// Lowercase hex SHA-256 of the admin password. Empty means admin login
    /// is disabled (verification fails closed).
    #[serde(default)]
    pub admin_password_hash: String,
    /// HMAC secret for editor tokens. Empty disables token issue/verify.
    #[serde(default)]
    pub app_secret: String,
    /// Company label shown on reports and used as the default token company.
    #[serde(default = "default_company")]
    pub company: String,
    /// Seed dataset path.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Public base URL used when building shareable token links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_admin_user() -> String {
    "admin".to_string()
}

fn default_company() -> String {
    "Agriculture & Forestry".to_string()
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/master_orders.csv")
}

fn default_base_url() -> String {
    "http://localhost:3170".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_user: default_admin_user(),
            admin_password_hash: String::new(),
            app_secret: String::new(),
            company: default_company(),
            data_path: default_data_path(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load from a YAML file, then apply environment overrides. A missing
    /// file yields the defaults (env vars may still supply everything).
    pub fn load(path: &Path) -> Result<Config> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply `ORDERDESK_*` environment variable overrides in place.
    pub fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("ORDERDESK_ADMIN_USER") {
            self.admin_user = v;
        }
        if let Ok(v) = std::env::var("ORDERDESK_ADMIN_PASSWORD_HASH") {
            self.admin_password_hash = v;
        }
        if let Ok(v) = std::env::var("ORDERDESK_SECRET") {
            self.app_secret = v;
        }
        if let Ok(v) = std::env::var("ORDERDESK_COMPANY") {
            self.company = v;
        }
        if let Ok(v) = std::env::var("ORDERDESK_DATA") {
            self.data_path = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("ORDERDESK_BASE_URL") {
            self.base_url = v;
        }
    }

    /// Shareable link that auto-logs an editor in via the token query param.
    pub fn token_link(&self, token: &str) -> String {
        format!("{}/?token={}", self.base_url.trim_end_matches('/'), token)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
