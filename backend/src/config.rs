//! # Server Configuration
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. An optional YAML file named by `EXPENSE_TRACKER_CONFIG`
//! 3. Individual environment overrides
//!
//! ## YAML Format
//!
//! ```yaml
//! bind_address: "127.0.0.1:5000"
//! data_directory: "./data"
//! cors_origin: "http://localhost:3000"
//! static_directory: "../frontend/dist"
//! initial_balance: 10000
//! log_level: "info"
//! ```
//!
//! Every key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use shared::dashboard::INITIAL_BALANCE;

pub const CONFIG_PATH_VAR: &str = "EXPENSE_TRACKER_CONFIG";
pub const ADDR_VAR: &str = "EXPENSE_TRACKER_ADDR";
pub const DATA_DIR_VAR: &str = "EXPENSE_TRACKER_DATA_DIR";
pub const CORS_ORIGIN_VAR: &str = "EXPENSE_TRACKER_CORS_ORIGIN";
pub const STATIC_DIR_VAR: &str = "EXPENSE_TRACKER_STATIC_DIR";
pub const INITIAL_BALANCE_VAR: &str = "EXPENSE_TRACKER_INITIAL_BALANCE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Directory holding `categories.json`, `expenses.json` and `forecasts.json`
    pub data_directory: PathBuf,
    /// Single allowed origin; any origin is allowed when unset
    pub cors_origin: Option<String>,
    /// Built frontend served for every non-API path
    pub static_directory: Option<PathBuf>,
    pub initial_balance: f64,
    /// Default tracing filter, used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_directory: PathBuf::from("./data"),
            cors_origin: None,
            static_directory: None,
            initial_balance: INITIAL_BALANCE,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve the configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration using `lookup` in place of the environment.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_yaml(&yaml_content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_yaml(yaml_content: &str) -> Result<Self> {
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml_content)?)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ADDR_VAR) {
            self.bind_address = addr
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", ADDR_VAR, addr))?;
        }
        if let Some(dir) = lookup(DATA_DIR_VAR) {
            self.data_directory = PathBuf::from(dir);
        }
        if let Some(origin) = lookup(CORS_ORIGIN_VAR) {
            self.cors_origin = Some(origin).filter(|o| !o.is_empty());
        }
        if let Some(dir) = lookup(STATIC_DIR_VAR) {
            self.static_directory = Some(PathBuf::from(dir)).filter(|d| !d.as_os_str().is_empty());
        }
        if let Some(balance) = lookup(INITIAL_BALANCE_VAR) {
            self.initial_balance = balance
                .trim()
                .parse()
                .with_context(|| format!("{} is not a number: {}", INITIAL_BALANCE_VAR, balance))?;
        }
        Ok(())
    }
}
