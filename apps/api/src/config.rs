use anyhow::{Context, Result};

use crate::cards::models::{DEFAULT_DATE, DEFAULT_START_ID};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Largest record batch a single request may carry.
    pub max_records: usize,
    /// Seed for generated IDs when a request carries no settings.
    pub default_start_id: String,
    /// Fallback date text when a request carries no settings.
    pub default_date: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_records: 5000,
            default_start_id: DEFAULT_START_ID.to_string(),
            default_date: DEFAULT_DATE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_records: std::env::var("MAX_RECORDS")
                .unwrap_or_else(|_| defaults.max_records.to_string())
                .parse::<usize>()
                .context("MAX_RECORDS must be a non-negative integer")?,
            default_start_id: std::env::var("DEFAULT_START_ID")
                .unwrap_or(defaults.default_start_id),
            default_date: std::env::var("DEFAULT_DATE").unwrap_or(defaults.default_date),
        })
    }
}
