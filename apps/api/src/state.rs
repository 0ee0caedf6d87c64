use crate::cards::AppSettings;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Settings applied when a request does not carry its own.
    pub defaults: AppSettings,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let defaults = AppSettings {
            start_id: config.default_start_id.clone(),
            global_date: config.default_date.clone(),
            ..AppSettings::default()
        };
        AppState { config, defaults }
    }
}
