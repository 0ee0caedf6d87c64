pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cards::handlers as cards;
use crate::errors::AppError;
use crate::layout::handlers as layout;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/paper-sizes", get(layout::handle_paper_sizes))
        .route("/api/v1/layout", post(layout::handle_layout))
        .route("/api/v1/paginate", post(layout::handle_paginate))
        .route("/api/v1/preview", post(layout::handle_preview))
        // Cards API
        .route(
            "/api/v1/settings/defaults",
            get(cards::handle_default_settings),
        )
        .route("/api/v1/fields", post(cards::handle_fields))
        .route("/api/v1/records/import", post(cards::handle_import))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

/// Rejects record batches larger than the configured maximum.
pub fn check_batch(len: usize, max_records: usize) -> Result<(), AppError> {
    if len > max_records {
        return Err(AppError::PayloadTooLarge(format!(
            "{len} records exceeds the limit of {max_records}"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
