//! Axum route handlers for the Cards API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::fields::{resolve_all, ResolvedFields};
use crate::cards::mapping::{headers_of, ColumnMapping, Row};
use crate::cards::models::{AppSettings, Record};
use crate::errors::{AppError, AppJson};
use crate::routes::check_batch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldsRequest {
    pub records: Vec<Record>,
    pub settings: Option<AppSettings>,
}

#[derive(Debug, Serialize)]
pub struct FieldsResponse {
    pub fields: Vec<ResolvedFields>,
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<Row>,
    /// Column order. Defaults to the keys of the first row.
    pub headers: Option<Vec<String>>,
    /// Explicit mapping. Detected from the headers when absent.
    pub mapping: Option<ColumnMapping>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub headers: Vec<String>,
    pub mapping: ColumnMapping,
    pub records: Vec<Record>,
}

/// GET /api/v1/settings/defaults
pub async fn handle_default_settings(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.defaults.clone())
}

/// POST /api/v1/fields
///
/// Resolves the printed ID and date for every record, by position.
pub async fn handle_fields(
    State(state): State<AppState>,
    AppJson(request): AppJson<FieldsRequest>,
) -> Result<Json<FieldsResponse>, AppError> {
    check_batch(request.records.len(), state.config.max_records)?;

    let settings = request
        .settings
        .unwrap_or_else(|| state.defaults.clone())
        .card_settings();
    Ok(Json(FieldsResponse {
        fields: resolve_all(&request.records, &settings),
    }))
}

/// POST /api/v1/records/import
///
/// Maps parsed spreadsheet rows onto records.
pub async fn handle_import(
    State(state): State<AppState>,
    AppJson(request): AppJson<ImportRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    check_batch(request.rows.len(), state.config.max_records)?;

    let headers = request
        .headers
        .unwrap_or_else(|| request.rows.first().map(headers_of).unwrap_or_default());
    let mapping = request
        .mapping
        .unwrap_or_else(|| ColumnMapping::detect(headers.as_slice()));
    let records = mapping.apply(&request.rows);
    info!(
        "Imported {} records (name={:?}, id={:?}, date={:?})",
        records.len(),
        mapping.name,
        mapping.id,
        mapping.date
    );

    Ok(Json(ImportResponse {
        headers,
        mapping,
        records,
    }))
}
