//! Axum route handlers for the Layout API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::models::{
    AppSettings, Record, STANDARD_CARD_HEIGHT_MM, STANDARD_CARD_WIDTH_MM,
};
use crate::cards::units::{to_mm, DimensionUnit};
use crate::errors::{AppError, AppJson};
use crate::layout::{
    paginate, paper_sizes, place_sheet, resolve_for, single_card_preview, total_pages,
    CardGeometry, LayoutConfig, ManualGridConfig, PageSize, PaperSize, SheetPreview,
};
use crate::routes::check_batch;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub page_size: PageSize,
    /// Defaults to the standard card width.
    pub card_width: Option<f64>,
    /// Defaults to the standard card height.
    pub card_height: Option<f64>,
    #[serde(default)]
    pub unit: DimensionUnit,
    #[serde(default)]
    pub manual_grid: ManualGridConfig,
}

#[derive(Debug, Deserialize)]
pub struct PaginateRequest {
    pub records: Vec<Record>,
    pub cards_per_page: u64,
}

#[derive(Debug, Serialize)]
pub struct PaginateResponse {
    pub total_pages: usize,
    pub pages: Vec<Vec<Record>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewView {
    /// Every record across all sheets.
    #[default]
    Sheet,
    /// First record only, for design work.
    Single,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub records: Vec<Record>,
    pub settings: Option<AppSettings>,
    #[serde(default)]
    pub view: PreviewView,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub settings: AppSettings,
    pub card: CardGeometry,
    pub preview: SheetPreview,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/paper-sizes
pub async fn handle_paper_sizes() -> Json<Vec<PaperSize>> {
    Json(paper_sizes())
}

/// POST /api/v1/layout
///
/// Resolves the sheet grid for one paper size and card size.
pub async fn handle_layout(AppJson(request): AppJson<LayoutRequest>) -> Json<LayoutConfig> {
    // A missing side keeps the standard size, which is already in mm.
    let width_mm = request
        .card_width
        .map_or(STANDARD_CARD_WIDTH_MM, |w| to_mm(w, request.unit));
    let height_mm = request
        .card_height
        .map_or(STANDARD_CARD_HEIGHT_MM, |h| to_mm(h, request.unit));

    Json(resolve_for(
        request.page_size,
        width_mm,
        height_mm,
        &request.manual_grid,
    ))
}

/// POST /api/v1/paginate
///
/// Splits records into pages of `cards_per_page`.
pub async fn handle_paginate(
    State(state): State<AppState>,
    AppJson(request): AppJson<PaginateRequest>,
) -> Result<Json<PaginateResponse>, AppError> {
    check_batch(request.records.len(), state.config.max_records)?;
    if request.cards_per_page == 0 {
        return Err(AppError::Validation(
            "cards_per_page must be at least 1".to_string(),
        ));
    }

    let pages: Vec<Vec<Record>> = paginate(&request.records, request.cards_per_page)
        .into_iter()
        .map(|page| page.records.to_vec())
        .collect();

    Ok(Json(PaginateResponse {
        total_pages: total_pages(request.records.len(), request.cards_per_page),
        pages,
    }))
}

/// POST /api/v1/preview
///
/// Full print preview: resolves the layout from the settings, paginates the
/// records, and places every card with its printed fields.
pub async fn handle_preview(
    State(state): State<AppState>,
    AppJson(request): AppJson<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    check_batch(request.records.len(), state.config.max_records)?;

    let settings = request
        .settings
        .unwrap_or_else(|| state.defaults.clone())
        .normalized();
    let layout = resolve_for(
        settings.page_size,
        settings.card_width_mm,
        settings.card_height_mm,
        &settings.manual_grid,
    );
    let card_settings = settings.card_settings();

    let preview = match request.view {
        PreviewView::Sheet => place_sheet(&layout, &request.records, &card_settings),
        PreviewView::Single => single_card_preview(&layout, &request.records, &card_settings),
    };
    info!(
        "Preview: {} cards on {} {} page(s), {}x{} grid",
        preview.total_cards, preview.total_pages, layout.name, layout.cols, layout.rows
    );

    let card = CardGeometry::new(
        settings.card_width_mm,
        settings.card_height_mm,
        settings.cut_mark_type,
    );

    Ok(Json(PreviewResponse {
        settings,
        card,
        preview,
    }))
}
