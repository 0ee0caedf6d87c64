//! Records and operator settings shared by the layout and field resolvers.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::layout::{ManualGridConfig, PageSize};

/// Standard ID-1 card width, in millimetres.
pub const STANDARD_CARD_WIDTH_MM: f64 = 85.6;
/// Standard ID-1 card height, in millimetres.
pub const STANDARD_CARD_HEIGHT_MM: f64 = 54.0;

pub const DEFAULT_START_ID: &str = "010701";
pub const DEFAULT_DATE: &str = "02/03/2025";

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

/// One card's printable data. A missing `id` or `date` means "use the
/// generated or default value" and is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            id: None,
            date: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

/// Cutting guide drawn around each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutMarkType {
    #[default]
    None,
    /// Solid outline on the card edge.
    Border,
    /// Short corner ticks outside the card edge.
    Crop,
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub name: f64,
    pub id: f64,
    pub date: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            name: 16.0,
            id: 24.0,
            date: 14.0,
        }
    }
}

/// Everything the operator can configure for a print run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub page_size: PageSize,
    pub card_width_mm: f64,
    pub card_height_mm: f64,
    pub manual_grid: ManualGridConfig,
    pub cut_mark_type: CutMarkType,
    /// Logo edge length in px.
    pub logo_size: f64,
    pub font_sizes: FontSizes,
    /// Vertical nudge of the name line in px.
    pub name_offset: f64,
    pub global_date: String,
    pub start_id: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            page_size: PageSize::A4,
            card_width_mm: STANDARD_CARD_WIDTH_MM,
            card_height_mm: STANDARD_CARD_HEIGHT_MM,
            manual_grid: ManualGridConfig::default(),
            cut_mark_type: CutMarkType::None,
            logo_size: 50.0,
            font_sizes: FontSizes::default(),
            name_offset: 0.0,
            global_date: DEFAULT_DATE.to_string(),
            start_id: DEFAULT_START_ID.to_string(),
        }
    }
}

impl AppSettings {
    /// Clamps operator-controlled values into the ranges the controls allow.
    ///
    /// Card dimensions are left alone: degenerate sizes are the resolver's
    /// concern and it already collapses them to a 1×1 grid.
    pub fn normalized(mut self) -> Self {
        self.manual_grid = self.manual_grid.normalized();
        self.logo_size = clamp_or(self.logo_size, 30.0, 100.0, 50.0);
        self.font_sizes = FontSizes {
            name: clamp_or(self.font_sizes.name, 10.0, 30.0, 16.0),
            id: clamp_or(self.font_sizes.id, 14.0, 40.0, 24.0),
            date: clamp_or(self.font_sizes.date, 8.0, 20.0, 14.0),
        };
        self.name_offset = clamp_or(self.name_offset, -50.0, 50.0, 0.0);
        self
    }

    /// The subset the field resolver and card geometry read.
    pub fn card_settings(&self) -> GlobalCardSettings {
        GlobalCardSettings {
            card_width_mm: self.card_width_mm,
            card_height_mm: self.card_height_mm,
            start_id: self.start_id.clone(),
            global_date: self.global_date.clone(),
            font_sizes: self.font_sizes,
            cut_mark_type: self.cut_mark_type,
        }
    }
}

/// Read-only card inputs for field resolution and card geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalCardSettings {
    pub card_width_mm: f64,
    pub card_height_mm: f64,
    /// Numeric seed for generated IDs. Parsed leniently; garbage counts as 0.
    pub start_id: String,
    /// Fallback date text, shown verbatim.
    pub global_date: String,
    pub font_sizes: FontSizes,
    pub cut_mark_type: CutMarkType,
}

impl Default for GlobalCardSettings {
    fn default() -> Self {
        AppSettings::default().card_settings()
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
