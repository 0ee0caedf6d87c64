//! Length units the operator can enter card dimensions in.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::cards::models::{STANDARD_CARD_HEIGHT_MM, STANDARD_CARD_WIDTH_MM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionUnit {
    #[default]
    Mm,
    Cm,
    /// CSS pixel at 96 dpi.
    Px,
}

impl DimensionUnit {
    /// Millimetres per one unit.
    pub fn mm_per_unit(self) -> f64 {
        match self {
            DimensionUnit::Mm => 1.0,
            DimensionUnit::Cm => 10.0,
            DimensionUnit::Px => 0.264583,
        }
    }
}

pub fn to_mm(value: f64, unit: DimensionUnit) -> f64 {
    value * unit.mm_per_unit()
}

/// Converts millimetres into `unit`, rounded to 2 decimals for display.
pub fn from_mm(mm: f64, unit: DimensionUnit) -> f64 {
    (mm / unit.mm_per_unit() * 100.0).round() / 100.0
}

/// Card width × height in some unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardDimensions {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: DimensionUnit,
}

impl CardDimensions {
    /// 85.6 × 54 mm.
    pub fn standard() -> Self {
        CardDimensions {
            width: STANDARD_CARD_WIDTH_MM,
            height: STANDARD_CARD_HEIGHT_MM,
            unit: DimensionUnit::Mm,
        }
    }

    /// `(width_mm, height_mm)`.
    pub fn in_mm(&self) -> (f64, f64) {
        (to_mm(self.width, self.unit), to_mm(self.height, self.unit))
    }
}
