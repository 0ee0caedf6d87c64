//! Card-local geometry: content box, signature box, and cutting guides.
//!
//! Coordinates are millimetres with the origin at the card's top-left corner.
//! Crop ticks sit outside the card, so some coordinates are negative or exceed
//! the card size.
#![allow(dead_code)]

use serde::Serialize;

use crate::cards::models::CutMarkType;

/// Inner padding between the card edge and its content.
pub const CONTENT_PADDING_MM: f64 = 4.0;
/// Length of each crop tick.
pub const CROP_MARK_LENGTH_MM: f64 = 5.0;
pub const SIGNATURE_BOX_WIDTH_MM: f64 = 35.0;
pub const SIGNATURE_BOX_HEIGHT_MM: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// One printed cutting guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CutGuide {
    /// Outline drawn on the card edge.
    Outline { rect: Rect },
    /// Straight tick from `from` to `to`.
    Tick { from: (f64, f64), to: (f64, f64) },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGeometry {
    pub width: f64,
    pub height: f64,
    pub cut_mark_type: CutMarkType,
    pub content: Rect,
    /// Empty box in the bottom-right corner, left blank for a signature or stamp.
    pub signature_box: Rect,
    pub cut_guides: Vec<CutGuide>,
}

impl CardGeometry {
    pub fn new(width: f64, height: f64, cut_mark_type: CutMarkType) -> Self {
        let content = Rect::new(
            CONTENT_PADDING_MM,
            CONTENT_PADDING_MM,
            (width - 2.0 * CONTENT_PADDING_MM).max(0.0),
            (height - 2.0 * CONTENT_PADDING_MM).max(0.0),
        );
        let signature_box = Rect::new(
            width - CONTENT_PADDING_MM - SIGNATURE_BOX_WIDTH_MM,
            height - CONTENT_PADDING_MM - SIGNATURE_BOX_HEIGHT_MM,
            SIGNATURE_BOX_WIDTH_MM,
            SIGNATURE_BOX_HEIGHT_MM,
        );

        CardGeometry {
            width,
            height,
            cut_mark_type,
            content,
            signature_box,
            cut_guides: cut_guides(width, height, cut_mark_type),
        }
    }

    /// Bounding box of the card including any guides drawn outside it.
    pub fn outer_bounds(&self) -> Rect {
        match self.cut_mark_type {
            CutMarkType::Crop => Rect::new(
                -CROP_MARK_LENGTH_MM,
                -CROP_MARK_LENGTH_MM,
                self.width + 2.0 * CROP_MARK_LENGTH_MM,
                self.height + 2.0 * CROP_MARK_LENGTH_MM,
            ),
            CutMarkType::None | CutMarkType::Border => {
                Rect::new(0.0, 0.0, self.width, self.height)
            }
        }
    }
}

fn cut_guides(width: f64, height: f64, cut_mark_type: CutMarkType) -> Vec<CutGuide> {
    match cut_mark_type {
        CutMarkType::None => Vec::new(),
        CutMarkType::Border => vec![CutGuide::Outline {
            rect: Rect::new(0.0, 0.0, width, height),
        }],
        CutMarkType::Crop => {
            let len = CROP_MARK_LENGTH_MM;
            // Each corner: one horizontal tick along the edge line, one vertical.
            [
                (0.0, 0.0, -len, -len),
                (width, 0.0, len, -len),
                (0.0, height, -len, len),
                (width, height, len, len),
            ]
            .into_iter()
            .flat_map(|(x, y, dx, dy)| {
                [
                    CutGuide::Tick {
                        from: (x + dx, y),
                        to: (x, y),
                    },
                    CutGuide::Tick {
                        from: (x, y + dy),
                        to: (x, y),
                    },
                ]
            })
            .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_guides_for_none() {
        let geometry = CardGeometry::new(85.6, 54.0, CutMarkType::None);
        assert!(geometry.cut_guides.is_empty());
        assert_eq!(geometry.outer_bounds(), Rect::new(0.0, 0.0, 85.6, 54.0));
    }

    #[test]
    fn test_border_is_single_outline() {
        let geometry = CardGeometry::new(85.6, 54.0, CutMarkType::Border);
        assert_eq!(
            geometry.cut_guides,
            vec![CutGuide::Outline {
                rect: Rect::new(0.0, 0.0, 85.6, 54.0)
            }]
        );
    }

    #[test]
    fn test_crop_has_two_ticks_per_corner_outside_card() {
        let geometry = CardGeometry::new(85.6, 54.0, CutMarkType::Crop);
        assert_eq!(geometry.cut_guides.len(), 8);

        for guide in &geometry.cut_guides {
            let CutGuide::Tick { from, to } = guide else {
                panic!("crop guides must be ticks, got {guide:?}");
            };
            let length = ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();
            assert!((length - CROP_MARK_LENGTH_MM).abs() < 1e-9);
            // Ticks end on a corner and point away from the card.
            let outside = from.0 < 0.0 || from.0 > 85.6 || from.1 < 0.0 || from.1 > 54.0;
            assert!(outside, "tick start {from:?} should lie outside the card");
        }

        let bounds = geometry.outer_bounds();
        assert_eq!(bounds.x, -5.0);
        assert!((bounds.width - 95.6).abs() < 1e-9);
    }

    #[test]
    fn test_content_and_signature_boxes() {
        let geometry = CardGeometry::new(85.6, 54.0, CutMarkType::None);
        assert_eq!(geometry.content.x, 4.0);
        assert!((geometry.content.width - 77.6).abs() < 1e-9);
        assert!((geometry.signature_box.x - 46.6).abs() < 1e-9);
        assert_eq!(geometry.signature_box.y, 38.0);
    }

    #[test]
    fn test_tiny_card_content_does_not_go_negative() {
        let geometry = CardGeometry::new(5.0, 5.0, CutMarkType::None);
        assert_eq!(geometry.content.width, 0.0);
        assert_eq!(geometry.content.height, 0.0);
    }
}
