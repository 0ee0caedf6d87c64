//! Sheet placement — positions every resolved card on its printed page.
//!
//! Cards fill each page row-major. The grid is centred horizontally inside
//! the margins and starts at the top margin. A grid wider than the paper
//! (manual override, oversized card) gets a negative or overflowing origin;
//! the preview shows the overflow rather than hiding it.

use serde::Serialize;

use crate::cards::fields::resolve_fields;
use crate::cards::models::{GlobalCardSettings, Record};
use crate::layout::paginator::{paginate, total_pages};
use crate::layout::resolver::LayoutConfig;

/// One card at its position on a sheet, in millimetres from the paper's top-left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCard {
    /// Position in the full record sequence.
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub name: String,
    pub id: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetPage {
    pub index: usize,
    pub cards: Vec<PlacedCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetPreview {
    pub layout: LayoutConfig,
    pub total_cards: usize,
    pub total_pages: usize,
    pub pages: Vec<SheetPage>,
}

/// Top-left corner of the card grid on the paper.
pub fn grid_origin(layout: &LayoutConfig, card_width_mm: f64) -> (f64, f64) {
    let cols = f64::from(layout.cols);
    let grid_width = cols * card_width_mm + (cols - 1.0) * layout.gap;
    let content_width = layout.width - 2.0 * layout.margin;
    (
        layout.margin + (content_width - grid_width) / 2.0,
        layout.margin,
    )
}

/// Lays out every record across as many sheets as needed.
pub fn place_sheet(
    layout: &LayoutConfig,
    records: &[Record],
    settings: &GlobalCardSettings,
) -> SheetPreview {
    let card_w = settings.card_width_mm;
    let card_h = settings.card_height_mm;
    let (origin_x, origin_y) = grid_origin(layout, card_w);
    let cols = layout.cols.max(1);

    let pages = paginate(records, layout.cards_per_page)
        .into_iter()
        .map(|page| {
            let cards = page
                .records
                .iter()
                .zip(page.global_indices())
                .enumerate()
                .map(|(slot, (record, index))| {
                    let slot = u32::try_from(slot).unwrap_or(u32::MAX);
                    let (row, col) = (slot / cols, slot % cols);
                    let fields = resolve_fields(record, index, settings);
                    PlacedCard {
                        index,
                        row,
                        col,
                        x_mm: origin_x + f64::from(col) * (card_w + layout.gap),
                        y_mm: origin_y + f64::from(row) * (card_h + layout.gap),
                        width_mm: card_w,
                        height_mm: card_h,
                        name: fields.name,
                        id: fields.id,
                        date: fields.date,
                    }
                })
                .collect();
            SheetPage {
                index: page.index,
                cards,
            }
        })
        .collect();

    SheetPreview {
        layout: layout.clone(),
        total_cards: records.len(),
        total_pages: total_pages(records.len(), layout.cards_per_page),
        pages,
    }
}

/// Design view: only the first record, as card 0 on a single sheet.
pub fn single_card_preview(
    layout: &LayoutConfig,
    records: &[Record],
    settings: &GlobalCardSettings,
) -> SheetPreview {
    let first = records.get(..1).unwrap_or_default();
    let mut preview = place_sheet(layout, first, settings);
    preview.total_cards = records.len();
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paper::PageSize;
    use crate::layout::resolver::{resolve_for, ManualGridConfig};

    fn make_records(n: usize) -> Vec<Record> {
        (0..n).map(|i| Record::new(format!("Person {i}"))).collect()
    }

    fn make_settings() -> GlobalCardSettings {
        GlobalCardSettings::default()
    }

    fn a4_auto() -> LayoutConfig {
        resolve_for(PageSize::A4, 85.6, 54.0, &ManualGridConfig::default())
    }

    #[test]
    fn test_empty_records_render_no_sheet() {
        let preview = place_sheet(&a4_auto(), &[], &make_settings());
        assert_eq!(preview.total_pages, 0);
        assert!(preview.pages.is_empty());
    }

    #[test]
    fn test_cards_fill_row_major_and_paginate() {
        let layout = a4_auto(); // 2 x 4
        let preview = place_sheet(&layout, &make_records(11), &make_settings());
        assert_eq!(preview.total_pages, 2);
        assert_eq!(preview.pages[0].cards.len(), 8);
        assert_eq!(preview.pages[1].cards.len(), 3);

        let third = &preview.pages[0].cards[2];
        assert_eq!((third.row, third.col), (1, 0));
        let last = &preview.pages[1].cards[2];
        assert_eq!(last.index, 10);
        assert_eq!((last.row, last.col), (1, 0));
    }

    #[test]
    fn test_generated_ids_use_global_index() {
        let preview = place_sheet(&a4_auto(), &make_records(9), &make_settings());
        // Seed 010701, ninth card (index 8) is on page 2.
        assert_eq!(preview.pages[1].cards[0].id, "UT010709");
        assert_eq!(preview.pages[0].cards[3].id, "UT010704");
    }

    #[test]
    fn test_grid_is_centred_inside_margins() {
        let layout = a4_auto();
        let (x, y) = grid_origin(&layout, 85.6);
        // grid width 2*85.6 + 4 = 175.2, content width 194 => 8 + 9.4
        assert!((x - 17.4).abs() < 1e-9);
        assert_eq!(y, 8.0);

        let preview = place_sheet(&layout, &make_records(2), &make_settings());
        let second = &preview.pages[0].cards[1];
        assert!((second.x_mm - (17.4 + 89.6)).abs() < 1e-9);
        assert_eq!(second.y_mm, 8.0);
    }

    #[test]
    fn test_overflowing_manual_grid_keeps_negative_origin() {
        let layout = resolve_for(PageSize::A4, 85.6, 54.0, &ManualGridConfig::fixed(4, 2));
        let (x, _) = grid_origin(&layout, 85.6);
        assert!(x < 0.0);
    }

    #[test]
    fn test_single_card_preview_shows_first_record_only() {
        let preview = single_card_preview(&a4_auto(), &make_records(5), &make_settings());
        assert_eq!(preview.total_pages, 1);
        assert_eq!(preview.total_cards, 5);
        assert_eq!(preview.pages[0].cards.len(), 1);
        assert_eq!(preview.pages[0].cards[0].name, "Person 0");
        assert_eq!(preview.pages[0].cards[0].index, 0);
    }

    #[test]
    fn test_cr80_sheet_has_one_card_per_page() {
        let layout = resolve_for(PageSize::CR80, 85.6, 54.0, &ManualGridConfig::default());
        let preview = place_sheet(&layout, &make_records(3), &make_settings());
        assert_eq!(preview.total_pages, 3);
        for page in &preview.pages {
            assert_eq!(page.cards.len(), 1);
            assert!(page.cards[0].x_mm.abs() < 1e-9);
            assert_eq!(page.cards[0].y_mm, 0.0);
        }
    }
}
