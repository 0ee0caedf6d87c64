//! Layout Resolver — decides how many cards fit on one sheet.
//!
//! Resolution runs in strict priority order:
//! 1. Single-card paper (CR80): always 1×1, no margin, no gap.
//! 2. Manual grid: the operator's cols × rows, trusted as-is.
//! 3. Auto-fit: the largest grid that fits inside the margins.
//!
//! # Auto-fit rule
//! `N` items of size `S` separated by gaps `G` fit into `W` when
//! `N*S + (N-1)*G <= W`, i.e. `N = floor((W + G) / (S + G))`.
//! Each axis is clamped to at least 1, so an oversized card still yields a
//! 1×1 grid that visibly overflows the page.
//!
//! The resolver never fails. Degenerate inputs collapse to the 1×1 minimum.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::paper::{PageSize, PaperSize};

/// Print margin around the sheet, in millimetres.
pub const SHEET_MARGIN_MM: f64 = 8.0;
/// Gap between neighbouring cards, in millimetres.
pub const CARD_GAP_MM: f64 = 4.0;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Operator-fixed grid. `cols`/`rows` are only read while `enabled` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualGridConfig {
    pub enabled: bool,
    pub cols: u32,
    pub rows: u32,
}

impl Default for ManualGridConfig {
    fn default() -> Self {
        ManualGridConfig {
            enabled: false,
            cols: 2,
            rows: 5,
        }
    }
}

impl ManualGridConfig {
    #[cfg(test)]
    pub fn fixed(cols: u32, rows: u32) -> Self {
        ManualGridConfig {
            enabled: true,
            cols,
            rows,
        }
    }

    /// Same grid with `cols`/`rows` raised to at least 1.
    pub fn normalized(self) -> Self {
        ManualGridConfig {
            enabled: self.enabled,
            cols: self.cols.max(1),
            rows: self.rows.max(1),
        }
    }
}

/// Which branch of the resolver produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    SingleCard,
    Manual,
    AutoFit,
}

/// Derived sheet layout. Recomputed from scratch whenever an input changes.
///
/// `cards_per_page == cols * rows` always holds and both axes are at least 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub width: f64,
    pub height: f64,
    pub name: &'static str,
    pub cols: u32,
    pub rows: u32,
    pub cards_per_page: u64,
    pub margin: f64,
    pub gap: f64,
    pub mode: LayoutMode,
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Resolves the sheet grid for the given paper, card size, and manual override.
pub fn resolve(
    paper: &PaperSize,
    card_width_mm: f64,
    card_height_mm: f64,
    manual_grid: &ManualGridConfig,
) -> LayoutConfig {
    let layout = if paper.id.is_single_card() {
        sheet_layout(paper, 1, 1, 0.0, 0.0, LayoutMode::SingleCard)
    } else if manual_grid.enabled {
        let grid = manual_grid.normalized();
        sheet_layout(
            paper,
            grid.cols,
            grid.rows,
            SHEET_MARGIN_MM,
            CARD_GAP_MM,
            LayoutMode::Manual,
        )
    } else {
        let usable_width = paper.width - 2.0 * SHEET_MARGIN_MM;
        let usable_height = paper.height - 2.0 * SHEET_MARGIN_MM;
        let cols = fit_count(usable_width, card_width_mm, CARD_GAP_MM);
        let rows = fit_count(usable_height, card_height_mm, CARD_GAP_MM);
        sheet_layout(
            paper,
            cols,
            rows,
            SHEET_MARGIN_MM,
            CARD_GAP_MM,
            LayoutMode::AutoFit,
        )
    };

    debug!(
        "Resolved {} layout: {:?} {}x{} ({} per page)",
        layout.name, layout.mode, layout.cols, layout.rows, layout.cards_per_page
    );
    layout
}

/// Convenience wrapper that looks the paper up by identifier.
pub fn resolve_for(
    page_size: PageSize,
    card_width_mm: f64,
    card_height_mm: f64,
    manual_grid: &ManualGridConfig,
) -> LayoutConfig {
    resolve(&page_size.paper(), card_width_mm, card_height_mm, manual_grid)
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// How many items of `item` size with `gap` between them fit into `space`.
///
/// Returns at least 1. Non-positive or non-finite item sizes count as a single
/// item, as does any space too small to hold one.
fn fit_count(space: f64, item: f64, gap: f64) -> u32 {
    if !item.is_finite() || item <= 0.0 || !space.is_finite() {
        return 1;
    }
    let n = ((space + gap) / (item + gap)).floor();
    if n < 1.0 {
        1
    } else {
        // Float-to-int casts saturate, so huge ratios cannot wrap.
        n as u32
    }
}

fn sheet_layout(
    paper: &PaperSize,
    cols: u32,
    rows: u32,
    margin: f64,
    gap: f64,
    mode: LayoutMode,
) -> LayoutConfig {
    LayoutConfig {
        page_size: paper.id,
        width: paper.width,
        height: paper.height,
        name: paper.name,
        cols,
        rows,
        cards_per_page: u64::from(cols) * u64::from(rows),
        margin,
        gap,
        mode,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn auto() -> ManualGridConfig {
        ManualGridConfig::default()
    }

    fn assert_invariant(layout: &LayoutConfig) {
        assert!(layout.cols >= 1);
        assert!(layout.rows >= 1);
        assert_eq!(
            layout.cards_per_page,
            u64::from(layout.cols) * u64::from(layout.rows)
        );
    }

    // ── single-card mode ────────────────────────────────────────────────────

    #[test]
    fn test_cr80_is_always_one_card() {
        let layout = resolve_for(PageSize::CR80, 85.6, 54.0, &auto());
        assert_eq!((layout.cols, layout.rows, layout.cards_per_page), (1, 1, 1));
        assert_eq!(layout.margin, 0.0);
        assert_eq!(layout.gap, 0.0);
        assert_eq!(layout.width, 85.6);
        assert_eq!(layout.height, 54.0);
        assert_eq!(layout.mode, LayoutMode::SingleCard);
    }

    #[test]
    fn test_cr80_ignores_manual_grid_and_card_size() {
        let layout = resolve_for(PageSize::CR80, 10.0, 10.0, &ManualGridConfig::fixed(4, 6));
        assert_eq!((layout.cols, layout.rows, layout.cards_per_page), (1, 1, 1));
        assert_eq!(layout.margin, 0.0);
        assert_eq!(layout.gap, 0.0);

        let layout = resolve_for(PageSize::CR80, -5.0, 0.0, &auto());
        assert_eq!(layout.cards_per_page, 1);
    }

    // ── manual grid mode ────────────────────────────────────────────────────

    #[test]
    fn test_manual_grid_is_trusted() {
        let layout = resolve_for(PageSize::A4, 85.6, 54.0, &ManualGridConfig::fixed(3, 4));
        assert_eq!(layout.cols, 3);
        assert_eq!(layout.rows, 4);
        assert_eq!(layout.cards_per_page, 12);
        assert_eq!(layout.margin, SHEET_MARGIN_MM);
        assert_eq!(layout.gap, CARD_GAP_MM);
        assert_eq!(layout.mode, LayoutMode::Manual);
    }

    #[test]
    fn test_manual_grid_does_not_check_physical_fit() {
        // 10 columns of 85.6mm cards cannot fit on A4, but the override wins.
        let layout = resolve_for(PageSize::A4, 85.6, 54.0, &ManualGridConfig::fixed(10, 15));
        assert_eq!(layout.cards_per_page, 150);
    }

    #[test]
    fn test_manual_grid_zero_clamps_to_one() {
        let layout = resolve_for(PageSize::A3, 85.6, 54.0, &ManualGridConfig::fixed(0, 0));
        assert_eq!((layout.cols, layout.rows, layout.cards_per_page), (1, 1, 1));
    }

    #[test]
    fn test_disabled_manual_grid_is_ignored() {
        let grid = ManualGridConfig {
            enabled: false,
            cols: 7,
            rows: 7,
        };
        let layout = resolve_for(PageSize::A4, 85.6, 54.0, &grid);
        assert_eq!(layout.mode, LayoutMode::AutoFit);
        assert_ne!(layout.cards_per_page, 49);
    }

    // ── auto-fit mode ───────────────────────────────────────────────────────

    #[test]
    fn test_auto_fit_a4_standard_card() {
        // usable 194 x 281: floor(198 / 89.6) = 2, floor(285 / 58) = 4
        let layout = resolve_for(PageSize::A4, 85.6, 54.0, &auto());
        assert_eq!(layout.cols, 2);
        assert_eq!(layout.rows, 4);
        assert_eq!(layout.cards_per_page, 8);
        assert_eq!(layout.margin, 8.0);
        assert_eq!(layout.gap, 4.0);
        assert_eq!(layout.mode, LayoutMode::AutoFit);
    }

    #[test]
    fn test_auto_fit_larger_sheets() {
        // A3 usable 281 x 404: floor(285 / 89.6) = 3, floor(408 / 58) = 7
        let layout = resolve_for(PageSize::A3, 85.6, 54.0, &auto());
        assert_eq!((layout.cols, layout.rows), (3, 7));
        assert_eq!(layout.cards_per_page, 21);

        // A2 usable 404 x 578: floor(408 / 89.6) = 4, floor(582 / 58) = 10
        let layout = resolve_for(PageSize::A2, 85.6, 54.0, &auto());
        assert_eq!((layout.cols, layout.rows), (4, 10));
        assert_eq!(layout.cards_per_page, 40);
    }

    #[test]
    fn test_auto_fit_exact_boundary() {
        // Two 95mm cards plus one 4mm gap is exactly the 194mm usable width.
        let layout = resolve_for(PageSize::A4, 95.0, 54.0, &auto());
        assert_eq!(layout.cols, 2);
        let layout = resolve_for(PageSize::A4, 95.01, 54.0, &auto());
        assert_eq!(layout.cols, 1);
    }

    #[test]
    fn test_oversized_card_clamps_to_one() {
        let layout = resolve_for(PageSize::A4, 500.0, 500.0, &auto());
        assert_eq!((layout.cols, layout.rows, layout.cards_per_page), (1, 1, 1));
    }

    #[test]
    fn test_degenerate_card_sizes_clamp_to_one() {
        for (w, h) in [(0.0, 0.0), (-10.0, -3.0), (-4.0, -4.0), (f64::NAN, f64::INFINITY)] {
            let layout = resolve_for(PageSize::A4, w, h, &auto());
            assert_eq!(layout.cols, 1, "width {w} should clamp");
            assert_eq!(layout.rows, 1, "height {h} should clamp");
            assert_invariant(&layout);
        }
    }

    #[test]
    fn test_degenerate_axis_clamps_independently() {
        let layout = resolve_for(PageSize::A4, 0.0, 54.0, &auto());
        assert_eq!(layout.cols, 1);
        assert_eq!(layout.rows, 4);
    }

    #[test]
    fn test_paper_smaller_than_margins_clamps_to_one() {
        let tiny = PaperSize {
            id: PageSize::A4,
            width: 10.0,
            height: 12.0,
            name: "tiny",
        };
        let layout = resolve(&tiny, 85.6, 54.0, &auto());
        assert_eq!((layout.cols, layout.rows), (1, 1));
    }

    #[test]
    fn test_invariant_holds_across_inputs() {
        for size in PageSize::ALL {
            for w in [1.0, 20.0, 54.0, 85.6, 150.0, 400.0] {
                for h in [1.0, 30.0, 54.0, 85.6, 300.0] {
                    assert_invariant(&resolve_for(size, w, h, &auto()));
                }
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = resolve_for(PageSize::A3, 63.0, 88.0, &auto());
        let b = resolve_for(PageSize::A3, 63.0, 88.0, &auto());
        assert_eq!(a, b);
    }
}
