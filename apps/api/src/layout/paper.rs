//! Static paper-size table.
//!
//! All dimensions are in millimetres. The set of sizes is closed: an unknown
//! identifier fails at deserialization and never reaches the resolver.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Paper size identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Paper size an operator can print onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A3,
    A2,
    /// One card per sheet, sized exactly like an ID-1 card.
    CR80,
}

impl PageSize {
    /// Every size, in the order the operator sees them.
    pub const ALL: [PageSize; 4] = [PageSize::A4, PageSize::A3, PageSize::A2, PageSize::CR80];

    /// Looks up the physical dimensions for this size.
    pub fn paper(self) -> PaperSize {
        match self {
            PageSize::A4 => A4_PAPER,
            PageSize::A3 => A3_PAPER,
            PageSize::A2 => A2_PAPER,
            PageSize::CR80 => CR80_PAPER,
        }
    }

    /// True for the fixed single-card format, which bypasses grid fitting.
    pub fn is_single_card(self) -> bool {
        matches!(self, PageSize::CR80)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Paper dimensions
// ────────────────────────────────────────────────────────────────────────────

/// Physical sheet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperSize {
    pub id: PageSize,
    pub width: f64,
    pub height: f64,
    pub name: &'static str,
}

static A4_PAPER: PaperSize = PaperSize {
    id: PageSize::A4,
    width: 210.0,
    height: 297.0,
    name: "A4",
};

static A3_PAPER: PaperSize = PaperSize {
    id: PageSize::A3,
    width: 297.0,
    height: 420.0,
    name: "A3",
};

static A2_PAPER: PaperSize = PaperSize {
    id: PageSize::A2,
    width: 420.0,
    height: 594.0,
    name: "A2",
};

static CR80_PAPER: PaperSize = PaperSize {
    id: PageSize::CR80,
    width: 85.6,
    height: 54.0,
    name: "Single CR80",
};

/// The full paper table, in display order.
pub fn paper_sizes() -> Vec<PaperSize> {
    PageSize::ALL.iter().map(|size| size.paper()).collect()
}
