// Sheet layout engine.
// Implements: paper table, grid resolution, pagination, card placement, cut guides.
// Everything here is pure and synchronous; handlers call it directly.

pub mod geometry;
pub mod handlers;
pub mod paginator;
pub mod paper;
pub mod resolver;
pub mod sheet;

// Re-export the public API consumed by the route handlers.
pub use geometry::CardGeometry;
pub use paginator::{paginate, total_pages};
pub use paper::{paper_sizes, PageSize, PaperSize};
pub use resolver::{resolve_for, LayoutConfig, ManualGridConfig};
pub use sheet::{place_sheet, single_card_preview, SheetPreview};
