// Tooltip state derived from the tracked input line

use crate::catalog::CatalogEntry;

/// Where the tooltip sits, relative to the surface's container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipAnchor {
    pub column: u16,
    pub row: u16,
}

impl TooltipAnchor {
    /// Left edge, directly below a surface of `rendered_height` rows
    pub fn below(rendered_height: u16) -> Self {
        Self {
            column: 0,
            row: rendered_height,
        }
    }
}

/// Visible tooltip. Hidden tooltips are simply `None` on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub entry: &'static CatalogEntry,
    pub anchor: TooltipAnchor,
}

impl Tooltip {
    /// "🟢 低危險度 ls：列出目錄內容。"
    pub fn text(&self) -> String {
        format!("{} {}", self.entry.danger.badge(), self.entry.summary)
    }
}
