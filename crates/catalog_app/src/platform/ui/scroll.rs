use std::ops::Range;

use catalog_core::ProductRowView;

/// Vertical position of the product table inside the current page slice.
///
/// The offset is UI-only state. It snaps back to the top whenever the slice
/// shows different products, and is clamped at render time so the last row
/// never scrolls above the bottom edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TableScroll {
    offset: usize,
    row_ids: Vec<u64>,
}

impl TableScroll {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    /// Resets the offset when the slice holds different products.
    pub fn follow(&mut self, rows: &[ProductRowView]) {
        if !self.row_ids.iter().copied().eq(rows.iter().map(|row| row.id)) {
            self.row_ids = rows.iter().map(|row| row.id).collect();
            self.offset = 0;
        }
    }

    /// Clamps the offset for a viewport of `viewport` rows and returns the
    /// visible row range.
    pub fn clamp(&mut self, row_count: usize, viewport: usize) -> Range<usize> {
        self.offset = self.offset.min(row_count.saturating_sub(viewport));
        self.offset..(self.offset + viewport).min(row_count)
    }
}
