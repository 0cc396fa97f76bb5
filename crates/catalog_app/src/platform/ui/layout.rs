use ratatui::layout::{Constraint, Layout, Rect};

/// Regions of the table screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableAreas {
    pub search: Rect,
    pub table: Rect,
    pub pager: Rect,
    pub status: Rect,
}

/// Splits the full frame into the title bar, the body and the key-hint footer.
pub fn frame_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area)
}

pub fn table_areas(body: Rect) -> TableAreas {
    let [search, table, pager, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(body);
    TableAreas {
        search,
        table,
        pager,
        status,
    }
}

/// Product rows that fit in the table area, leaving room for the borders and
/// the header row.
pub fn table_viewport(table: Rect) -> usize {
    usize::from(table.height.saturating_sub(3))
}

/// Column widths for name, price and category.
pub fn column_widths() -> [Constraint; 3] {
    [
        Constraint::Fill(3),
        Constraint::Length(12),
        Constraint::Fill(2),
    ]
}
