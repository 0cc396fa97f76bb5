use crate::PageSize;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Table(TableView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub query: String,
    pub rows: Vec<ProductRowView>,
    pub pager: PagerView,
    pub filtered_count: usize,
    pub total_count: usize,
    pub skipped_rows: usize,
    pub fetched_at: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRowView {
    pub id: u64,
    pub name: String,
    /// Already formatted, e.g. `$1.50`.
    pub price: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    /// One-based.
    pub page_number: usize,
    pub page_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
    pub page_size: PageSize,
    pub page_size_options: Vec<PageSize>,
}
