use crate::table::{project_table, TableProjection};
use crate::view_model::{AppViewModel, PagerView, ProductRowView, Screen, TableView};
use crate::{format_price, FetchId, FetchState, PageSize, Product, ViewState};

pub(crate) const NO_FURTHER_PAGE: &str = "No further page";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    fetch: FetchState,
    view_state: ViewState,
    outstanding_fetch: Option<FetchId>,
    last_fetch_id: FetchId,
    skipped_rows: usize,
    fetched_at: Option<String>,
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            view_state: ViewState::new(page_size),
            ..Self::default()
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn outstanding_fetch(&self) -> Option<FetchId> {
        self.outstanding_fetch
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match &self.fetch {
            FetchState::Pending => Screen::Loading,
            FetchState::Failure(message) => Screen::Error {
                message: message.clone(),
            },
            FetchState::Success(products) => {
                Screen::Table(self.table_view(project_table(products, &self.view_state), products.len()))
            }
        };
        AppViewModel { screen }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view_state
    }

    pub(crate) fn filtered_count(&self) -> usize {
        match &self.fetch {
            FetchState::Success(products) => {
                crate::filter_products(products, self.view_state.query()).len()
            }
            FetchState::Pending | FetchState::Failure(_) => 0,
        }
    }

    /// Moves to Pending and allocates the id of the fetch about to be issued.
    pub(crate) fn begin_fetch(&mut self) -> FetchId {
        self.last_fetch_id += 1;
        self.outstanding_fetch = Some(self.last_fetch_id);
        self.fetch = FetchState::Pending;
        self.notice = None;
        self.dirty = true;
        self.last_fetch_id
    }

    /// Takes the outstanding fetch if `fetch_id` is the one we are waiting for.
    pub(crate) fn settle_fetch(&mut self, fetch_id: FetchId) -> bool {
        if self.outstanding_fetch == Some(fetch_id) {
            self.outstanding_fetch = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn apply_products(&mut self, products: Vec<Product>, skipped: usize, fetched_at: String) {
        self.fetch = FetchState::Success(products);
        self.skipped_rows = skipped;
        self.fetched_at = Some(fetched_at);
        self.view_state.reset_page();
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.fetch = FetchState::Failure(message);
        self.skipped_rows = 0;
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: Option<&str>) {
        let notice = notice.map(ToOwned::to_owned);
        if self.notice != notice {
            self.notice = notice;
            self.dirty = true;
        }
    }

    fn table_view(&self, projection: TableProjection<'_>, total_count: usize) -> TableView {
        let pager = projection.pager;
        TableView {
            query: self.view_state.query().to_string(),
            rows: projection
                .rows
                .into_iter()
                .map(|product| ProductRowView {
                    id: product.id,
                    name: product.title.clone(),
                    price: format_price(product.price),
                    category: product.category.clone(),
                })
                .collect(),
            pager: PagerView {
                page_number: pager.page_index + 1,
                page_count: pager.page_count,
                can_previous: pager.can_previous,
                can_next: pager.can_next,
                page_size: pager.page_size,
                page_size_options: PageSize::ALL.to_vec(),
            },
            filtered_count: pager.filtered_count,
            total_count,
            skipped_rows: self.skipped_rows,
            fetched_at: self.fetched_at.clone(),
            notice: self.notice.clone(),
        }
    }
}
