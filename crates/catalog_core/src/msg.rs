use crate::{FetchId, PageSize, Product};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The view is up and wants its data.
    Mounted,
    /// User asked to drop the cached listing and fetch again.
    RefreshRequested,
    /// Engine resolved a fetch.
    FetchCompleted {
        fetch_id: FetchId,
        outcome: FetchOutcome,
    },
    /// User edited the search box (full text).
    QueryChanged(String),
    /// User picked a page size.
    PageSizeSelected(PageSize),
    NextPageClicked,
    PreviousPageClicked,
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded {
        products: Vec<Product>,
        /// Malformed rows dropped while decoding.
        skipped: usize,
        fetched_at: String,
    },
    Failed {
        message: String,
    },
}
