//! Catalog core: pure state machine, table pipeline and view-model helpers.
mod effect;
mod msg;
mod product;
mod state;
mod table;
mod update;
mod view_model;
mod view_state;

pub use effect::Effect;
pub use msg::{FetchOutcome, Msg};
pub use product::{format_price, FetchId, FetchState, Product};
pub use state::AppState;
pub use table::{filter_products, page_count, page_range, project_table, PagerInfo, TableProjection};
pub use update::update;
pub use view_model::{AppViewModel, PagerView, ProductRowView, Screen, TableView};
pub use view_state::{PageMove, PageSize, ViewState};
