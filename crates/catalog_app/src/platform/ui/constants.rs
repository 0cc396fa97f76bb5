use std::time::Duration;

pub const TITLE: &str = "Product List";
pub const SEARCH_TITLE: &str = " Search ";
pub const SEARCH_PLACEHOLDER: &str = "Search for products...";
pub const HEADER_NAME: &str = "Product Name";
pub const HEADER_PRICE: &str = "Price";
pub const HEADER_CATEGORY: &str = "Category";
pub const PREVIOUS_LABEL: &str = "< Previous";
pub const NEXT_LABEL: &str = "Next >";
pub const LOADING_SPINNER: &str = "Loading...";
pub const LOADING_TEXT: &str = "Loading products...";
pub const ERROR_HEADING: &str = "Error fetching products:";
pub const ERROR_HINT: &str = "Press F5 to retry, Esc to quit";
pub const KEY_HINTS: &str =
    " Type: search | Ctrl+U: clear | ←/→: page | ↑/↓: scroll | Tab: page size | F5: refresh | Esc: quit";

/// Event poll timeout; also paces the render loop.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);
