use std::ops::Range;

use crate::{PageSize, Product, ViewState};

/// Pager information derived from the filtered row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: PageSize,
    pub filtered_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

/// Output of [`project_table`]: the rows of the current page plus pager info.
#[derive(Debug, Clone, PartialEq)]
pub struct TableProjection<'a> {
    pub rows: Vec<&'a Product>,
    pub pager: PagerInfo,
}

/// Products whose field strings contain `query`, case-insensitively.
/// An empty query keeps every product.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return products.iter().collect();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            product
                .field_strings()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Number of pages for `filtered_count` rows; never less than one.
pub fn page_count(filtered_count: usize, page_size: PageSize) -> usize {
    filtered_count.div_ceil(page_size.rows()).max(1)
}

/// Slice bounds of page `page_index` within `filtered_count` rows.
pub fn page_range(filtered_count: usize, page_index: usize, page_size: PageSize) -> Range<usize> {
    let size = page_size.rows();
    let start = page_index.saturating_mul(size).min(filtered_count);
    let end = page_index
        .saturating_add(1)
        .saturating_mul(size)
        .min(filtered_count);
    start..end
}

/// Pure table pipeline: filter, then slice the current page.
pub fn project_table<'a>(products: &'a [Product], view: &ViewState) -> TableProjection<'a> {
    let filtered = filter_products(products, view.query());
    let filtered_count = filtered.len();
    let page_size = view.page_size();
    let page_count = page_count(filtered_count, page_size);
    let page_index = view.page_index().min(page_count - 1);
    let range = page_range(filtered_count, page_index, page_size);

    let rows = filtered[range].to_vec();
    TableProjection {
        rows,
        pager: PagerInfo {
            page_index,
            page_count,
            page_size,
            filtered_count,
            can_previous: page_index > 0,
            can_next: page_index + 1 < page_count,
        },
    }
}
