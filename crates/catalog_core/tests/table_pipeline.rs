use catalog_core::{filter_products, page_count, page_range, project_table, PageSize, Product, ViewState};
use pretty_assertions::assert_eq;

fn sample() -> Vec<Product> {
    vec![
        Product::new(1, "Apple", 1.5, "Fruit"),
        Product::new(2, "Bread", 2.25, "Bakery"),
    ]
}

fn numbered(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| Product::new(id, format!("Item {id}"), id as f64, "Misc"))
        .collect()
}

#[test]
fn empty_query_keeps_every_row_on_one_page() {
    let products = sample();
    let projection = project_table(&products, &ViewState::new(PageSize::Five));

    assert_eq!(projection.rows.len(), 2);
    assert_eq!(projection.pager.page_count, 1);
    assert_eq!(projection.pager.filtered_count, 2);
    assert!(!projection.pager.can_previous);
    assert!(!projection.pager.can_next);
}

#[test]
fn query_matches_category_case_insensitively() {
    let products = sample();
    let filtered = filter_products(&products, "fruit");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Apple");
}

#[test]
fn query_matches_numeric_fields_by_their_string_form() {
    let products = sample();

    let by_price = filter_products(&products, "2.25");
    assert_eq!(by_price.len(), 1);
    assert_eq!(by_price[0].title, "Bread");

    let by_id = filter_products(&products, "1");
    assert_eq!(by_id.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

    // Default decimal formatting has no trailing zeros.
    assert!(filter_products(&products, "1.50").is_empty());
}

#[test]
fn filtered_rows_contain_query_and_excluded_rows_do_not() {
    let products = vec![
        Product::new(10, "Red Lipstick", 12.99, "beauty"),
        Product::new(11, "Eyeshadow Palette", 19.5, "beauty"),
        Product::new(12, "Dog Food", 7.0, "groceries"),
        Product::new(13, "Cat Food", 6.25, "groceries"),
        Product::new(14, "Desk Lamp", 25.0, "furniture"),
    ];

    for query in ["food", "BEAUTY", "e", "2", "lamp", "zzz", "6.25"] {
        let needle = query.to_lowercase();
        let filtered = filter_products(&products, query);
        for product in &products {
            let matches = product
                .field_strings()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle));
            let kept = filtered.iter().any(|p| p.id == product.id);
            assert_eq!(kept, matches, "query {query:?} product {}", product.id);
        }
    }
}

#[test]
fn page_count_is_at_least_one() {
    for size in PageSize::ALL {
        assert_eq!(page_count(0, size), 1);
        for count in 1..=120usize {
            let expected = count.div_ceil(size.rows()).max(1);
            assert_eq!(page_count(count, size), expected);
        }
    }
}

#[test]
fn page_range_is_clamped_to_filtered_count() {
    assert_eq!(page_range(12, 0, PageSize::Five), 0..5);
    assert_eq!(page_range(12, 2, PageSize::Five), 10..12);
    assert_eq!(page_range(0, 0, PageSize::Ten), 0..0);
}

#[test]
fn last_of_three_pages_holds_remainder() {
    let products = numbered(12);
    let mut view = ViewState::new(PageSize::Five);
    view.next_page(12);
    view.next_page(12);

    let projection = project_table(&products, &view);
    assert_eq!(projection.pager.page_count, 3);
    assert_eq!(projection.pager.page_index, 2);
    assert_eq!(
        projection.rows.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![11, 12]
    );
    assert!(!projection.pager.can_next);
    assert!(projection.pager.can_previous);
}

#[test]
fn projection_is_stable_for_equal_inputs() {
    let products = numbered(30);
    let mut view = ViewState::new(PageSize::Ten);
    view.set_query("1");
    view.next_page(filter_products(&products, "1").len());

    assert_eq!(project_table(&products, &view), project_table(&products, &view));
}
