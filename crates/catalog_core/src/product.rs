/// Identifier of a fetch issued by the reducer. Completions carrying an older
/// id than the outstanding one are discarded.
pub type FetchId = u64;

/// One catalog entry as supplied by the remote listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn new(id: u64, title: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
        }
    }

    /// String form of every field, in declaration order. Numbers use the
    /// default decimal formatting (`1.5` -> `"1.5"`, `2.0` -> `"2"`).
    pub fn field_strings(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.title.clone(),
            self.price.to_string(),
            self.category.clone(),
        ]
    }
}

/// Tri-state result of the listing request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Success(Vec<Product>),
    Failure(String),
}

/// Currency-prefixed price with two decimals, e.g. `$1.50`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
