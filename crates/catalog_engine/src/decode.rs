use catalog_logging::catalog_warn;
use serde::Deserialize;
use serde_json::Value;

use crate::ProductRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedListing {
    pub products: Vec<ProductRecord>,
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed JSON body: {0}")]
    InvalidJson(String),
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("response body has no `products` array")]
    MissingProducts,
}

/// Decode the listing envelope `{ "products": [...], ... }`.
///
/// Elements that do not carry a well-typed `id`, `title`, `price` and
/// `category` are dropped and counted instead of failing the whole listing.
pub fn decode_listing(bytes: &[u8]) -> Result<DecodedListing, DecodeError> {
    let body: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;
    let envelope = body.as_object().ok_or(DecodeError::NotAnObject)?;
    let items = envelope
        .get("products")
        .and_then(Value::as_array)
        .ok_or(DecodeError::MissingProducts)?;

    let mut products = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for (index, item) in items.iter().enumerate() {
        match ProductRecord::deserialize(item) {
            Ok(record) => products.push(record),
            Err(err) => {
                catalog_warn!("Skipping malformed product at index {}: {}", index, err);
                skipped += 1;
            }
        }
    }

    Ok(DecodedListing { products, skipped })
}
