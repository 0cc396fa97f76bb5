//! Catalog engine: product listing fetch, decoding and result cache.
mod cache;
mod decode;
mod engine;
mod fetch;
mod types;

pub use cache::{CacheKey, ProductCache};
pub use decode::{decode_listing, DecodeError, DecodedListing};
pub use engine::{EngineConfig, EngineError, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchId, FetchMetadata, ProductListing, ProductRecord,
    DEFAULT_PRODUCTS_ENDPOINT,
};
