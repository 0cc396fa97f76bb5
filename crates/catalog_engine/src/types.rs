use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

pub type FetchId = u64;

pub const DEFAULT_PRODUCTS_ENDPOINT: &str = "https://dummyjson.com/products";

/// One product as it appears in the listing envelope. Fields beyond these
/// four are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub products: Vec<ProductRecord>,
    /// Array elements rejected as malformed.
    pub skipped: usize,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    FetchCompleted {
        fetch_id: FetchId,
        result: Result<Arc<ProductListing>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    RedirectLimitExceeded,
    HttpStatus(u16),
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Parse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Parse => write!(f, "malformed response"),
        }
    }
}
