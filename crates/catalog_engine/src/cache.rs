//! Result cache for the listing request.
//!
//! One entry per [`CacheKey`]. An entry holds a shared future, so callers that
//! arrive while the request is in flight await the same request, and callers
//! that arrive later get its resolved value without touching the network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catalog_logging::{catalog_debug, catalog_warn};
use futures_util::future::{BoxFuture, FutureExt, Shared};

use crate::{FetchError, Fetcher, ProductListing};

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<ProductListing>, FetchError>>>;

/// Identity of a cached request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(&'static str);

impl CacheKey {
    pub fn products() -> Self {
        Self("products")
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

struct Entry {
    generation: u64,
    future: SharedFetch,
}

#[derive(Default)]
struct Entries {
    by_key: HashMap<CacheKey, Entry>,
    last_generation: u64,
}

pub struct ProductCache {
    fetcher: Arc<dyn Fetcher>,
    url: String,
    entries: Mutex<Entries>,
}

impl ProductCache {
    pub fn new(fetcher: Arc<dyn Fetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Resolve `key`, reusing an in-flight or completed request when present.
    /// A failed request is evicted so the next call fetches again.
    pub async fn get(&self, key: &CacheKey) -> Result<Arc<ProductListing>, FetchError> {
        let (generation, future) = self.entry_for(key);
        let result = future.await;
        if let Err(err) = &result {
            catalog_warn!("Fetch for {} failed: {} ({})", key.as_str(), err, err.kind);
            self.evict(key, generation);
        }
        result
    }

    /// Drop the entry for `key`. Callers already awaiting it still get its
    /// result; the next [`get`](Self::get) issues a new request.
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        let removed = self.lock().by_key.remove(key).is_some();
        catalog_debug!("Invalidated {} (had entry: {})", key.as_str(), removed);
        removed
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.lock().by_key.contains_key(key)
    }

    fn entry_for(&self, key: &CacheKey) -> (u64, SharedFetch) {
        let mut entries = self.lock();
        if let Some(entry) = entries.by_key.get(key) {
            catalog_debug!("Cache hit for {}", key.as_str());
            return (entry.generation, entry.future.clone());
        }

        entries.last_generation += 1;
        let generation = entries.last_generation;
        let fetcher = Arc::clone(&self.fetcher);
        let url = self.url.clone();
        let future = async move { fetcher.fetch_listing(&url).await.map(Arc::new) }
            .boxed()
            .shared();
        entries.by_key.insert(
            key.clone(),
            Entry {
                generation,
                future: future.clone(),
            },
        );
        (generation, future)
    }

    fn evict(&self, key: &CacheKey, generation: u64) {
        let mut entries = self.lock();
        // Only the failed request's own entry; a newer one may have replaced it.
        if entries
            .by_key
            .get(key)
            .is_some_and(|entry| entry.generation == generation)
        {
            entries.by_key.remove(key);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
