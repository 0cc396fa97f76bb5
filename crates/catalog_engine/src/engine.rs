use std::sync::{mpsc, Arc};
use std::thread;

use catalog_logging::{catalog_debug, catalog_info};
use tokio_util::sync::CancellationToken;

use crate::cache::{CacheKey, ProductCache};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchId, DEFAULT_PRODUCTS_ENDPOINT};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub endpoint: String,
    pub fetch: FetchSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PRODUCTS_ENDPOINT.to_string(),
            fetch: FetchSettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("failed to start async runtime: {0}")]
    Runtime(std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Spawn(std::io::Error),
}

enum EngineCommand {
    Fetch { fetch_id: FetchId },
    Invalidate,
    Shutdown,
}

/// Handle to the engine worker thread. Commands are processed in order;
/// completions arrive through [`try_recv`](Self::try_recv).
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone()));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: EngineConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        url::Url::parse(&config.endpoint).map_err(|source| EngineError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            source,
        })?;

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let cache = Arc::new(ProductCache::new(fetcher, config.endpoint));
        let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;

        let worker_cancel = cancel.clone();
        let worker = thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                run_worker(runtime, cache, cmd_rx, event_tx, worker_cancel);
            })
            .map_err(EngineError::Spawn)?;

        Ok(Self {
            cmd_tx,
            event_rx,
            cancel,
            worker: Some(worker),
        })
    }

    pub fn fetch(&self, fetch_id: FetchId) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { fetch_id });
    }

    pub fn invalidate(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Invalidate);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Cancel in-flight fetches and stop the worker. Cancelled fetches never
    /// produce an event.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(
    runtime: tokio::runtime::Runtime,
    cache: Arc<ProductCache>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    cancel: CancellationToken,
) {
    let key = CacheKey::products();
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Fetch { fetch_id } => {
                let cache = Arc::clone(&cache);
                let event_tx = event_tx.clone();
                let cancel = cancel.clone();
                let key = key.clone();
                runtime.spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            catalog_debug!("Fetch {} cancelled", fetch_id);
                        }
                        result = cache.get(&key) => {
                            let _ = event_tx.send(EngineEvent::FetchCompleted { fetch_id, result });
                        }
                    }
                });
            }
            EngineCommand::Invalidate => {
                cache.invalidate(&key);
            }
            EngineCommand::Shutdown => break,
        }
    }
    catalog_info!("Engine worker stopping");
    runtime.shutdown_background();
}
