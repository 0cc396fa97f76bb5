use catalog_core::{Effect, FetchOutcome, Msg, Product};
use catalog_engine::{EngineConfig, EngineError, EngineEvent, EngineHandle, ProductRecord};
use catalog_logging::{catalog_info, catalog_warn};
use chrono::Local;

/// Executes core effects against the engine and turns engine events back
/// into messages.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        catalog_info!("Starting engine for {}", config.endpoint);
        Ok(Self::with_engine(EngineHandle::new(config)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProducts { fetch_id } => {
                    catalog_info!("FetchProducts fetch_id={}", fetch_id);
                    self.engine.fetch(fetch_id);
                }
                Effect::InvalidateProducts => {
                    catalog_info!("InvalidateProducts");
                    self.engine.invalidate();
                }
            }
        }
    }

    /// Messages for every engine event received since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event, &fetched_at_now()));
        }
        inbox
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }
}

fn fetched_at_now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn map_event(event: EngineEvent, fetched_at: &str) -> Msg {
    match event {
        EngineEvent::FetchCompleted { fetch_id, result } => {
            let outcome = match result {
                Ok(listing) => {
                    catalog_info!(
                        "Fetch {} loaded {} products ({} skipped, {} bytes)",
                        fetch_id,
                        listing.products.len(),
                        listing.skipped,
                        listing.metadata.byte_len
                    );
                    FetchOutcome::Loaded {
                        products: listing.products.iter().map(to_product).collect(),
                        skipped: listing.skipped,
                        fetched_at: fetched_at.to_string(),
                    }
                }
                Err(err) => {
                    catalog_warn!("Fetch {} failed: {}", fetch_id, err.kind);
                    FetchOutcome::Failed {
                        message: err.to_string(),
                    }
                }
            };
            Msg::FetchCompleted { fetch_id, outcome }
        }
    }
}

fn to_product(record: &ProductRecord) -> Product {
    Product::new(record.id, record.title.clone(), record.price, record.category.clone())
}
