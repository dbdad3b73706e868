use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::ports::ProductSource;

/// Awaits one catalog read and turns the outcome into the event that settles it.
pub async fn request_product_catalog<S: ProductSource + ?Sized>(source: &S) -> DomainEvent {
    match source.fetch_products().await {
        Ok(products) => {
            info!("catalog loaded: {} products", products.len());
            DomainEvent::ProductsLoaded {
                products,
                fetched_at: chrono::Utc::now(),
            }
        }
        Err(e) => {
            warn!("catalog fetch failed: {e:#}");
            DomainEvent::ProductsFailed {
                message: e.to_string(),
            }
        }
    }
}

/// Runs commands against the store. Async results come back over a channel
/// and are applied in arrival order by `tick` or `next_event`.
pub struct AppKernel<S> {
    pub store: AppStore,
    source: Arc<S>,
    runtime: Handle,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<S> AppKernel<S>
where
    S: ProductSource,
{
    /// Uses the runtime the caller is running in, or a private background one.
    pub fn new(store: AppStore, source: S) -> anyhow::Result<Self> {
        let runtime = crate::async_runtime::handle()?;
        Ok(Self::with_runtime(store, source, runtime))
    }

    pub fn with_runtime(store: AppStore, source: S, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::channel(catalog_config::EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            source: Arc::new(source),
            runtime,
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::FetchProducts => {
                // Loading is visible before the request has even been sent.
                self.store.apply(DomainEvent::ProductsRequested);
                info!("catalog fetch requested");

                let source = self.source.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let ev = request_product_catalog(source.as_ref()).await;
                    if tx.send(ev).await.is_err() {
                        warn!("catalog kernel dropped before fetch resolved");
                    }
                });
            }
        }
    }

    /// Applies every event that has already arrived. Returns how many were applied.
    pub fn tick(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
            applied += 1;
        }
        applied
    }

    /// Waits for the next event and applies it.
    pub async fn next_event(&mut self) -> bool {
        match self.rx.recv().await {
            Some(ev) => {
                self.store.apply(ev);
                true
            }
            None => false,
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}
