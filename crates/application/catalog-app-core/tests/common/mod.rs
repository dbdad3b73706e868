#![allow(dead_code)]

use catalog_app_core::ports::ProductSource;
use catalog_core::Product;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub fn product(id: u64, title: &str, price: f64, description: &str, image: &str) -> Product {
    Product::new(id, title, price, description, image)
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "A", 9.99, "short", "u"),
        product(2, "B", 10.0, &"long ".repeat(60), "v"),
        product(3, "C", 0.5, "third", "w"),
    ]
}

/// Resolves every call with the same outcome and counts calls.
pub struct FixedSource {
    outcome: Result<Vec<Product>, String>,
    calls: Arc<AtomicUsize>,
}

impl FixedSource {
    pub fn ok(products: Vec<Product>) -> Self {
        Self {
            outcome: Ok(products),
            calls: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Arc::default(),
        }
    }

    /// Shared handle on the call count, readable after the source moves into a kernel.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait::async_trait]
impl ProductSource for FixedSource {
    async fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(products) => Ok(products.clone()),
            Err(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }
}

/// Each call takes the next scripted outcome and holds it until its gate opens.
#[derive(Default)]
pub struct GatedSource {
    script: Mutex<VecDeque<(oneshot::Receiver<()>, Result<Vec<Product>, String>)>>,
}

impl GatedSource {
    pub fn push(&self, outcome: Result<Vec<Product>, String>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back((rx, outcome));
        tx
    }
}

#[async_trait::async_trait]
impl ProductSource for GatedSource {
    async fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        let next = self.script.lock().unwrap().pop_front();
        let (gate, outcome) = next.ok_or_else(|| anyhow::anyhow!("no scripted response"))?;
        let _ = gate.await;
        outcome.map_err(anyhow::Error::msg)
    }
}
