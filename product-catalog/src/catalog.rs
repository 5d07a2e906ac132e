//! The catalog store and its listener registry

use crate::{CatalogConfig, CatalogMetrics, Product, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::debug;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Registered listeners keyed by registration id.
///
/// Ids only grow, so map order is subscription order.
#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Handle returned by [`ProductCatalog::subscribe`].
///
/// Dropping it leaves the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl Subscription {
    /// Remove this registration. Calling it again is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.lock().listeners.remove(&self.id).is_some() {
                debug!(listener_id = self.id, "Listener unsubscribed");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// In-memory product catalog with change notification
pub struct ProductCatalog {
    products: Mutex<Vec<Product>>,
    listeners: Arc<Mutex<ListenerRegistry>>,
    count_tx: watch::Sender<usize>,
    metrics: Option<CatalogMetrics>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty catalog with room for `capacity` products
    pub fn with_capacity(capacity: usize) -> Self {
        let (count_tx, _) = watch::channel(0);
        Self {
            products: Mutex::new(Vec::with_capacity(capacity)),
            listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
            count_tx,
            metrics: None,
        }
    }

    /// Create a catalog as described by `config`
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let catalog = Self::with_capacity(config.initial_capacity);
        if config.metrics_enabled {
            return Ok(catalog.with_metrics(CatalogMetrics::new()?));
        }
        Ok(catalog)
    }

    /// Attach metrics
    pub fn with_metrics(mut self, metrics: CatalogMetrics) -> Self {
        metrics.products.set(self.product_count() as i64);
        self.metrics = Some(metrics);
        self
    }

    /// Attached metrics, if any
    pub fn metrics(&self) -> Option<&CatalogMetrics> {
        self.metrics.as_ref()
    }

    /// Append a product and notify listeners.
    ///
    /// No deduplication: a second product with an existing id is appended too.
    pub fn add_product(&self, product: Product) {
        let product_id = product.id.clone();
        let count = {
            let mut products = self.products.lock();
            products.push(product);
            let count = products.len();
            self.count_tx.send_replace(count);
            count
        };

        if let Some(metrics) = &self.metrics {
            metrics.products_added.inc();
            metrics.products.set(count as i64);
        }
        debug!(product_id = %product_id, count, "Product added");

        self.notify();
    }

    /// Snapshot of all products in insertion order
    pub fn products(&self) -> Vec<Product> {
        self.products.lock().clone()
    }

    /// First product with `id`, in insertion order
    pub fn product_by_id(&self, id: &str) -> Option<Product> {
        self.products.lock().iter().find(|p| p.id == id).cloned()
    }

    /// Products matching `query`, in insertion order.
    ///
    /// See [`Product::matches`]. An empty query matches everything.
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        self.products
            .lock()
            .iter()
            .filter(|p| p.matches(query))
            .cloned()
            .collect()
    }

    /// Remove every product and notify listeners
    pub fn clear_products(&self) {
        let removed = {
            let mut products = self.products.lock();
            let removed = products.len();
            products.clear();
            self.count_tx.send_replace(0);
            removed
        };

        if let Some(metrics) = &self.metrics {
            metrics.clears.inc();
            metrics.products.set(0);
        }
        debug!(removed, "Products cleared");

        self.notify();
    }

    /// Number of products held
    pub fn product_count(&self) -> usize {
        self.products.lock().len()
    }

    /// Register a listener called after every mutation.
    ///
    /// Subscribing the same closure twice yields two independent
    /// registrations.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = self.listeners.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Arc::new(listener));
        debug!(listener_id = id, "Listener subscribed");

        Subscription {
            id,
            registry: Arc::downgrade(&self.listeners),
        }
    }

    /// Receiver that sees the product count after every mutation
    pub fn watch_count(&self) -> watch::Receiver<usize> {
        self.count_tx.subscribe()
    }

    /// Number of live listener registrations
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().listeners.len()
    }

    // Listeners run with no lock held so they may call back into the catalog
    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.lock().listeners.values().cloned().collect();

        for listener in &listeners {
            listener();
        }

        if let Some(metrics) = &self.metrics {
            metrics.notifications.inc_by(listeners.len() as u64);
        }
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProductCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductCatalog")
            .field("products", &self.product_count())
            .field("listeners", &self.listener_count())
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
