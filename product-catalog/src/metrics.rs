//! Metrics collection for observability
//!
//! Each catalog owns its own registry, so several catalogs (one per test,
//! say) never collide on metric names.
//!
//! # Metrics
//!
//! - `catalog_products` - Products currently held
//! - `catalog_products_added_total` - Products appended
//! - `catalog_clears_total` - Clear-all operations
//! - `catalog_notifications_total` - Listener invocations

use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use std::fmt;
use std::sync::Arc;

/// Catalog metrics
#[derive(Clone)]
pub struct CatalogMetrics {
    /// Products currently held
    pub products: IntGauge,

    /// Products appended
    pub products_added: IntCounter,

    /// Clear-all operations
    pub clears: IntCounter,

    /// Listener invocations
    pub notifications: IntCounter,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl CatalogMetrics {
    /// Create and register catalog metrics
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let products = IntGauge::new("catalog_products", "Products currently held")?;
        registry.register(Box::new(products.clone()))?;

        let products_added = IntCounter::new("catalog_products_added_total", "Products appended")?;
        registry.register(Box::new(products_added.clone()))?;

        let clears = IntCounter::new("catalog_clears_total", "Clear-all operations")?;
        registry.register(Box::new(clears.clone()))?;

        let notifications =
            IntCounter::new("catalog_notifications_total", "Listener invocations")?;
        registry.register(Box::new(notifications.clone()))?;

        Ok(Self {
            products,
            products_added,
            clears,
            notifications,
            registry,
        })
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl fmt::Debug for CatalogMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogMetrics")
            .field("products", &self.products.get())
            .field("products_added", &self.products_added.get())
            .field("clears", &self.clears.get())
            .field("notifications", &self.notifications.get())
            .finish()
    }
}
