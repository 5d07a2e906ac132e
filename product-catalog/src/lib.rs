//! Reactive product catalog
//!
//! In-memory, insertion-ordered product list with synchronous change
//! notification.
//!
//! # Invariants
//!
//! - Append-only: the only mutations are "add one" and "clear all"
//! - Insertion order is display order
//! - By the time a mutation returns, every listener registered at that
//!   moment has been called
//! - No global instance: the composition root builds one catalog and shares
//!   it (usually behind an `Arc`)

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod types;

// Re-exports
pub use catalog::{ProductCatalog, Subscription};
pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use metrics::CatalogMetrics;
pub use types::{CessType, Product, UrgencyLevel};
