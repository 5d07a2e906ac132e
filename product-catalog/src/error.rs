//! Error types for the catalog

use thiserror::Error;

/// Result type for catalog setup
pub type Result<T> = std::result::Result<T, Error>;

/// Catalog errors.
///
/// Catalog operations themselves never fail; these only arise while
/// building one.
#[derive(Error, Debug)]
pub enum Error {
    /// Metric registration failed
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
