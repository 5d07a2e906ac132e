//! Configuration for the catalog

use serde::{Deserialize, Serialize};

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Attach a prometheus registry to the catalog
    pub metrics_enabled: bool,

    /// Capacity reserved for the product list up front
    pub initial_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            initial_capacity: 64,
        }
    }
}

impl CatalogConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = CatalogConfig::default();

        if let Ok(enabled) = std::env::var("CATALOG_METRICS_ENABLED") {
            config.metrics_enabled = match enabled.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    return Err(crate::Error::Config(format!(
                        "CATALOG_METRICS_ENABLED must be a boolean, got {}",
                        other
                    )))
                }
            };
        }

        if let Ok(capacity) = std::env::var("CATALOG_INITIAL_CAPACITY") {
            config.initial_capacity = capacity.trim().parse().map_err(|e| {
                crate::Error::Config(format!("CATALOG_INITIAL_CAPACITY must be an integer: {}", e))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert!(!config.metrics_enabled);
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "metrics_enabled = true").unwrap();

        let config = CatalogConfig::from_file(file.path()).unwrap();
        assert!(config.metrics_enabled);
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            CatalogConfig::from_file("/nonexistent/catalog.toml"),
            Err(crate::Error::Io(_))
        ));
    }
}
