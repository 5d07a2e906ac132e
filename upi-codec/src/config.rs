//! Configuration for the codec

use serde::{Deserialize, Serialize};

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Shortest accepted payee handle (characters)
    pub min_handle_len: usize,

    /// Longest accepted payee handle (characters)
    pub max_handle_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min_handle_len: 5,
            max_handle_len: 50,
        }
    }
}

impl CodecConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodecConfig = toml::from_str(&content)
            .map_err(|e| crate::CodecError::Config(format!("Failed to parse config: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = CodecConfig::default();

        if let Ok(min) = std::env::var("UPI_MIN_HANDLE_LEN") {
            config.min_handle_len = parse_len("UPI_MIN_HANDLE_LEN", &min)?;
        }

        if let Ok(max) = std::env::var("UPI_MAX_HANDLE_LEN") {
            config.max_handle_len = parse_len("UPI_MAX_HANDLE_LEN", &max)?;
        }

        config.check()?;
        Ok(config)
    }

    fn check(&self) -> crate::Result<()> {
        // "a@b" is the shortest string the handle pattern can match
        if self.min_handle_len < 3 || self.min_handle_len > self.max_handle_len {
            return Err(crate::CodecError::Config(format!(
                "Handle length bounds [{}, {}] are not satisfiable",
                self.min_handle_len, self.max_handle_len
            )));
        }
        Ok(())
    }
}

fn parse_len(var: &str, value: &str) -> crate::Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| crate::CodecError::Config(format!("{} must be an integer: {}", var, e)))
}
