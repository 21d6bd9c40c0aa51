//! Record generation settings.

use risk_core::generator::DEFAULT_RECORD_COUNT;
use serde::{Deserialize, Serialize};

const fn default_count() -> i64 {
    DEFAULT_RECORD_COUNT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Number of records to generate. Zero or negative produces an empty dataset.
    #[serde(default = "default_count")]
    pub count: i64,

    /// Seed for reproducible datasets. Unseeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GenerationConfig::default();
        assert_eq!(config.count, 20);
        assert!(config.seed.is_none());
    }
}
