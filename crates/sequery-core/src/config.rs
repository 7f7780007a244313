//! Engine configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial bucket capacity for lookups and dictionaries.
    pub bucket_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bucket_capacity: 16,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQUERY_BUCKET_CAPACITY`: initial bucket capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQUERY_BUCKET_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.bucket_capacity = v;
            }
        }

        cfg
    }
}
