//! Configuration for the synonym registry.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThesaurusError};

/// Configuration for [`SynonymRegistry`](super::SynonymRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of independently locked shards.
    /// A single shard behaves like one coarse lock around the whole map.
    pub shard_count: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            shard_count: (num_cpus::get() * 4).max(1),
        }
    }
}

impl RegistryConfig {
    /// Create a configuration with an explicit shard count.
    pub fn with_shards(shard_count: usize) -> Self {
        Self { shard_count }
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RegistryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(ThesaurusError::invalid_config(
                "shard_count must be at least 1",
            ));
        }
        Ok(())
    }
}
