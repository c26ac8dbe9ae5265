use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Version history constraints
pub const MIN_SNAPSHOTS: usize = 1;
pub const MAX_SNAPSHOTS: usize = 1000;
pub const DEFAULT_MAX_SNAPSHOTS: usize = 50;

/// Per-task version history retention.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Snapshots kept per task before the oldest is evicted
    pub max_snapshots: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_snapshots: DEFAULT_MAX_SNAPSHOTS,
        }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_snapshots < MIN_SNAPSHOTS || self.max_snapshots > MAX_SNAPSHOTS {
            return Err(ConfigError::config(format!(
                "history.max_snapshots must be {}-{}, got {}",
                MIN_SNAPSHOTS, MAX_SNAPSHOTS, self.max_snapshots
            )));
        }

        Ok(())
    }
}
