use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Activity log constraints
pub const MIN_ACTIVITY_ENTRIES: usize = 1;
pub const MAX_ACTIVITY_ENTRIES: usize = 100_000;
pub const DEFAULT_MAX_ACTIVITY_ENTRIES: usize = 1000;

pub const MIN_PREVIEW_CHARS: usize = 1;
pub const MAX_PREVIEW_CHARS: usize = 1000;
pub const DEFAULT_PREVIEW_CHARS: usize = 30;

// Activity log retention configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivityLogConfig {
    /// Entries kept per task before the oldest is evicted (default: 1000)
    pub max_entries: usize,

    /// Characters of a description kept in old/new values (default: 30)
    pub preview_chars: usize,
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ACTIVITY_ENTRIES,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl ActivityLogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_entries < MIN_ACTIVITY_ENTRIES || self.max_entries > MAX_ACTIVITY_ENTRIES {
            return Err(ConfigError::config(format!(
                "activity_log.max_entries must be {}-{}, got {}",
                MIN_ACTIVITY_ENTRIES, MAX_ACTIVITY_ENTRIES, self.max_entries
            )));
        }

        if self.preview_chars < MIN_PREVIEW_CHARS || self.preview_chars > MAX_PREVIEW_CHARS {
            return Err(ConfigError::config(format!(
                "activity_log.preview_chars must be {}-{}, got {}",
                MIN_PREVIEW_CHARS, MAX_PREVIEW_CHARS, self.preview_chars
            )));
        }

        Ok(())
    }
}
