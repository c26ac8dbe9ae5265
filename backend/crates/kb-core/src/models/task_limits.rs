use kb_config::{
    Config, DEFAULT_MAX_ACTIVITY_ENTRIES, DEFAULT_MAX_SNAPSHOTS, DEFAULT_PREVIEW_CHARS,
};
use serde::{Deserialize, Serialize};

/// Per-task retention limits, copied into every task a board creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLimits {
    pub max_snapshots: usize,
    pub max_activity_entries: usize,
    /// Characters of a description kept in activity entries
    pub preview_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            max_snapshots: DEFAULT_MAX_SNAPSHOTS,
            max_activity_entries: DEFAULT_MAX_ACTIVITY_ENTRIES,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl From<&Config> for TaskLimits {
    fn from(config: &Config) -> Self {
        Self {
            max_snapshots: config.history.max_snapshots,
            max_activity_entries: config.activity_log.max_entries,
            preview_chars: config.activity_log.preview_chars,
        }
    }
}
