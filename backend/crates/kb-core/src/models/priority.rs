use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;
pub const DEFAULT_PRIORITY: u8 = 3;

/// Task priority, 1 (low) through 5 (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Priority(u8);

impl Priority {
    pub const LOWEST: Priority = Priority(MIN_PRIORITY);
    pub const HIGHEST: Priority = Priority(MAX_PRIORITY);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority(DEFAULT_PRIORITY)
    }
}

impl TryFrom<i32> for Priority {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i32) -> CoreResult<Self> {
        if value < i32::from(MIN_PRIORITY) || value > i32::from(MAX_PRIORITY) {
            return Err(CoreError::InvalidPriority {
                value,
                min: MIN_PRIORITY,
                max: MAX_PRIORITY,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Priority(value as u8))
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        i32::from(priority.0)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
