use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Due-date reminder constraints
pub const MIN_CHECK_INTERVAL_HOURS: u32 = 1;
pub const MAX_CHECK_INTERVAL_HOURS: u32 = 720;
pub const DEFAULT_CHECK_INTERVAL_HOURS: u32 = 24;

pub const MAX_DUE_SOON_DAYS: u32 = 365;
pub const DEFAULT_DUE_SOON_DAYS: u32 = 1;

/// Due-date monitor policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Minimum hours between two due-date sweeps
    pub check_interval_hours: u32,
    /// A task due within this many days is reported as due soon
    pub due_soon_days: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            check_interval_hours: DEFAULT_CHECK_INTERVAL_HOURS,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }
}

impl ReminderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.check_interval_hours < MIN_CHECK_INTERVAL_HOURS
            || self.check_interval_hours > MAX_CHECK_INTERVAL_HOURS
        {
            return Err(ConfigError::config(format!(
                "reminders.check_interval_hours must be {}-{}, got {}",
                MIN_CHECK_INTERVAL_HOURS, MAX_CHECK_INTERVAL_HOURS, self.check_interval_hours
            )));
        }

        if self.due_soon_days > MAX_DUE_SOON_DAYS {
            return Err(ConfigError::config(format!(
                "reminders.due_soon_days must be 0-{}, got {}",
                MAX_DUE_SOON_DAYS, self.due_soon_days
            )));
        }

        Ok(())
    }
}
