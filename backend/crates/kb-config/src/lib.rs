mod activity_log_config;
mod board_config;
mod config;
mod error;
mod history_config;
mod logging_config;
mod reminder_config;
mod state_layout;


pub use activity_log_config::ActivityLogConfig;
pub use board_config::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use history_config::HistoryConfig;
pub use logging_config::LoggingConfig;
pub use reminder_config::ReminderConfig;
pub use state_layout::{StateLayoutError, check_state_layout, check_state_name};

pub use activity_log_config::{
    DEFAULT_MAX_ACTIVITY_ENTRIES, DEFAULT_PREVIEW_CHARS, MAX_ACTIVITY_ENTRIES, MAX_PREVIEW_CHARS,
    MIN_ACTIVITY_ENTRIES, MIN_PREVIEW_CHARS,
};
pub use board_config::{
    DEFAULT_DONE_STATE, DEFAULT_IN_PROGRESS_STATE, DEFAULT_PENDING_STATE, MAX_STATE_NAME_LENGTH,
    MIN_STATES,
};
pub use history_config::{DEFAULT_MAX_SNAPSHOTS, MAX_SNAPSHOTS, MIN_SNAPSHOTS};
pub use reminder_config::{
    DEFAULT_CHECK_INTERVAL_HOURS, DEFAULT_DUE_SOON_DAYS, MAX_CHECK_INTERVAL_HOURS,
    MAX_DUE_SOON_DAYS, MIN_CHECK_INTERVAL_HOURS,
};

const CONFIG_DIR_ENV: &str = "KANBAN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kanban";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
