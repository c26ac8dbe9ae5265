use crate::{
    ActivityLogConfig, BoardConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, HistoryConfig, LoggingConfig, ReminderConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub history: HistoryConfig,
    pub activity_log: ActivityLogConfig,
    pub board: BoardConfig,
    pub reminders: ReminderConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for KANBAN_CONFIG_DIR env var, else use ./.kanban/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply KANBAN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: KANBAN_CONFIG_DIR env var > ./.kanban/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()?;
        self.history.validate()?;
        self.activity_log.validate()?;
        self.board.validate()?;
        self.reminders.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  history: max_snapshots={}", self.history.max_snapshots);
        info!(
            "  activity_log: max_entries={}, preview_chars={}",
            self.activity_log.max_entries, self.activity_log.preview_chars
        );
        info!(
            "  board: states=[{}], initial={}, terminal={}, gated=[{}]",
            self.board.states.join(", "),
            self.board.resolved_initial_state().unwrap_or("-"),
            self.board.resolved_terminal_state().unwrap_or("-"),
            self.board.resolved_gated_states().join(", ")
        );
        info!(
            "  reminders: every {}h, due soon within {}d",
            self.reminders.check_interval_hours, self.reminders.due_soon_days
        );
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        if let Ok(val) = std::env::var("KANBAN_LOG_LEVEL") {
            self.logging.level = LoggingConfig::parse_level(&val);
        }
        Self::apply_env_bool("KANBAN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KANBAN_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("KANBAN_LOG_DIR", &mut self.logging.dir);

        // History
        Self::apply_env_parse(
            "KANBAN_HISTORY_MAX_SNAPSHOTS",
            &mut self.history.max_snapshots,
        );

        // Activity Log
        Self::apply_env_parse(
            "KANBAN_ACTIVITY_LOG_MAX_ENTRIES",
            &mut self.activity_log.max_entries,
        );
        Self::apply_env_parse(
            "KANBAN_ACTIVITY_LOG_PREVIEW_CHARS",
            &mut self.activity_log.preview_chars,
        );

        // Board
        Self::apply_env_list("KANBAN_BOARD_STATES", &mut self.board.states);
        Self::apply_env_option_string(
            "KANBAN_BOARD_INITIAL_STATE",
            &mut self.board.initial_state,
        );
        Self::apply_env_option_string(
            "KANBAN_BOARD_TERMINAL_STATE",
            &mut self.board.terminal_state,
        );
        if let Ok(val) = std::env::var("KANBAN_BOARD_GATED_STATES") {
            self.board.gated_states = Some(Self::split_list(&val));
        }

        // Reminders
        Self::apply_env_parse(
            "KANBAN_REMINDERS_CHECK_INTERVAL_HOURS",
            &mut self.reminders.check_interval_hours,
        );
        Self::apply_env_parse(
            "KANBAN_REMINDERS_DUE_SOON_DAYS",
            &mut self.reminders.due_soon_days,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Self::split_list(&val);
        }
    }

    fn split_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
