pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use error::{AppError, Result as AppResult};

use kb_config::Config;
use kb_core::{DueDateMonitor, DueReminder, ProjectRegistry, ReminderKind};

use chrono::{DateTime, Utc};
use log::{info, warn};

/// Process-wide state: the loaded configuration, the project registry and
/// the due-date monitor.
#[derive(Debug)]
pub struct App {
    config: Config,
    registry: ProjectRegistry,
    monitor: DueDateMonitor,
}

impl App {
    /// Load and validate configuration, install the logger, build the registry.
    pub fn bootstrap() -> AppResult<Self> {
        let config = Config::load()?;
        config.validate()?;

        logger::initialize(
            config.logging.level,
            config.log_file_path()?,
            config.logging.colored,
        )?;

        info!("Starting kb-app v{}", env!("CARGO_PKG_VERSION"));
        config.log_summary();

        Self::from_config(config)
    }

    /// Same as `bootstrap` but leaves the global logger alone.
    pub fn from_config(config: Config) -> AppResult<Self> {
        config.validate()?;
        let registry = ProjectRegistry::from_config(&config)?;
        let monitor = DueDateMonitor::from_config(&config.reminders);

        Ok(Self {
            config,
            registry,
            monitor,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ProjectRegistry {
        &mut self.registry
    }

    /// Run the monitor over the current project and log what it found.
    pub fn check_due_dates(&mut self, now: DateTime<Utc>) -> Vec<DueReminder> {
        let Some(project) = self.registry.current_project() else {
            return Vec::new();
        };
        let reminders = self.monitor.check(project, now);
        for reminder in &reminders {
            match reminder.kind {
                ReminderKind::Overdue => warn!("{}", reminder.message()),
                ReminderKind::DueSoon => info!("{}", reminder.message()),
            }
        }
        reminders
    }
}
