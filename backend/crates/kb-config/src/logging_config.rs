use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL};

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Unknown or malformed names fall back to the default level
    #[serde(deserialize_with = "deserialize_level")]
    pub level: LevelFilter,
    /// Colored stdout output; ignored when logging to a file
    pub colored: bool,
    /// Log file name inside `dir`; None logs to stdout
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            colored: DEFAULT_LOG_COLORED,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    /// Case-insensitive level lookup shared by the TOML and `KANBAN_LOG_LEVEL` paths.
    pub fn parse_level(name: &str) -> LevelFilter {
        name.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> crate::ConfigErrorResult<()> {
        if let Some(ref file) = self.file
            && (file.is_empty() || file.contains(['/', '\\']) || file.contains(".."))
        {
            return Err(crate::ConfigError::logging(format!(
                "logging.file must be a bare file name, got '{file}'"
            )));
        }

        if self.dir.contains("..") {
            return Err(crate::ConfigError::logging(
                "logging.dir cannot contain '..'",
            ));
        }

        Ok(())
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)
        .map(|name| LoggingConfig::parse_level(&name))
        .unwrap_or(DEFAULT_LOG_LEVEL))
}
