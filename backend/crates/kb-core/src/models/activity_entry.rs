use crate::ActionType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit record: who changed what, from which value to which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    timestamp: DateTime<Utc>,
    user_name: String,
    action_type: ActionType,
    field_modified: String,
    old_value: String,
    new_value: String,
    description: String,
}

impl ActivityEntry {
    pub fn new(user_name: &str, action_type: ActionType) -> Self {
        Self {
            timestamp: Utc::now(),
            user_name: user_name.to_string(),
            action_type,
            field_modified: String::new(),
            old_value: String::new(),
            new_value: String::new(),
            description: String::new(),
        }
    }

    pub fn with_field(mut self, field: &str, old_value: &str, new_value: &str) -> Self {
        self.field_modified = field.to_string();
        self.old_value = old_value.to_string();
        self.new_value = new_value.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Override the capture time, e.g. when reloading a saved log.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn field_modified(&self) -> &str {
        &self.field_modified
    }

    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.user_name,
            self.action_type
        )?;

        if !self.field_modified.is_empty() {
            write!(f, " ({}", self.field_modified)?;
            if !self.old_value.is_empty() || !self.new_value.is_empty() {
                write!(f, ":")?;
                if !self.old_value.is_empty() {
                    write!(f, " '{}'", self.old_value)?;
                }
                if !self.new_value.is_empty() {
                    write!(f, " -> '{}'", self.new_value)?;
                }
            }
            write!(f, ")")?;
        }

        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}
