use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable copy of a task's tracked fields at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    title: String,
    description: String,
    state: String,
    assigned_user_id: Option<UserId>,
    modified_by: String,
    timestamp: DateTime<Utc>,
}

impl TaskSnapshot {
    pub(crate) fn capture(
        title: &str,
        description: &str,
        state: &str,
        assigned_user_id: Option<UserId>,
        modified_by: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            state: state.to_string(),
            assigned_user_id,
            modified_by: modified_by.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn assigned_user_id(&self) -> Option<UserId> {
        self.assigned_user_id
    }

    pub fn modified_by(&self) -> &str {
        &self.modified_by
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl std::fmt::Display for TaskSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Version of {} by {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.modified_by
        )?;
        writeln!(f, "State: {}", self.state)?;
        writeln!(f, "Title: {}", self.title)?;
        write!(f, "Description: {}", self.description)
    }
}
