use crate::{Task, TaskId, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flat field set a persistence layer saves and hands back on load.
///
/// Dependencies may name tasks that are not loaded yet; they are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub state: String,
    pub assigned_user_id: Option<UserId>,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_string(),
            description: task.description().to_string(),
            state: task.state().to_string(),
            assigned_user_id: task.assigned_user_id(),
            priority: i32::from(task.priority()),
            due_date: task.due_date(),
            created_date: Some(task.created_date()),
            tags: task.tags().to_vec(),
            dependencies: task.dependencies().iter().copied().collect(),
        }
    }
}
