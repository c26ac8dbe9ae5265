use crate::{BoardId, ProjectId, TaskId, UserId};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReminderKind {
    DueSoon,
    Overdue,
}

/// One task that needs attention, addressed to its assignee if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueReminder {
    pub kind: ReminderKind,
    pub project_id: ProjectId,
    pub board_id: BoardId,
    pub task_id: TaskId,
    pub task_title: String,
    pub assigned_user_id: Option<UserId>,
    pub days_until_due: i64,
}

impl DueReminder {
    pub fn message(&self) -> String {
        match self.kind {
            ReminderKind::DueSoon => format!(
                "Task '{}' is due in {} day(s)",
                self.task_title, self.days_until_due
            ),
            ReminderKind::Overdue => format!("Task '{}' is overdue", self.task_title),
        }
    }
}

impl std::fmt::Display for DueReminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
