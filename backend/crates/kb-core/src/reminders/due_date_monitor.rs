use crate::reminders::{DueReminder, ReminderKind};
use crate::{Board, Project, Task};

use chrono::{DateTime, Duration, Utc};
use kb_config::{DEFAULT_CHECK_INTERVAL_HOURS, DEFAULT_DUE_SOON_DAYS, ReminderConfig};
use log::debug;

/// Periodic scan for tasks that are due soon or overdue.
///
/// Read only: it never touches the project, and delivering the reminders is
/// left to the caller.
#[derive(Debug, Clone)]
pub struct DueDateMonitor {
    check_interval: Duration,
    due_soon_days: i64,
    last_check: Option<DateTime<Utc>>,
}

impl Default for DueDateMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_CHECK_INTERVAL_HOURS, DEFAULT_DUE_SOON_DAYS)
    }
}

impl DueDateMonitor {
    pub fn new(check_interval_hours: u32, due_soon_days: u32) -> Self {
        Self {
            check_interval: Duration::hours(i64::from(check_interval_hours)),
            due_soon_days: i64::from(due_soon_days),
            last_check: None,
        }
    }

    pub fn from_config(config: &ReminderConfig) -> Self {
        Self::new(config.check_interval_hours, config.due_soon_days)
    }

    pub fn last_check(&self) -> Option<DateTime<Utc>> {
        self.last_check
    }

    /// The first check always runs; later ones wait out the interval.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_check {
            Some(last) => now - last >= self.check_interval,
            None => true,
        }
    }

    /// Scan `project` unless the last check was less than one interval ago.
    pub fn check(&mut self, project: &Project, now: DateTime<Utc>) -> Vec<DueReminder> {
        if !self.is_due(now) {
            debug!("Due date check skipped, last ran at {:?}", self.last_check);
            return Vec::new();
        }
        self.last_check = Some(now);
        self.scan(project, now)
    }

    /// Scan without throttling. Tasks in their board's terminal state are
    /// skipped; a task can be both due soon and overdue.
    pub fn scan(&self, project: &Project, now: DateTime<Utc>) -> Vec<DueReminder> {
        let mut reminders = Vec::new();
        for board in project.boards() {
            let terminal = board.states().terminal_state();
            for task in board.all_tasks() {
                if task.state() == terminal {
                    continue;
                }
                let Some(days) = task.days_until_due_at(now) else {
                    continue;
                };
                if (0..=self.due_soon_days).contains(&days) {
                    reminders.push(reminder(ReminderKind::DueSoon, project, board, task, days));
                }
                if task.is_overdue_at(now, terminal) {
                    reminders.push(reminder(ReminderKind::Overdue, project, board, task, days));
                }
            }
        }
        debug!(
            "Project {}: {} due date reminder(s)",
            project.id(),
            reminders.len()
        );
        reminders
    }
}

fn reminder(kind: ReminderKind, project: &Project, board: &Board, task: &Task, days: i64) -> DueReminder {
    DueReminder {
        kind,
        project_id: project.id(),
        board_id: board.id(),
        task_id: task.id(),
        task_title: task.title().to_string(),
        assigned_user_id: task.assigned_user_id(),
        days_until_due: days,
    }
}
