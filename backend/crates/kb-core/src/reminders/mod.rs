mod due_date_monitor;
mod due_reminder;

pub use due_date_monitor::DueDateMonitor;
pub use due_reminder::{DueReminder, ReminderKind};
