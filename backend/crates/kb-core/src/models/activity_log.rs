use crate::{ActionType, ActivityEntry};

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use kb_config::DEFAULT_MAX_ACTIVITY_ENTRIES;
use serde::{Deserialize, Serialize};

/// Capacity-bounded audit trail of a task; oldest entries are dropped first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    max_entries: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ACTIVITY_ENTRIES)
    }
}

impl ActivityLog {
    /// A capacity of zero is treated as one.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn add_entry(&mut self, entry: ActivityEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn log_creation(&mut self, user_name: &str, object_name: &str) {
        self.add_entry(
            ActivityEntry::new(user_name, ActionType::Created)
                .with_description(&format!("Created {object_name}")),
        );
    }

    pub fn log_move(&mut self, user_name: &str, from_state: &str, to_state: &str) {
        self.add_entry(
            ActivityEntry::new(user_name, ActionType::Moved)
                .with_field("state", from_state, to_state)
                .with_description(&format!("Moved from {from_state} to {to_state}")),
        );
    }

    pub fn log_update(&mut self, user_name: &str, field: &str, old_value: &str, new_value: &str) {
        self.add_entry(
            ActivityEntry::new(user_name, ActionType::Updated)
                .with_field(field, old_value, new_value)
                .with_description(&format!("Updated {field}")),
        );
    }

    pub fn log_assignment(&mut self, user_name: &str, previous: &str, assigned_to: &str) {
        self.add_entry(
            ActivityEntry::new(user_name, ActionType::Assigned)
                .with_field("assigned to", previous, assigned_to)
                .with_description(&format!("Assigned to {assigned_to}")),
        );
    }

    pub fn log_deletion(&mut self, user_name: &str) {
        self.add_entry(
            ActivityEntry::new(user_name, ActionType::Deleted).with_description("Deleted the task"),
        );
    }

    pub fn log_restore(&mut self, user_name: &str) {
        self.add_entry(
            ActivityEntry::new(user_name, ActionType::Restored)
                .with_description("Restored a previous version"),
        );
    }

    /// Oldest first
    pub fn entries(&self) -> &VecDeque<ActivityEntry> {
        &self.entries
    }

    pub fn entries_by_user(&self, user_name: &str) -> Vec<&ActivityEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.user_name() == user_name)
            .collect()
    }

    pub fn entries_by_action(&self, action_type: &ActionType) -> Vec<&ActivityEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.action_type() == action_type)
            .collect()
    }

    /// Entries with `start <= timestamp <= end`.
    pub fn entries_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&ActivityEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.timestamp() >= start && entry.timestamp() <= end)
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl std::fmt::Display for ActivityLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Activity Log ({} entries):", self.entries.len())?;
        writeln!(f, "----------------------------------------")?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
