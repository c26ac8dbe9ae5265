use crate::{
    ActivityLog, Priority, SubtaskTree, TaskId, TaskLimits, TaskRecord, TaskSnapshot,
    TrackedChange, TrackedField, UserId, VersionHistory,
};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

/// A card on a board.
///
/// Title, description, state and assignee are tracked: every real change
/// is written to the activity log, and all but assignee changes also
/// append a version snapshot. State changes are made by the owning board
/// so its columns stay consistent.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    state: String,
    assigned_user_id: Option<UserId>,
    due_date: Option<DateTime<Utc>>,
    created_date: DateTime<Utc>,
    priority: Priority,
    tags: Vec<String>,
    dependencies: BTreeSet<TaskId>,
    subtasks: SubtaskTree,
    history: VersionHistory,
    activity_log: ActivityLog,
    #[serde(skip)]
    preview_chars: usize,
}

impl Task {
    pub fn new(id: TaskId, title: &str, description: &str, state: &str, limits: TaskLimits) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            state: state.to_string(),
            assigned_user_id: None,
            due_date: None,
            created_date: Utc::now(),
            priority: Priority::default(),
            tags: Vec::new(),
            dependencies: BTreeSet::new(),
            subtasks: SubtaskTree::new(),
            history: VersionHistory::new(limits.max_snapshots),
            activity_log: ActivityLog::new(limits.max_activity_entries),
            preview_chars: limits.preview_chars,
        }
    }

    /// Rebuild a task from saved fields without logging or versioning.
    /// An out-of-range priority falls back to the default and a saved
    /// dependency on the task itself is dropped.
    pub fn from_record(record: TaskRecord, limits: TaskLimits) -> Self {
        let mut task = Self::new(
            record.id,
            &record.title,
            &record.description,
            &record.state,
            limits,
        );
        task.assigned_user_id = record.assigned_user_id;
        task.due_date = record.due_date;
        if let Some(created) = record.created_date {
            task.created_date = created;
        }
        task.set_priority(record.priority);
        for tag in &record.tags {
            task.add_tag(tag);
        }
        task.dependencies
            .extend(record.dependencies.into_iter().filter(|&dep| dep != record.id));
        task
    }

    pub fn id(&self) -> TaskId {
        self.id
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

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn dependencies(&self) -> &BTreeSet<TaskId> {
        &self.dependencies
    }

    pub fn subtasks(&self) -> &SubtaskTree {
        &self.subtasks
    }

    pub fn subtasks_mut(&mut self) -> &mut SubtaskTree {
        &mut self.subtasks
    }

    pub fn history(&self) -> &VersionHistory {
        &self.history
    }

    pub fn activity_log(&self) -> &ActivityLog {
        &self.activity_log
    }

    pub(crate) fn activity_log_mut(&mut self) -> &mut ActivityLog {
        &mut self.activity_log
    }

    // =========================================================================
    // Tracked setters
    // =========================================================================

    pub fn set_title(&mut self, title: &str, modified_by: &str) -> Option<TrackedChange> {
        let change = TrackedChange::track(TrackedField::Title, &self.title, title, modified_by)?;
        self.title = title.to_string();
        Some(self.apply(change))
    }

    pub fn set_description(&mut self, description: &str, modified_by: &str) -> Option<TrackedChange> {
        let change = TrackedChange::track(
            TrackedField::Description,
            &self.description,
            description,
            modified_by,
        )?;
        self.description = description.to_string();
        Some(self.apply(change))
    }

    /// Only the owning board moves tasks between columns.
    pub(crate) fn set_state(&mut self, state: &str, modified_by: &str) -> Option<TrackedChange> {
        let change = TrackedChange::track(TrackedField::State, &self.state, state, modified_by)?;
        self.state = state.to_string();
        Some(self.apply(change))
    }

    pub fn set_assigned_user(
        &mut self,
        user_id: Option<UserId>,
        modified_by: &str,
    ) -> Option<TrackedChange> {
        let change = TrackedChange::track_assignee(self.assigned_user_id, user_id, modified_by)?;
        self.assigned_user_id = user_id;
        Some(self.apply(change))
    }

    fn apply(&mut self, change: TrackedChange) -> TrackedChange {
        change.record(&mut self.activity_log, self.preview_chars);
        if change.takes_snapshot() {
            self.history.push(TaskSnapshot::capture(
                &self.title,
                &self.description,
                &self.state,
                self.assigned_user_id,
                change.author(),
            ));
        }
        change
    }

    // =========================================================================
    // Untracked setters
    // =========================================================================

    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    /// Returns false, leaving the priority unchanged, when `value` is outside 1-5.
    pub fn set_priority(&mut self, value: i32) -> bool {
        match Priority::try_from(value) {
            Ok(priority) => {
                self.priority = priority;
                true
            }
            Err(e) => {
                debug!("Task {} priority left at {}: {e}", self.id, self.priority);
                false
            }
        }
    }

    /// Returns false for an empty or already present tag.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    // =========================================================================
    // Dependencies
    // =========================================================================

    /// Unconditional insert; cycle checks belong to the board.
    /// Returns false if the id was already present.
    pub fn add_dependency(&mut self, task_id: TaskId) -> bool {
        self.dependencies.insert(task_id)
    }

    pub fn remove_dependency(&mut self, task_id: TaskId) -> bool {
        self.dependencies.remove(&task_id)
    }

    pub fn has_dependency(&self, task_id: TaskId) -> bool {
        self.dependencies.contains(&task_id)
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// True only when there are no dependencies at all; whether they are
    /// finished is the board's question.
    pub fn can_start(&self) -> bool {
        self.dependencies.is_empty()
    }

    // =========================================================================
    // Subtasks
    // =========================================================================

    pub fn subtask_completion_percentage(&self) -> f64 {
        self.subtasks.overall_completion_percentage()
    }

    // =========================================================================
    // Versions
    // =========================================================================

    /// Overwrite the tracked fields from `snapshot` and log one `restored`
    /// entry. No snapshot is taken of the restored state.
    pub(crate) fn restore_from_snapshot(&mut self, snapshot: &TaskSnapshot, restored_by: &str) {
        self.title = snapshot.title().to_string();
        self.description = snapshot.description().to_string();
        self.state = snapshot.state().to_string();
        self.assigned_user_id = snapshot.assigned_user_id();
        self.activity_log.log_restore(restored_by);
    }

    // =========================================================================
    // Due dates
    // =========================================================================

    /// Past due and not in `terminal_state`. A task without a due date is
    /// never overdue.
    pub fn is_overdue_at(&self, now: DateTime<Utc>, terminal_state: &str) -> bool {
        match self.due_date {
            Some(due) => due < now && self.state != terminal_state,
            None => false,
        }
    }

    pub fn is_overdue(&self, terminal_state: &str) -> bool {
        self.is_overdue_at(Utc::now(), terminal_state)
    }

    /// Whole hours until due, divided by 24, truncating toward zero:
    /// due in 23h is 0 days, due 25h ago is -1.
    pub fn days_until_due_at(&self, now: DateTime<Utc>) -> Option<i64> {
        self.due_date.map(|due| (due - now).num_hours() / 24)
    }

    pub fn days_until_due(&self) -> Option<i64> {
        self.days_until_due_at(Utc::now())
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task[ID: {}, Title: {}, State: {}, Priority: {}",
            self.id, self.title, self.state, self.priority
        )?;
        if let Some(user_id) = self.assigned_user_id {
            write!(f, ", Assigned to: {user_id}")?;
        }
        if !self.subtasks.is_empty() {
            write!(f, ", Subtasks: {}", self.subtasks.len())?;
        }
        if !self.dependencies.is_empty() {
            write!(f, ", Dependencies: {}", self.dependencies.len())?;
        }
        write!(f, "]")
    }
}
