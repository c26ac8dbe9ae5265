use crate::{SubtaskTree, Task, TaskId, TrackedChange, UserId};

use std::ops::Deref;

use chrono::{DateTime, Utc};

/// Mutable access to a task on a board that cannot change its state.
///
/// State changes go through `Board::move_task` so the task always sits in
/// the column named by its state.
pub struct TaskMut<'a> {
    task: &'a mut Task,
}

impl<'a> TaskMut<'a> {
    pub(crate) fn new(task: &'a mut Task) -> Self {
        Self { task }
    }

    pub fn set_title(&mut self, title: &str, modified_by: &str) -> Option<TrackedChange> {
        self.task.set_title(title, modified_by)
    }

    pub fn set_description(&mut self, description: &str, modified_by: &str) -> Option<TrackedChange> {
        self.task.set_description(description, modified_by)
    }

    pub fn set_assigned_user(
        &mut self,
        user_id: Option<UserId>,
        modified_by: &str,
    ) -> Option<TrackedChange> {
        self.task.set_assigned_user(user_id, modified_by)
    }

    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.task.set_due_date(due_date)
    }

    pub fn set_priority(&mut self, value: i32) -> bool {
        self.task.set_priority(value)
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.task.add_tag(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.task.remove_tag(tag)
    }

    /// Unchecked insert. Use `Board::add_dependency` to reject cycles.
    pub fn add_dependency(&mut self, task_id: TaskId) -> bool {
        self.task.add_dependency(task_id)
    }

    pub fn remove_dependency(&mut self, task_id: TaskId) -> bool {
        self.task.remove_dependency(task_id)
    }

    pub fn subtasks_mut(&mut self) -> &mut SubtaskTree {
        self.task.subtasks_mut()
    }
}

impl Deref for TaskMut<'_> {
    type Target = Task;

    fn deref(&self) -> &Task {
        self.task
    }
}
