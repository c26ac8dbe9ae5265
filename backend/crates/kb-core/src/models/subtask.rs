use crate::SubtaskId;

use serde::{Deserialize, Serialize};

/// A checklist node owned by a task's [`SubtaskTree`](crate::SubtaskTree).
///
/// Children are held as ids into the same tree; only the tree can attach or
/// detach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    id: SubtaskId,
    title: String,
    description: String,
    completed: bool,
    children: Vec<SubtaskId>,
}

impl Subtask {
    pub(crate) fn new(id: SubtaskId, title: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> SubtaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Direct children, in insertion order
    pub fn children(&self) -> &[SubtaskId] {
        &self.children
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub(crate) fn push_child(&mut self, child: SubtaskId) {
        self.children.push(child);
    }

    /// Detach a direct child. Returns false when `child` is not one.
    pub(crate) fn detach_child(&mut self, child: SubtaskId) -> bool {
        let before = self.children.len();
        self.children.retain(|&id| id != child);
        self.children.len() != before
    }
}
