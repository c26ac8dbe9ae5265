//! Arena-backed subtask hierarchy.
//!
//! Every node of a task's checklist lives in one id-keyed table; parents
//! refer to children by id. Nodes are only ever created here with fresh
//! ids, so a node can never become its own descendant.

use crate::models::ids::{FIRST_ID, allocate_id};
use crate::{Subtask, SubtaskId};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskTree {
    nodes: BTreeMap<SubtaskId, Subtask>,
    roots: Vec<SubtaskId>,
    next_id: SubtaskId,
}

impl Default for SubtaskTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtaskTree {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            roots: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Attach a new top-level subtask.
    pub fn add_root(&mut self, title: &str, description: &str) -> SubtaskId {
        let id = self.allocate(title, description);
        self.roots.push(id);
        id
    }

    /// Attach a new subtask under `parent`. Returns None if `parent` does not exist.
    pub fn add_child(
        &mut self,
        parent: SubtaskId,
        title: &str,
        description: &str,
    ) -> Option<SubtaskId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let id = self.allocate(title, description);
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.push_child(id);
        }
        Some(id)
    }

    /// Remove a top-level subtask and everything beneath it.
    pub fn remove_root(&mut self, id: SubtaskId) -> Option<Subtask> {
        let position = self.roots.iter().position(|&root| root == id)?;
        self.roots.remove(position);
        self.drop_subtree(id)
    }

    /// Remove a direct child of `parent` and everything beneath it.
    /// Grandchildren are not searched.
    pub fn remove_child(&mut self, parent: SubtaskId, child: SubtaskId) -> Option<Subtask> {
        let detached = self.nodes.get_mut(&parent)?.detach_child(child);
        if !detached {
            return None;
        }
        self.drop_subtree(child)
    }

    pub fn get(&self, id: SubtaskId) -> Option<&Subtask> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: SubtaskId) -> Option<&mut Subtask> {
        self.nodes.get_mut(&id)
    }

    pub fn contains(&self, id: SubtaskId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn roots(&self) -> &[SubtaskId] {
        &self.roots
    }

    /// Total number of nodes at every depth
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Convenience for toggling a node. Returns false if `id` does not exist.
    pub fn set_completed(&mut self, id: SubtaskId, completed: bool) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.set_completed(completed);
                true
            }
            None => false,
        }
    }

    /// Depth-first search of the subtree rooted at `root`: the root itself
    /// first, then its children left to right.
    pub fn find_in(&self, root: SubtaskId, id: SubtaskId) -> Option<&Subtask> {
        self.depth_first(root).into_iter().find(|node| node.id() == id)
    }

    /// Nodes in the subtree rooted at `id`, counting `id` itself.
    pub fn count_total(&self, id: SubtaskId) -> usize {
        self.depth_first(id).len()
    }

    /// Completed nodes in the subtree rooted at `id`, counting `id` itself.
    pub fn count_completed(&self, id: SubtaskId) -> usize {
        self.depth_first(id)
            .into_iter()
            .filter(|node| node.is_completed())
            .count()
    }

    pub fn completion_percentage(&self, id: SubtaskId) -> f64 {
        let total = self.count_total(id);
        if total == 0 {
            return 0.0;
        }
        (self.count_completed(id) as f64 * 100.0) / total as f64
    }

    /// Completion across every root's subtree; 0 when there are no subtasks.
    pub fn overall_completion_percentage(&self) -> f64 {
        let (completed, total) = self.roots.iter().fold((0, 0), |(done, all), &root| {
            (done + self.count_completed(root), all + self.count_total(root))
        });
        if total == 0 {
            return 0.0;
        }
        (completed as f64 * 100.0) / total as f64
    }

    fn allocate(&mut self, title: &str, description: &str) -> SubtaskId {
        let id = allocate_id(&mut self.next_id, |id| self.nodes.contains_key(&id));
        self.nodes.insert(id, Subtask::new(id, title, description));
        id
    }

    /// Pre-order walk with an explicit stack.
    fn depth_first(&self, root: SubtaskId) -> Vec<&Subtask> {
        let mut out = Vec::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            out.push(node);
            stack.extend(node.children().iter().rev().copied());
        }

        out
    }

    fn drop_subtree(&mut self, root: SubtaskId) -> Option<Subtask> {
        let removed = self.nodes.remove(&root)?;
        let mut stack: Vec<SubtaskId> = removed.children().to_vec();

        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(&id) {
                stack.extend_from_slice(node.children());
            }
        }

        Some(removed)
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: SubtaskId, depth: usize) -> fmt::Result {
        let Some(node) = self.nodes.get(&id) else {
            return Ok(());
        };

        write!(
            f,
            "{:indent$}[{}] {}",
            "",
            if node.is_completed() { "X" } else { " " },
            node.title(),
            indent = depth * 2
        )?;
        if !node.description().is_empty() {
            write!(f, " - {}", node.description())?;
        }
        if !node.children().is_empty() {
            write!(
                f,
                " ({}/{} completed)",
                self.count_completed(id),
                self.count_total(id)
            )?;
        }
        writeln!(f)?;

        for &child in node.children() {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for SubtaskTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &root in &self.roots {
            self.fmt_node(f, root, 0)?;
        }
        Ok(())
    }
}
