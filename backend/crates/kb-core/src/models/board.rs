use crate::dependency_validator::{self, DependencyGraph};
use crate::{
    BoardId, BoardStates, DependencyCheck, MoveOutcome, Task, TaskId, TaskLimits, TaskMut, UserId,
};

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::models::ids::{FIRST_ID, allocate_id, reserve_id};

/// Tasks partitioned into ordered state columns.
///
/// Every task in `tasks` is listed in exactly one column, the one named by
/// its own state, and every declared state has a column.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    id: BoardId,
    name: String,
    description: String,
    states: BoardStates,
    columns: BTreeMap<String, Vec<TaskId>>,
    tasks: BTreeMap<TaskId, Task>,
    next_task_id: TaskId,
    task_limits: TaskLimits,
}

impl Board {
    pub fn new(id: BoardId, name: &str, description: &str) -> Self {
        Self::with_states(id, name, description, BoardStates::default(), TaskLimits::default())
    }

    pub fn with_states(
        id: BoardId,
        name: &str,
        description: &str,
        states: BoardStates,
        task_limits: TaskLimits,
    ) -> Self {
        let columns = states
            .states()
            .iter()
            .map(|s| (s.clone(), Vec::new()))
            .collect();
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            states,
            columns,
            tasks: BTreeMap::new(),
            next_task_id: FIRST_ID,
            task_limits,
        }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn task_limits(&self) -> TaskLimits {
        self.task_limits
    }

    // =========================================================================
    // States
    // =========================================================================

    pub fn states(&self) -> &BoardStates {
        &self.states
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.has_state(state)
    }

    pub fn add_state(&mut self, state: &str) -> bool {
        if !self.states.add_state(state) {
            debug!("Board {}: state '{state}' not added", self.id);
            return false;
        }
        self.columns.insert(state.to_string(), Vec::new());
        true
    }

    /// Only an empty, non-initial, non-terminal state can be removed.
    pub fn remove_state(&mut self, state: &str) -> bool {
        if self.columns.get(state).is_some_and(|c| !c.is_empty()) {
            debug!("Board {}: state '{state}' still holds tasks", self.id);
            return false;
        }
        if !self.states.remove_state(state) {
            return false;
        }
        self.columns.remove(state);
        true
    }

    pub fn reorder_states<S: AsRef<str>>(&mut self, order: &[S]) -> bool {
        self.states.reorder(order)
    }

    pub fn set_state_gated(&mut self, state: &str, gated: bool) -> bool {
        self.states.set_gated(state, gated)
    }

    // =========================================================================
    // Task lifecycle
    // =========================================================================

    /// Falls back to the initial state when `state` is not declared.
    pub fn create_task(
        &mut self,
        title: &str,
        description: &str,
        state: &str,
        created_by: &str,
    ) -> TaskId {
        let state = if self.has_state(state) {
            state
        } else {
            self.states.initial_state()
        }
        .to_string();

        let id = allocate_id(&mut self.next_task_id, |id| self.tasks.contains_key(&id));

        let mut task = Task::new(id, title, description, &state, self.task_limits);
        task.activity_log_mut().log_creation(created_by, "task");

        self.place(task);
        info!("Board {}: Created task {id} '{title}' in '{state}'", self.id);
        id
    }

    /// Adds an already built task, keeping its id and state.
    ///
    /// Rejected when its state is not declared or its id is taken.
    pub fn insert_task(&mut self, task: Task) -> bool {
        if !self.has_state(task.state()) {
            debug!(
                "Board {}: task {} rejected, state '{}' is not declared",
                self.id,
                task.id(),
                task.state()
            );
            return false;
        }
        if self.tasks.contains_key(&task.id()) {
            debug!("Board {}: task {} already present", self.id, task.id());
            return false;
        }
        reserve_id(&mut self.next_task_id, task.id());
        self.place(task);
        true
    }

    /// Hands back the removed task with a `deleted` entry appended.
    /// Dependencies other tasks hold on it are left dangling.
    pub fn remove_task(&mut self, task_id: TaskId, removed_by: &str) -> Option<Task> {
        let mut task = self.tasks.remove(&task_id)?;
        self.detach(task_id, task.state());
        task.activity_log_mut().log_deletion(removed_by);
        info!("Board {}: Removed task {task_id}", self.id);
        Some(task)
    }

    pub fn clear_all_tasks(&mut self) {
        self.tasks.clear();
        for column in self.columns.values_mut() {
            column.clear();
        }
        self.next_task_id = FIRST_ID;
        info!("Board {}: Cleared all tasks", self.id);
    }

    fn place(&mut self, task: Task) {
        self.columns
            .entry(task.state().to_string())
            .or_default()
            .push(task.id());
        self.tasks.insert(task.id(), task);
    }

    fn detach(&mut self, task_id: TaskId, state: &str) {
        if let Some(column) = self.columns.get_mut(state) {
            column.retain(|&id| id != task_id);
        }
    }

    // =========================================================================
    // Moving
    // =========================================================================

    pub fn move_task(&mut self, task_id: TaskId, new_state: &str, moved_by: &str) -> MoveOutcome {
        if !self.has_state(new_state) {
            debug!("Board {}: move of task {task_id} to unknown state '{new_state}'", self.id);
            return MoveOutcome::UnknownState;
        }
        let Some(old_state) = self.tasks.get(&task_id).map(|t| t.state().to_string()) else {
            return MoveOutcome::TaskNotFound;
        };
        if self.states.is_gated(new_state) && !self.can_move_task(task_id, new_state) {
            let blocking = self.blocking_tasks(task_id);
            debug!(
                "Board {}: move of task {task_id} to '{new_state}' blocked by {blocking:?}",
                self.id
            );
            return MoveOutcome::Blocked { blocking };
        }

        let Some(task) = self.tasks.get_mut(&task_id) else {
            return MoveOutcome::TaskNotFound;
        };
        let Some(change) = task.set_state(new_state, moved_by) else {
            return MoveOutcome::Unchanged;
        };
        self.detach(task_id, &old_state);
        self.columns
            .entry(new_state.to_string())
            .or_default()
            .push(task_id);
        MoveOutcome::Moved(change)
    }

    /// Whether `task_id` may enter `new_state` as far as its dependencies go.
    ///
    /// Returning to the initial state is always allowed. Otherwise every
    /// dependency must exist and sit in the terminal state.
    pub fn can_move_task(&self, task_id: TaskId, new_state: &str) -> bool {
        let Some(task) = self.tasks.get(&task_id) else {
            return false;
        };
        if !task.has_dependencies() || self.states.is_initial(new_state) {
            return true;
        }
        task.dependencies().iter().all(|&dep| self.is_finished(dep))
    }

    /// Dependencies that are missing or not yet in the terminal state.
    pub fn blocking_tasks(&self, task_id: TaskId) -> Vec<TaskId> {
        self.tasks
            .get(&task_id)
            .map(|task| {
                task.dependencies()
                    .iter()
                    .copied()
                    .filter(|&dep| !self.is_finished(dep))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_finished(&self, task_id: TaskId) -> bool {
        self.tasks
            .get(&task_id)
            .is_some_and(|t| self.states.is_terminal(t.state()))
    }

    /// Roll a task back to snapshot `index` of its history, oldest first.
    ///
    /// Rejected when the snapshot's state has since been removed.
    pub fn restore_task_version(&mut self, task_id: TaskId, index: usize, restored_by: &str) -> bool {
        let Some(task) = self.tasks.get(&task_id) else {
            return false;
        };
        let Some(snapshot) = task.history().get(index).cloned() else {
            return false;
        };
        if !self.has_state(snapshot.state()) {
            debug!(
                "Board {}: task {task_id} version {index} has undeclared state '{}'",
                self.id,
                snapshot.state()
            );
            return false;
        }

        let old_state = task.state().to_string();
        if let Some(task) = self.tasks.get_mut(&task_id) {
            task.restore_from_snapshot(&snapshot, restored_by);
        }
        if old_state != snapshot.state() {
            self.detach(task_id, &old_state);
            self.columns
                .entry(snapshot.state().to_string())
                .or_default()
                .push(task_id);
        }
        true
    }

    // =========================================================================
    // Dependencies
    // =========================================================================

    /// Adds the edge when `check_dependency` allows it and reports the verdict.
    pub fn add_dependency(&mut self, task_id: TaskId, dependency_id: TaskId) -> DependencyCheck {
        let check = self.check_dependency(task_id, dependency_id);
        match (&check, self.tasks.get_mut(&task_id)) {
            (DependencyCheck::Allowed, Some(task)) => {
                task.add_dependency(dependency_id);
            }
            _ => debug!(
                "Board {}: dependency {task_id} -> {dependency_id} rejected: {check}",
                self.id
            ),
        }
        check
    }

    pub fn remove_dependency(&mut self, task_id: TaskId, dependency_id: TaskId) -> bool {
        self.tasks
            .get_mut(&task_id)
            .is_some_and(|t| t.remove_dependency(dependency_id))
    }

    pub fn check_dependency(&self, task_id: TaskId, dependency_id: TaskId) -> DependencyCheck {
        dependency_validator::check_dependency(self, task_id, dependency_id)
    }

    pub fn can_add_dependency(&self, task_id: TaskId, dependency_id: TaskId) -> bool {
        dependency_validator::can_add_dependency(self, task_id, dependency_id)
    }

    pub fn has_circular_dependency(&self, task_id: TaskId, dependency_id: TaskId) -> bool {
        dependency_validator::has_circular_dependency(self, task_id, dependency_id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(&task_id)
    }

    pub fn task_mut(&mut self, task_id: TaskId) -> Option<TaskMut<'_>> {
        self.tasks.get_mut(&task_id).map(TaskMut::new)
    }

    pub fn contains_task(&self, task_id: TaskId) -> bool {
        self.tasks.contains_key(&task_id)
    }

    /// Column order
    pub fn tasks_in_state(&self, state: &str) -> Vec<&Task> {
        self.columns
            .get(state)
            .map(|ids| ids.iter().filter_map(|id| self.tasks.get(id)).collect())
            .unwrap_or_default()
    }

    /// Id order
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.tasks.values().collect()
    }

    pub fn tasks_by_user(&self, user_id: UserId) -> Vec<&Task> {
        self.tasks
            .values()
            .filter(|t| t.assigned_user_id() == Some(user_id))
            .collect()
    }

    pub fn tasks_by_tag(&self, tag: &str) -> Vec<&Task> {
        self.tasks.values().filter(|t| t.has_tag(tag)).collect()
    }

    pub fn overdue_tasks(&self, now: DateTime<Utc>) -> Vec<&Task> {
        let terminal = self.states.terminal_state();
        self.tasks
            .values()
            .filter(|t| t.is_overdue_at(now, terminal))
            .collect()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task_count_in_state(&self, state: &str) -> usize {
        self.columns.get(state).map_or(0, Vec::len)
    }

    /// Share of tasks in the terminal state, 0 for an empty board.
    pub fn completion_percentage(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let done = self.task_count_in_state(self.states.terminal_state());
        done as f64 * 100.0 / self.tasks.len() as f64
    }
}

impl DependencyGraph for Board {
    fn contains_task(&self, task_id: TaskId) -> bool {
        self.tasks.contains_key(&task_id)
    }

    fn dependencies_of(&self, task_id: TaskId) -> Option<&BTreeSet<TaskId>> {
        self.tasks.get(&task_id).map(Task::dependencies)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board[ID: {}, Name: {}]", self.id, self.name)?;
        for state in self.states.states() {
            writeln!(f, "  {state}: {} tasks", self.task_count_in_state(state))?;
        }
        write!(f, "  Completion: {:.1}%", self.completion_percentage())
    }
}
