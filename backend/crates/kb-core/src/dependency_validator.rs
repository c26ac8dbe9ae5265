//! Cycle detection over task dependency edges.
//!
//! Edges point from a task to the tasks it depends on. Before admitting a
//! new edge `task -> dependency` the search walks depth first from
//! `dependency` with `task` already on the stack, so reaching `task` again
//! means the edge would close a loop. Fully explored nodes are remembered
//! and never walked twice, which keeps diamond shaped graphs linear.

use crate::{DependencyCheck, TaskId};

use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};

static NO_DEPENDENCIES: BTreeSet<TaskId> = BTreeSet::new();

/// Read access to a dependency graph keyed by task id.
pub trait DependencyGraph {
    fn contains_task(&self, task_id: TaskId) -> bool;

    /// None when the task does not exist
    fn dependencies_of(&self, task_id: TaskId) -> Option<&BTreeSet<TaskId>>;
}

impl DependencyGraph for BTreeMap<TaskId, BTreeSet<TaskId>> {
    fn contains_task(&self, task_id: TaskId) -> bool {
        self.contains_key(&task_id)
    }

    fn dependencies_of(&self, task_id: TaskId) -> Option<&BTreeSet<TaskId>> {
        self.get(&task_id)
    }
}

/// True when adding `task_id -> dependency_id` would create a cycle.
///
/// A self edge is a cycle. A dependency that does not exist is not.
pub fn has_circular_dependency<G>(graph: &G, task_id: TaskId, dependency_id: TaskId) -> bool
where
    G: DependencyGraph + ?Sized,
{
    if task_id == dependency_id {
        return true;
    }
    let Some(direct) = graph.dependencies_of(dependency_id) else {
        return false;
    };
    if direct.contains(&task_id) {
        return true;
    }
    find_cycle(graph, task_id, dependency_id).is_some()
}

/// Both tasks exist, they differ, and the edge closes no cycle.
pub fn can_add_dependency<G>(graph: &G, task_id: TaskId, dependency_id: TaskId) -> bool
where
    G: DependencyGraph + ?Sized,
{
    check_dependency(graph, task_id, dependency_id).is_allowed()
}

pub fn check_dependency<G>(graph: &G, task_id: TaskId, dependency_id: TaskId) -> DependencyCheck
where
    G: DependencyGraph + ?Sized,
{
    if task_id == dependency_id {
        return DependencyCheck::SelfReference;
    }
    if !graph.contains_task(task_id) {
        return DependencyCheck::TaskNotFound(task_id);
    }
    if !graph.contains_task(dependency_id) {
        return DependencyCheck::DependencyNotFound(dependency_id);
    }
    match find_cycle(graph, task_id, dependency_id) {
        Some(path) => DependencyCheck::WouldCreateCycle { path },
        None => DependencyCheck::Allowed,
    }
}

/// The loop the edge `task_id -> dependency_id` would be part of, starting
/// and ending on the same id. Ids with no entry in the graph are leaves.
pub fn find_cycle<G>(graph: &G, task_id: TaskId, dependency_id: TaskId) -> Option<Vec<TaskId>>
where
    G: DependencyGraph + ?Sized,
{
    if task_id == dependency_id {
        return Some(vec![task_id, task_id]);
    }
    CycleSearch::new(graph).run(task_id, dependency_id)
}

struct CycleSearch<'g, G: ?Sized> {
    graph: &'g G,
    visited: BTreeSet<TaskId>,
    on_stack: BTreeSet<TaskId>,
    path: Vec<TaskId>,
    frames: Vec<btree_set::Iter<'g, TaskId>>,
}

impl<'g, G> CycleSearch<'g, G>
where
    G: DependencyGraph + ?Sized,
{
    fn new(graph: &'g G) -> Self {
        Self {
            graph,
            visited: BTreeSet::new(),
            on_stack: BTreeSet::new(),
            path: Vec::new(),
            frames: Vec::new(),
        }
    }

    fn run(mut self, origin: TaskId, start: TaskId) -> Option<Vec<TaskId>> {
        // The origin is never expanded, it stands in for the proposed edge.
        self.on_stack.insert(origin);
        self.path.push(origin);
        self.enter(start);

        loop {
            let step = match self.frames.last_mut() {
                Some(edges) => edges.next().copied(),
                None => return None,
            };

            match step {
                Some(next) if self.on_stack.contains(&next) => return Some(self.close(next)),
                Some(next) if self.visited.contains(&next) => {}
                Some(next) => self.enter(next),
                None => self.leave(),
            }
        }
    }

    fn enter(&mut self, node: TaskId) {
        let edges = self
            .graph
            .dependencies_of(node)
            .unwrap_or(&NO_DEPENDENCIES);
        self.on_stack.insert(node);
        self.path.push(node);
        self.frames.push(edges.iter());
    }

    fn leave(&mut self) {
        self.frames.pop();
        if let Some(node) = self.path.pop() {
            self.on_stack.remove(&node);
            self.visited.insert(node);
        }
    }

    fn close(mut self, back_to: TaskId) -> Vec<TaskId> {
        let from = self
            .path
            .iter()
            .position(|&id| id == back_to)
            .unwrap_or_default();
        let mut cycle = self.path.split_off(from);
        cycle.push(back_to);
        cycle
    }
}
