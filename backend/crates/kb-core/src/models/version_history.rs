use crate::TaskSnapshot;

use std::collections::VecDeque;

use kb_config::DEFAULT_MAX_SNAPSHOTS;
use serde::{Deserialize, Serialize};

/// Append-only, capacity-bounded list of snapshots; oldest evicted first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionHistory {
    snapshots: VecDeque<TaskSnapshot>,
    capacity: usize,
}

impl Default for VersionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SNAPSHOTS)
    }
}

impl VersionHistory {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a snapshot, returning the one evicted to stay within capacity.
    pub(crate) fn push(&mut self, snapshot: TaskSnapshot) -> Option<TaskSnapshot> {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front()
        } else {
            None
        }
    }

    /// Oldest first
    pub fn snapshots(&self) -> &VecDeque<TaskSnapshot> {
        &self.snapshots
    }

    pub fn get(&self, index: usize) -> Option<&TaskSnapshot> {
        self.snapshots.get(index)
    }

    pub fn latest(&self) -> Option<&TaskSnapshot> {
        self.snapshots.back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
