use crate::{TaskId, TrackedChange};

/// What `Board::move_task` did. Every variant other than `Moved` left the
/// board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(TrackedChange),
    /// Task already in the requested state
    Unchanged,
    UnknownState,
    TaskNotFound,
    /// Target state is gated and these dependencies are not finished
    Blocked { blocking: Vec<TaskId> },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}
