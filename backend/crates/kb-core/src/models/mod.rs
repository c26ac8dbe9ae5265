pub mod action_type;
pub mod activity_entry;
pub mod activity_log;
pub mod board;
pub mod board_states;
pub mod dependency_check;
pub mod ids;
pub mod move_outcome;
pub mod priority;
pub mod project;
pub mod project_registry;
pub mod subtask;
pub mod subtask_tree;
pub mod task;
pub mod task_limits;
pub mod task_mut;
pub mod task_record;
pub mod task_snapshot;
pub mod tracked_change;
pub mod user;
pub mod version_history;
