pub mod dependency_validator;
pub mod error;
pub mod models;
pub mod reminders;


pub use error::{CoreError, Result};
pub use error::Result as CoreResult;
pub use models::action_type::ActionType;
pub use models::activity_entry::ActivityEntry;
pub use models::activity_log::ActivityLog;
pub use models::board::Board;
pub use models::board_states::BoardStates;
pub use models::dependency_check::DependencyCheck;
pub use models::ids::{BoardId, ProjectId, SubtaskId, TaskId, UserId};
pub use models::move_outcome::MoveOutcome;
pub use models::priority::{DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY, Priority};
pub use models::project::Project;
pub use models::project_registry::ProjectRegistry;
pub use models::subtask::Subtask;
pub use models::subtask_tree::SubtaskTree;
pub use models::task::Task;
pub use models::task_limits::TaskLimits;
pub use models::task_mut::TaskMut;
pub use models::task_record::TaskRecord;
pub use models::task_snapshot::TaskSnapshot;
pub use models::tracked_change::{TrackedChange, TrackedField, describe_assignee};
pub use models::user::{DEFAULT_ROLE, User};
pub use models::version_history::VersionHistory;
pub use reminders::{DueDateMonitor, DueReminder, ReminderKind};
