//! Change records produced by a task's tracked setters.
//!
//! A setter first builds a [`TrackedChange`] by comparing old and new
//! values (no change, no record), then the task applies it: one activity
//! entry, plus a version snapshot for every field except the assignee.
//! The record is handed back to the caller.

use crate::{ActionType, ActivityLog, UserId};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedField {
    Title,
    Description,
    State,
    Assignee,
}

impl TrackedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::State => "state",
            Self::Assignee => "assignee",
        }
    }

    /// Assignment changes are logged but not versioned.
    pub fn takes_snapshot(&self) -> bool {
        !matches!(self, Self::Assignee)
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            Self::Title | Self::Description => ActionType::Updated,
            Self::State => ActionType::Moved,
            Self::Assignee => ActionType::Assigned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedChange {
    field: TrackedField,
    old_value: String,
    new_value: String,
    author: String,
}

impl TrackedChange {
    /// Compare a text field. Returns None when the value is unchanged.
    pub fn track(field: TrackedField, old_value: &str, new_value: &str, author: &str) -> Option<Self> {
        if old_value == new_value {
            return None;
        }
        Some(Self {
            field,
            old_value: old_value.to_string(),
            new_value: new_value.to_string(),
            author: author.to_string(),
        })
    }

    /// Compare assignees. Returns None when the assignee is unchanged.
    pub fn track_assignee(
        old_value: Option<UserId>,
        new_value: Option<UserId>,
        author: &str,
    ) -> Option<Self> {
        if old_value == new_value {
            return None;
        }
        Some(Self {
            field: TrackedField::Assignee,
            old_value: describe_assignee(old_value),
            new_value: describe_assignee(new_value),
            author: author.to_string(),
        })
    }

    pub fn field(&self) -> TrackedField {
        self.field
    }

    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn takes_snapshot(&self) -> bool {
        self.field.takes_snapshot()
    }

    pub fn action_type(&self) -> ActionType {
        self.field.action_type()
    }

    /// Append the matching entry to `log`. Description values are cut to
    /// `preview_chars` characters.
    pub fn record(&self, log: &mut ActivityLog, preview_chars: usize) {
        match self.field {
            TrackedField::Title => {
                log.log_update(&self.author, "title", &self.old_value, &self.new_value)
            }
            TrackedField::Description => log.log_update(
                &self.author,
                "description",
                &preview(&self.old_value, preview_chars),
                &preview(&self.new_value, preview_chars),
            ),
            TrackedField::State => log.log_move(&self.author, &self.old_value, &self.new_value),
            TrackedField::Assignee => {
                log.log_assignment(&self.author, &self.old_value, &self.new_value)
            }
        }
    }
}

pub fn describe_assignee(user_id: Option<UserId>) -> String {
    match user_id {
        Some(id) => format!("user #{id}"),
        None => String::from("unassigned"),
    }
}

fn preview(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
