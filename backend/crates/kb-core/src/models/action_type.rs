use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of change an activity entry records. Open set: anything not
/// recognised is carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    Created,
    Moved,
    Updated,
    Assigned,
    Deleted,
    Restored,
    Other(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Moved => "moved",
            Self::Updated => "updated",
            Self::Assigned => "assigned",
            Self::Deleted => "deleted",
            Self::Restored => "restored",
            Self::Other(other) => other,
        }
    }
}

impl FromStr for ActionType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "created" => Self::Created,
            "moved" => Self::Moved,
            "updated" => Self::Updated,
            "assigned" => Self::Assigned,
            "deleted" => Self::Deleted,
            "restored" => Self::Restored,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for ActionType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(action) => action,
            Err(never) => match never {},
        }
    }
}

impl From<ActionType> for String {
    fn from(action: ActionType) -> Self {
        action.as_str().to_string()
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
