use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while turning unchecked input into domain values.
///
/// Domain mutations never return these; a rejected mutation is a no-op
/// reported through its return value.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid priority: {value} (expected {min}-{max}) {location}")]
    InvalidPriority {
        value: i32,
        min: u8,
        max: u8,
        location: ErrorLocation,
    },

    #[error("Invalid board states: {message} {location}")]
    InvalidBoardStates {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn board_states<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidBoardStates {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
