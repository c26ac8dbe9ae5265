use crate::{MAX_STATE_NAME_LENGTH, MIN_STATES};

use std::collections::HashSet;

use thiserror::Error as ThisError;

/// Why a column layout was refused. Callers wrap it in their own error type.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum StateLayoutError {
    #[error("at least {min} states are required, got {0}", min = MIN_STATES)]
    TooFewStates(usize),

    #[error("state names cannot be blank")]
    BlankName,

    #[error("state '{0}' exceeds {max} characters", max = MAX_STATE_NAME_LENGTH)]
    NameTooLong(String),

    #[error("state '{0}' is listed twice")]
    Duplicate(String),

    #[error("initial state '{0}' is not one of the states")]
    UnknownInitial(String),

    #[error("terminal state '{0}' is not one of the states")]
    UnknownTerminal(String),

    #[error("initial and terminal state must differ, both are '{0}'")]
    InitialIsTerminal(String),

    #[error("gated state '{0}' is not one of the states")]
    UnknownGated(String),
}

/// A single column name: not blank and at most `MAX_STATE_NAME_LENGTH` chars.
pub fn check_state_name(name: &str) -> Result<(), StateLayoutError> {
    if name.trim().is_empty() {
        return Err(StateLayoutError::BlankName);
    }
    if name.chars().count() > MAX_STATE_NAME_LENGTH {
        return Err(StateLayoutError::NameTooLong(name.to_string()));
    }
    Ok(())
}

/// A whole layout. Checked in order: count, names, duplicates, initial,
/// terminal, initial vs terminal, gated.
pub fn check_state_layout<S, G>(
    states: &[S],
    initial: &str,
    terminal: &str,
    gated: &[G],
) -> Result<(), StateLayoutError>
where
    S: AsRef<str>,
    G: AsRef<str>,
{
    if states.len() < MIN_STATES {
        return Err(StateLayoutError::TooFewStates(states.len()));
    }

    let mut seen = HashSet::with_capacity(states.len());
    for state in states.iter().map(AsRef::as_ref) {
        check_state_name(state)?;
        if !seen.insert(state) {
            return Err(StateLayoutError::Duplicate(state.to_string()));
        }
    }

    if !seen.contains(initial) {
        return Err(StateLayoutError::UnknownInitial(initial.to_string()));
    }
    if !seen.contains(terminal) {
        return Err(StateLayoutError::UnknownTerminal(terminal.to_string()));
    }
    if initial == terminal {
        return Err(StateLayoutError::InitialIsTerminal(initial.to_string()));
    }

    match gated.iter().map(AsRef::as_ref).find(|g| !seen.contains(g)) {
        Some(unknown) => Err(StateLayoutError::UnknownGated(unknown.to_string())),
        None => Ok(()),
    }
}
