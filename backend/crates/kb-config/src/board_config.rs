use crate::{ConfigError, ConfigErrorResult, check_state_layout};

use serde::Deserialize;

pub const DEFAULT_PENDING_STATE: &str = "Pendiente";
pub const DEFAULT_IN_PROGRESS_STATE: &str = "En Progreso";
pub const DEFAULT_DONE_STATE: &str = "Terminado";

pub const MIN_STATES: usize = 2;
pub const MAX_STATE_NAME_LENGTH: usize = 64;

/// Column layout every new board starts with.
///
/// `initial_state` defaults to the first state and `terminal_state` to the
/// last. When `gated_states` is omitted, every state other than the initial
/// one is gated by unresolved dependencies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub states: Vec<String>,
    pub initial_state: Option<String>,
    pub terminal_state: Option<String>,
    pub gated_states: Option<Vec<String>>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            states: vec![
                DEFAULT_PENDING_STATE.to_string(),
                DEFAULT_IN_PROGRESS_STATE.to_string(),
                DEFAULT_DONE_STATE.to_string(),
            ],
            initial_state: None,
            terminal_state: None,
            gated_states: None,
        }
    }
}

impl BoardConfig {
    /// The state new tasks land in and may always return to.
    pub fn resolved_initial_state(&self) -> Option<&str> {
        self.initial_state
            .as_deref()
            .or_else(|| self.states.first().map(String::as_str))
    }

    /// The state that satisfies dependencies.
    pub fn resolved_terminal_state(&self) -> Option<&str> {
        self.terminal_state
            .as_deref()
            .or_else(|| self.states.last().map(String::as_str))
    }

    pub fn resolved_gated_states(&self) -> Vec<String> {
        match self.gated_states {
            Some(ref gated) => gated.clone(),
            None => {
                let initial = self.resolved_initial_state();
                self.states
                    .iter()
                    .filter(|s| Some(s.as_str()) != initial)
                    .cloned()
                    .collect()
            }
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let initial = self.resolved_initial_state().unwrap_or_default();
        let terminal = self.resolved_terminal_state().unwrap_or_default();

        check_state_layout(&self.states, initial, terminal, &self.resolved_gated_states())
            .map_err(|e| ConfigError::board(e.to_string()))
    }
}
