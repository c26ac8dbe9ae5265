use crate::{CoreError, CoreResult};

use std::collections::{BTreeSet, HashSet};

use kb_config::{
    BoardConfig, DEFAULT_DONE_STATE, DEFAULT_IN_PROGRESS_STATE, DEFAULT_PENDING_STATE,
    check_state_layout, check_state_name,
};
use serde::Serialize;

/// Ordered column names of a board plus the roles some of them play.
///
/// - initial: where new tasks land; moving back to it is never gated
/// - terminal: the state that satisfies a dependency
/// - gated: entering requires every dependency to be in the terminal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardStates {
    states: Vec<String>,
    initial: String,
    terminal: String,
    gated: BTreeSet<String>,
}

impl Default for BoardStates {
    fn default() -> Self {
        Self {
            states: vec![
                DEFAULT_PENDING_STATE.to_string(),
                DEFAULT_IN_PROGRESS_STATE.to_string(),
                DEFAULT_DONE_STATE.to_string(),
            ],
            initial: DEFAULT_PENDING_STATE.to_string(),
            terminal: DEFAULT_DONE_STATE.to_string(),
            gated: [DEFAULT_IN_PROGRESS_STATE, DEFAULT_DONE_STATE]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl BoardStates {
    #[track_caller]
    pub fn new<S: Into<String>>(
        states: Vec<S>,
        initial: &str,
        terminal: &str,
        gated: &[&str],
    ) -> CoreResult<Self> {
        let states: Vec<String> = states.into_iter().map(Into::into).collect();

        if let Err(e) = check_state_layout(&states, initial, terminal, gated) {
            return Err(CoreError::board_states(e.to_string()));
        }

        Ok(Self {
            initial: initial.to_string(),
            terminal: terminal.to_string(),
            gated: gated.iter().map(|g| g.to_string()).collect(),
            states,
        })
    }

    #[track_caller]
    pub fn from_config(config: &BoardConfig) -> CoreResult<Self> {
        let initial = config
            .resolved_initial_state()
            .ok_or_else(|| CoreError::board_states("no initial state configured"))?;
        let terminal = config
            .resolved_terminal_state()
            .ok_or_else(|| CoreError::board_states("no terminal state configured"))?;
        let gated = config.resolved_gated_states();
        let gated: Vec<&str> = gated.iter().map(String::as_str).collect();

        Self::new(config.states.clone(), initial, terminal, &gated)
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    pub fn terminal_state(&self) -> &str {
        &self.terminal
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    pub fn is_initial(&self, state: &str) -> bool {
        self.initial == state
    }

    pub fn is_terminal(&self, state: &str) -> bool {
        self.terminal == state
    }

    pub fn is_gated(&self, state: &str) -> bool {
        self.gated.contains(state)
    }

    pub fn gated_states(&self) -> impl Iterator<Item = &str> {
        self.gated.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    // Mutations below are driven by the owning board, which also keeps the
    // task columns in step.

    /// New states are appended ungated.
    pub(crate) fn add_state(&mut self, state: &str) -> bool {
        if check_state_name(state).is_err() || self.has_state(state) {
            return false;
        }
        self.states.push(state.to_string());
        true
    }

    /// The initial and terminal states can never be removed.
    pub(crate) fn remove_state(&mut self, state: &str) -> bool {
        if self.is_initial(state) || self.is_terminal(state) || !self.has_state(state) {
            return false;
        }
        self.states.retain(|s| s != state);
        self.gated.remove(state);
        true
    }

    /// Accepts only a permutation of the current states.
    pub(crate) fn reorder<S: AsRef<str>>(&mut self, order: &[S]) -> bool {
        if order.len() != self.states.len() {
            return false;
        }
        let wanted: HashSet<&str> = order.iter().map(AsRef::as_ref).collect();
        if wanted.len() != order.len() || !wanted.iter().all(|s| self.has_state(s)) {
            return false;
        }
        self.states = order.iter().map(|s| s.as_ref().to_string()).collect();
        true
    }

    pub(crate) fn set_gated(&mut self, state: &str, gated: bool) -> bool {
        if !self.has_state(state) {
            return false;
        }
        if gated {
            self.gated.insert(state.to_string())
        } else {
            self.gated.remove(state)
        }
    }
}

impl std::fmt::Display for BoardStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .states
            .iter()
            .map(|s| {
                let mut marks = String::new();
                if self.is_initial(s) {
                    marks.push('^');
                }
                if self.is_terminal(s) {
                    marks.push('$');
                }
                if self.is_gated(s) {
                    marks.push('*');
                }
                format!("{s}{marks}")
            })
            .collect();
        write!(f, "{}", rendered.join(" | "))
    }
}
