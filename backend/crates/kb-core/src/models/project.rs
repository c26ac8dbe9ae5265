use crate::{Board, BoardId, BoardStates, ProjectId, Task, TaskId, TaskLimits, User, UserId};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::models::ids::{FIRST_ID, allocate_id, reserve_id};

/// Boards plus the users that work on them.
///
/// Boards created here start from the project's state layout and task
/// limits.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    created_date: DateTime<Utc>,
    boards: Vec<Board>,
    users: BTreeMap<UserId, User>,
    next_board_id: BoardId,
    next_user_id: UserId,
    board_states: BoardStates,
    task_limits: TaskLimits,
}

impl Project {
    pub fn new(id: ProjectId, name: &str, description: &str) -> Self {
        Self::with_defaults(
            id,
            name,
            description,
            BoardStates::default(),
            TaskLimits::default(),
        )
    }

    pub fn with_defaults(
        id: ProjectId,
        name: &str,
        description: &str,
        board_states: BoardStates,
        task_limits: TaskLimits,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_date: Utc::now(),
            boards: Vec::new(),
            users: BTreeMap::new(),
            next_board_id: FIRST_ID,
            next_user_id: FIRST_ID,
            board_states,
            task_limits,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    // =========================================================================
    // Boards
    // =========================================================================

    pub fn create_board(&mut self, name: &str, description: &str) -> BoardId {
        let id = allocate_id(&mut self.next_board_id, |id| {
            self.boards.iter().any(|b| b.id() == id)
        });
        self.boards.push(Board::with_states(
            id,
            name,
            description,
            self.board_states.clone(),
            self.task_limits,
        ));
        info!("Project {}: Created board {id} '{name}'", self.id);
        id
    }

    /// Rejected when a board with the same id is already present.
    pub fn add_board(&mut self, board: Board) -> bool {
        if self.board(board.id()).is_some() {
            debug!("Project {}: board {} already present", self.id, board.id());
            return false;
        }
        reserve_id(&mut self.next_board_id, board.id());
        self.boards.push(board);
        true
    }

    pub fn remove_board(&mut self, board_id: BoardId) -> Option<Board> {
        let index = self.boards.iter().position(|b| b.id() == board_id)?;
        info!("Project {}: Removed board {board_id}", self.id);
        Some(self.boards.remove(index))
    }

    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id() == board_id)
    }

    pub fn board_mut(&mut self, board_id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id() == board_id)
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    // =========================================================================
    // Users
    // =========================================================================

    pub fn create_user(&mut self, name: &str, email: &str, role: &str) -> UserId {
        let id = allocate_id(&mut self.next_user_id, |id| self.users.contains_key(&id));
        self.users.insert(id, User::new(id, name, email, role));
        id
    }

    /// Replaces any user with the same id.
    pub fn add_user(&mut self, user: User) {
        reserve_id(&mut self.next_user_id, user.id());
        self.users.insert(user.id(), user);
    }

    /// Tasks assigned to the user keep the id.
    pub fn remove_user(&mut self, user_id: UserId) -> Option<User> {
        self.users.remove(&user_id)
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn user_mut(&mut self, user_id: UserId) -> Option<&mut User> {
        self.users.get_mut(&user_id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email() == email)
    }

    /// Id order
    pub fn users(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Task ids are only unique per board; the first board wins.
    pub fn find_task_by_id(&self, task_id: TaskId) -> Option<&Task> {
        self.boards.iter().find_map(|b| b.task(task_id))
    }

    pub fn find_tasks_by_user(&self, user_id: UserId) -> Vec<&Task> {
        self.boards
            .iter()
            .flat_map(|b| b.tasks_by_user(user_id))
            .collect()
    }

    /// Case-sensitive substring match, board order then id order.
    pub fn find_tasks_by_title(&self, text: &str) -> Vec<&Task> {
        self.boards
            .iter()
            .flat_map(|b| b.all_tasks())
            .filter(|t| t.title().contains(text))
            .collect()
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    pub fn total_task_count(&self) -> usize {
        self.boards.iter().map(Board::task_count).sum()
    }

    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Mean of the boards' own percentages, so every board weighs the same
    /// regardless of size. 0 without boards.
    pub fn overall_completion_percentage(&self) -> f64 {
        if self.boards.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.boards.iter().map(Board::completion_percentage).sum();
        sum / self.boards.len() as f64
    }

    /// Drops every board and user and restarts both id counters at 1.
    pub fn clear_all_data(&mut self) {
        self.boards.clear();
        self.users.clear();
        self.next_board_id = FIRST_ID;
        self.next_user_id = FIRST_ID;
        info!("Project {}: Cleared all data", self.id);
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Project[ID: {}, Name: {}]", self.id, self.name)?;
        writeln!(f, "  Boards: {}", self.board_count())?;
        writeln!(f, "  Users: {}", self.user_count())?;
        writeln!(f, "  Total Tasks: {}", self.total_task_count())?;
        write!(f, "  Completion: {:.1}%", self.overall_completion_percentage())
    }
}
