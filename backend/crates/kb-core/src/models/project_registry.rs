use crate::{BoardStates, CoreResult, Project, ProjectId, Task, TaskId, TaskLimits, UserId};

use kb_config::Config;
use log::info;

use crate::models::ids::{FIRST_ID, allocate_id, reserve_id};

/// Every open project, plus which one is current.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    current: Option<ProjectId>,
    next_project_id: ProjectId,
    board_states: BoardStates,
    task_limits: TaskLimits,
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::new(BoardStates::default(), TaskLimits::default())
    }
}

impl ProjectRegistry {
    pub fn new(board_states: BoardStates, task_limits: TaskLimits) -> Self {
        Self {
            projects: Vec::new(),
            current: None,
            next_project_id: FIRST_ID,
            board_states,
            task_limits,
        }
    }

    #[track_caller]
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let board_states = BoardStates::from_config(&config.board)?;
        Ok(Self::new(board_states, TaskLimits::from(config)))
    }

    pub fn board_states(&self) -> &BoardStates {
        &self.board_states
    }

    pub fn task_limits(&self) -> TaskLimits {
        self.task_limits
    }

    /// The first project created becomes current.
    pub fn create_project(&mut self, name: &str, description: &str) -> ProjectId {
        let id = allocate_id(&mut self.next_project_id, |id| {
            self.projects.iter().any(|p| p.id() == id)
        });
        self.projects.push(Project::with_defaults(
            id,
            name,
            description,
            self.board_states.clone(),
            self.task_limits,
        ));
        self.current.get_or_insert(id);
        info!("Created project {id} '{name}'");
        id
    }

    /// Rejected when a project with the same id is already present.
    pub fn add_project(&mut self, project: Project) -> bool {
        if self.project(project.id()).is_some() {
            return false;
        }
        reserve_id(&mut self.next_project_id, project.id());
        self.current.get_or_insert(project.id());
        self.projects.push(project);
        true
    }

    /// Removing the current project selects the first remaining one.
    pub fn remove_project(&mut self, project_id: ProjectId) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id() == project_id)?;
        let removed = self.projects.remove(index);
        if self.current == Some(project_id) {
            self.current = self.projects.first().map(Project::id);
        }
        info!("Removed project {project_id}");
        Some(removed)
    }

    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == project_id)
    }

    pub fn project_mut(&mut self, project_id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id() == project_id)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn set_current_project(&mut self, project_id: ProjectId) -> bool {
        if self.project(project_id).is_none() {
            return false;
        }
        self.current = Some(project_id);
        true
    }

    pub fn current_project_id(&self) -> Option<ProjectId> {
        self.current
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current.and_then(|id| self.project(id))
    }

    pub fn current_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.current?;
        self.project_mut(id)
    }

    /// First match in project order, then board order.
    pub fn find_task_globally(&self, task_id: TaskId) -> Option<&Task> {
        self.projects.iter().find_map(|p| p.find_task_by_id(task_id))
    }

    /// User ids are per project, so this matches the id in every project.
    pub fn find_tasks_by_user_globally(&self, user_id: UserId) -> Vec<&Task> {
        self.projects
            .iter()
            .flat_map(|p| p.find_tasks_by_user(user_id))
            .collect()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn total_task_count(&self) -> usize {
        self.projects.iter().map(Project::total_task_count).sum()
    }

    pub fn clear_all_projects(&mut self) {
        self.projects.clear();
        self.current = None;
        self.next_project_id = FIRST_ID;
        info!("Cleared all projects");
    }
}
