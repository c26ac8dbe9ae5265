use crate::TaskId;

/// Verdict on a proposed "task depends on dependency" edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyCheck {
    Allowed,
    SelfReference,
    TaskNotFound(TaskId),
    DependencyNotFound(TaskId),
    /// The edge would close this loop, first and last id equal
    WouldCreateCycle { path: Vec<TaskId> },
}

impl DependencyCheck {
    pub fn is_allowed(&self) -> bool {
        matches!(self, DependencyCheck::Allowed)
    }
}

impl std::fmt::Display for DependencyCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyCheck::Allowed => write!(f, "allowed"),
            DependencyCheck::SelfReference => write!(f, "a task cannot depend on itself"),
            DependencyCheck::TaskNotFound(id) => write!(f, "task {id} not found"),
            DependencyCheck::DependencyNotFound(id) => write!(f, "dependency {id} not found"),
            DependencyCheck::WouldCreateCycle { path } => {
                let rendered: Vec<String> = path.iter().map(|id| id.to_string()).collect();
                write!(f, "would create cycle {}", rendered.join(" -> "))
            }
        }
    }
}
