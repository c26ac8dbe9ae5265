use crate::UserId;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "developer";

/// A project member. Identity is the id; name, email and role are editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    /// Free-text category such as "admin" or "developer"
    role: String,
}

impl User {
    pub fn new(id: UserId, name: &str, email: &str, role: &str) -> Self {
        let role = if role.is_empty() { DEFAULT_ROLE } else { role };
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_role(&mut self, role: &str) {
        self.role = role.to_string();
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User[ID: {}, Name: {}, Email: {}, Role: {}]",
            self.id, self.name, self.email, self.role
        )
    }
}
