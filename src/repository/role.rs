//! In-memory role lookup table loaded from a JSON array.

use std::path::Path;
use std::sync::Arc;

use crate::domain::role::Role;
use crate::repository::RoleReader;
use crate::repository::errors::RepositoryResult;

/// Read-only role list, cheap to clone into every worker.
#[derive(Clone, Debug, Default)]
pub struct JsonRoleStore {
    roles: Arc<Vec<Role>>,
}

impl JsonRoleStore {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles: Arc::new(roles),
        }
    }

    /// Parses a JSON array of roles.
    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let roles: Vec<Role> = serde_json::from_str(json)?;
        Ok(Self::new(roles))
    }

    /// Reads and parses the JSON role file at `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleReader for JsonRoleStore {
    fn list_roles(&self) -> RepositoryResult<Vec<Role>> {
        Ok(self.roles.as_ref().clone())
    }
}
