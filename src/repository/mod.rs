use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        employee::{Employee, NewEmployee},
        role::Role,
    },
    repository::errors::RepositoryResult,
};

pub mod employee;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod query;
pub mod role;

pub use query::{EmployeeListQuery, Pagination};
pub use role::JsonRoleStore;

/// Diesel-backed storage handle shared by every request.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Read-only access to the employee table.
///
/// Listing reads always return every row as a `Vec`, whether the query
/// matched zero, one or many rows.
pub trait EmployeeReader {
    /// Runs the count query for `query`, returning the value of each row.
    fn count_employees(&self, query: &EmployeeListQuery) -> RepositoryResult<Vec<i64>>;
    /// Runs the page query for `query`, returning the selected employees.
    fn list_employees(&self, query: &EmployeeListQuery) -> RepositoryResult<Vec<Employee>>;
    /// Total number of rows in the table, ignoring any filter.
    fn count_all_employees(&self) -> RepositoryResult<usize>;
}

pub trait EmployeeWriter {
    fn create_employees(&self, new_employees: &[NewEmployee]) -> RepositoryResult<usize>;
}

pub trait RoleReader {
    fn list_roles(&self) -> RepositoryResult<Vec<Role>>;
}
