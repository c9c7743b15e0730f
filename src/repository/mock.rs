//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::role::Role;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EmployeeListQuery, EmployeeReader, EmployeeWriter, RoleReader};

mock! {
    pub Repository {}

    impl EmployeeReader for Repository {
        fn count_employees(&self, query: &EmployeeListQuery) -> RepositoryResult<Vec<i64>>;
        fn list_employees(&self, query: &EmployeeListQuery) -> RepositoryResult<Vec<Employee>>;
        fn count_all_employees(&self) -> RepositoryResult<usize>;
    }

    impl EmployeeWriter for Repository {
        fn create_employees(&self, new_employees: &[NewEmployee]) -> RepositoryResult<usize>;
    }

    impl RoleReader for Repository {
        fn list_roles(&self) -> RepositoryResult<Vec<Role>>;
    }
}
