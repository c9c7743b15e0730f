#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use employee_directory::db::{DbPool, establish_connection_pool, run_migrations};
use employee_directory::domain::employee::{NewEmployee, Sex};
use employee_directory::models::config::{SeedConfig, ServerConfig};
use employee_directory::repository::{DieselRepository, EmployeeWriter};
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    dir: TempDir,
    path: PathBuf,
    repo: DieselRepository,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url, Duration::from_secs(5)).expect("create pool");
        run_migrations(&pool).expect("run migrations");

        Self {
            dir,
            path,
            repo: DieselRepository::new(pool),
        }
    }

    pub fn pool(&self) -> &DbPool {
        self.repo.pool()
    }

    pub fn repo(&self) -> &DieselRepository {
        &self.repo
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.to_str().expect("utf-8 temp path").to_string()
    }

    /// Inserts `Employee 01`..`Employee {count}`; odd ids are male.
    pub fn seed(&self, count: usize) {
        let employees = (1..=count)
            .map(|i| {
                let sex = if i % 2 == 1 { Sex::Male } else { Sex::Female };
                NewEmployee::new(
                    format!("Employee {i:02}"),
                    format!("employee{i:02}@faux-ltd.com"),
                    sex,
                )
            })
            .collect::<Vec<_>>();
        self.insert(&employees);
    }

    pub fn insert(&self, employees: &[NewEmployee]) {
        let inserted = self
            .repo
            .create_employees(employees)
            .expect("insert employees");
        assert_eq!(inserted, employees.len());
    }
}

pub fn server_config(database_url: String) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url,
        roles_file: None,
        query_timeout_secs: 5,
        seed: SeedConfig::default(),
    }
}
