//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    #[validate(length(min = 1))]
    pub database_url: String,
    /// JSON file holding the role lookup list.
    #[serde(default)]
    pub roles_file: Option<String>,
    /// Upper bound for a single request's database work.
    #[validate(range(min = 1))]
    pub query_timeout_secs: u64,
    #[serde(default)]
    #[validate(nested)]
    pub seed: SeedConfig,
}

impl ServerConfig {
    /// Deadline for one listing request's database work.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Pool checkout and SQLite lock wait. Always longer than
    /// [`request_timeout`](Self::request_timeout), so a request stuck on an
    /// exhausted pool or a locked database ends as a request timeout.
    pub fn storage_timeout(&self) -> Duration {
        self.request_timeout().saturating_mul(2)
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Controls how the employee table is provisioned at startup.
pub struct SeedConfig {
    /// Always insert `size` synthetic employees.
    #[serde(default)]
    pub generate: bool,
    /// Insert `size` synthetic employees only when the table is empty.
    #[serde(default)]
    pub generate_if_empty: bool,
    #[validate(range(min = 1, max = 100_000))]
    pub size: usize,
    /// Delete the database file before opening it.
    #[serde(default)]
    pub reset: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            generate: false,
            generate_if_empty: false,
            size: 10,
            reset: false,
        }
    }
}
