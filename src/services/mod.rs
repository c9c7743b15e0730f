//! Request orchestration between the HTTP layer and the repositories.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod seed;

/// Failures a service call can end in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed request input.
    #[error("{0}")]
    Validation(String),
    /// Requested page lies past the last page of the filtered set.
    #[error("page {page} is out of range, the highest valid page is {highest}")]
    InvalidPage { page: u64, highest: u64 },
    /// Filter matched no rows.
    #[error("no matching records")]
    NotFound,
    /// Storage failed or returned an unexpected shape.
    #[error("database error: {0}")]
    Database(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Database(err.to_string())
    }
}
