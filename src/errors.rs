//! HTTP error payloads and mapping from service errors.
//!
//! Every failed request leaves the API as an [`ApiError`] rendered to
//! `{"error": "<detail>"}` with the error's status code.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

/// Detail sent to clients in place of storage driver messages.
pub const DATABASE_ERROR_DETAIL: &str = "internal database error";

/// Structured API failure: status code, reason phrase and detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} {status_text}: {detail}")]
pub struct ApiError {
    code: u16,
    status_text: String,
    detail: String,
}

impl ApiError {
    /// Builds an error for `code`, falling back to 500 outside 100..=599.
    pub fn new(code: u16, detail: impl Into<String>) -> Self {
        let code = if (100..=599).contains(&code) {
            code
        } else {
            StatusCode::INTERNAL_SERVER_ERROR.as_u16()
        };
        let status_text = StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown")
            .to_string();

        Self {
            code,
            status_text,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST.as_u16(), detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND.as_u16(), detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), detail)
    }

    pub fn gateway_timeout(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::GATEWAY_TIMEOUT.as_u16(), detail)
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.detail.clone(),
        })
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(detail) => ApiError::bad_request(detail),
            err @ ServiceError::InvalidPage { .. } => ApiError::bad_request(err.to_string()),
            err @ ServiceError::NotFound => ApiError::not_found(err.to_string()),
            ServiceError::Database(detail) => {
                error!("Database failure surfaced to client as 500: {detail}");
                ApiError::internal(DATABASE_ERROR_DETAIL)
            }
        }
    }
}
