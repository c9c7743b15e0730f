//! HTTP handlers.

use std::time::Duration;

use actix_web::{rt, web};
use log::{error, warn};

use crate::errors::ApiError;

pub mod api;
pub mod main;

/// Detail returned when blocking work outlives its deadline.
pub const QUERY_TIMEOUT_DETAIL: &str = "query timed out";

/// Query extractor settings that render malformed query strings as
/// [`ApiError`] bodies.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        warn!("Rejected query string: {err}");
        ApiError::bad_request(err.to_string()).into()
    })
}

/// Runs `work` on the blocking thread pool and gives up after `limit`.
///
/// Expiry yields a 504 and a failed worker a 500. The worker itself is not
/// cancelled and finishes in the background.
pub async fn block_with_timeout<F, R>(limit: Duration, work: F) -> Result<R, ApiError>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    match rt::time::timeout(limit, web::block(work)).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => {
            error!("Blocking worker failed: {e}");
            Err(ApiError::internal("internal server error"))
        }
        Err(_) => {
            error!("Blocking work exceeded {}ms", limit.as_millis());
            Err(ApiError::gateway_timeout(QUERY_TIMEOUT_DETAIL))
        }
    }
}
