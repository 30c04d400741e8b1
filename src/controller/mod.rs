//! HTTP request handlers for the gateway's JSON API.
//!
//! Controllers validate required headers and body fields up front (before any
//! upstream call is made), construct the per-request services, and convert
//! domain values into response DTOs. No state outlives a request.

pub mod auth;
pub mod guild;
pub mod stats;

use axum::http::HeaderMap;

use crate::error::AppError;

/// Extracts the bearer token the dashboard sends in the `access_token`
/// header.
///
/// # Returns
/// - `Ok(&str)` - The token value
/// - `Err(AppError::BadRequest)` - Header absent or not valid ASCII
pub(crate) fn require_access_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get("access_token")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing access_token header".to_string()))
}

#[cfg(test)]
mod test;
