use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Upstream identity-provider failures.
///
/// Every variant maps to 502 Bad Gateway: Discord, not this service, failed
/// the request. None of these are retried; authorization codes are
/// single-use, so a retry would fail anyway, and token-bearing requests are
/// reported back to the caller instead.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The token endpoint rejected the authorization-code exchange.
    ///
    /// Covers provider error responses (bad or already-consumed code, wrong
    /// credentials) as well as transport failures during the exchange.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),

    /// An identity request to the Discord REST API failed in transport.
    #[error("Discord API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The Discord REST API answered with a non-success status.
    #[error("Discord API rejected the request with status {0}")]
    ProviderRejected(StatusCode),

    /// The provider's response body did not match the expected schema.
    ///
    /// A missing or mistyped field surfaces here instead of propagating a
    /// raw deserialization fault.
    #[error("Discord API returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Converts upstream auth failures into HTTP responses.
///
/// The error text is returned to the caller so the dashboard can distinguish
/// an exchange failure from a rejected token; the full error is also logged.
///
/// # Returns
/// - 502 Bad Gateway - For all variants
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("Upstream auth failure: {}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
