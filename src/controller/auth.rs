use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::require_access_token,
    error::AppError,
    model::api::{AccessTokenDto, CallbackDto, OwnUserDto},
    service::{discord::DiscordApiService, oauth::DiscordAuthService},
    state::AppState,
};

/// `POST /oauth/callback` - exchanges the browser's authorization code for a
/// bearer access token.
///
/// The code is validated before any outbound call; a body without a
/// non-empty `code.code` is a 400. The token is returned to the dashboard
/// and never stored server-side; every later request carries it back in the
/// `access_token` header.
pub async fn callback(
    State(state): State<AppState>,
    Json(body): Json<CallbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let code = body
        .code
        .and_then(|wrapper| wrapper.code)
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".to_string()))?;

    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    let access_token = auth_service.exchange_code(code).await?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access_token })))
}

/// `GET /users/me` - returns the caller's own Discord profile.
pub async fn get_own_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let access_token = require_access_token(&headers)?;

    let api_service = DiscordApiService::new(&state.http_client, &state.discord_api_url);

    let user = api_service.get_current_user(access_token).await?;

    Ok((StatusCode::OK, Json(OwnUserDto::from(user))))
}
