use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
};

use crate::{
    controller::{
        auth::{callback, get_own_user},
        guild::{get_guild_data, get_guilds},
        stats::bot_stats,
    },
    model::api::ErrorDto,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/oauth/callback", post(callback))
        .route("/users/me", get(get_own_user))
        .route("/guilds", get(get_guilds))
        .route("/guild", get(get_guild_data))
        .route("/stats", get(bot_stats))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer())
}

/// Cross-origin policy applied uniformly to every route.
///
/// The dashboard is served from a different origin and sends credentials, so
/// the request's origin, headers, and methods are mirrored back rather than
/// using the wildcard (which browsers reject alongside credentials).
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Converts a panic escaping a request handler into a generic 500 response
/// so the server process survives.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
