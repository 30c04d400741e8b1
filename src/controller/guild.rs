use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    controller::require_access_token,
    error::AppError,
    model::api::{
        ChannelDto, ErrorDto, GuildDataDto, GuildListDto, GuildSettingsDto, ManageableGuildDto,
        RoleDto, TicketDto,
    },
    service::{discord::DiscordApiService, guild::filter_manageable_guilds},
    state::AppState,
};

/// `GET /guilds` - lists the guilds the caller can manage and the bot is in.
///
/// Composes the caller's guild list from Discord with the current bot roster
/// and keeps only mutual guilds where the caller has MANAGE_GUILD.
pub async fn get_guilds(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let access_token = require_access_token(&headers)?;

    let api_service = DiscordApiService::new(&state.http_client, &state.discord_api_url);

    let user_guilds = api_service.get_user_guilds(access_token).await?;
    let bot_guild_ids = state.roster.guild_ids().await;

    let manageable = filter_manageable_guilds(user_guilds, &bot_guild_ids);

    Ok((
        StatusCode::OK,
        Json(GuildListDto {
            guilds: manageable.iter().map(ManageableGuildDto::from).collect(),
        }),
    ))
}

/// `GET /guild` - full public metadata and stored modmail configuration for
/// one guild.
///
/// A malformed or unknown guild id is answered with HTTP 200 and an `error`
/// body, not an HTTP error status. The deployed dashboard depends on that
/// encoding, so it is kept even though the auth routes use real 400s.
pub async fn get_guild_data(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let raw_guild_id = headers
        .get("guild_id")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing guild_id header".to_string()))?;

    let Ok(guild_id) = raw_guild_id.parse::<u64>() else {
        return Ok(error_body("Invalid guild id"));
    };

    // The roster may change between reads within this request; a guild that
    // disappears mid-request is simply not found.
    let Some(guild) = state.roster.guild(guild_id).await else {
        return Ok(error_body("Guild not found"));
    };

    let settings = match state.ticket_store.guild_settings(guild_id).await {
        Some(stored) => {
            let open_tickets = state.ticket_store.open_tickets(guild_id).await;

            // Each stored reference may point at a deleted role or channel;
            // misses surface as null without hiding the rest.
            Some(GuildSettingsDto {
                prefixes: state.command_prefixes.clone(),
                mod_role: guild.role(stored.staff_role).map(RoleDto::from),
                ticket_category: guild.channel(stored.category).map(ChannelDto::from),
                transcripts_channel: guild.channel(stored.transcripts).map(ChannelDto::from),
                current_tickets: open_tickets.iter().map(TicketDto::from).collect(),
            })
        }
        None => None,
    };

    Ok((StatusCode::OK, Json(GuildDataDto::from_snapshot(&guild, settings))).into_response())
}

/// 200 response with an `{"error": ...}` body, the `/guild` endpoint's
/// error encoding.
fn error_body(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
