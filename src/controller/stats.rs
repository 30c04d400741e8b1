use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::BotStatsDto, state::AppState};

/// `GET /stats` - bot-wide counters from live in-process state.
///
/// Pure read with no failure mode: guild and user counts straight from the
/// roster, gateway latency converted to milliseconds and rounded to two
/// decimal places.
pub async fn bot_stats(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.roster.stats().await;

    let ping = (stats.latency.as_secs_f64() * 100_000.0).round() / 100.0;

    (
        StatusCode::OK,
        Json(BotStatsDto {
            guilds: stats.guild_count,
            users: stats.user_count,
            ping,
        }),
    )
}
