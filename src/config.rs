use crate::error::{config::ConfigError, AppError};

const DISCORD_API_URL: &str = "https://discord.com/api";
const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

/// Default command prefixes surfaced in guild settings payloads.
const DEFAULT_COMMAND_PREFIXES: &str = "s!,S!";

/// Default port the gateway listens on when `PORT` is not set.
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub discord_bot_token: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_api_url: String,
    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub command_prefixes: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let command_prefixes = std::env::var("COMMAND_PREFIXES")
            .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIXES.to_string())
            .split(',')
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty())
            .collect();

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            discord_client_id: std::env::var("DISCORD_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_ID".to_string()))?,
            discord_client_secret: std::env::var("DISCORD_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_SECRET".to_string()))?,
            discord_redirect_url: std::env::var("DISCORD_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_REDIRECT_URL".to_string()))?,
            // The Discord endpoints are fixed in production; the env overrides
            // exist so tests can point the gateway at a local mock server.
            discord_api_url: std::env::var("DISCORD_API_URL")
                .unwrap_or_else(|_| DISCORD_API_URL.to_string()),
            discord_auth_url: std::env::var("DISCORD_AUTH_URL")
                .unwrap_or_else(|_| DISCORD_AUTH_URL.to_string()),
            discord_token_url: std::env::var("DISCORD_TOKEN_URL")
                .unwrap_or_else(|_| DISCORD_TOKEN_URL.to_string()),
            command_prefixes,
            port,
        })
    }
}
