use std::time::Duration;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Timeout applied to every outbound HTTP call to Discord.
///
/// A stalled Discord endpoint must not pin request tasks forever, so every
/// client call carries a fixed deadline.
const OUTBOUND_TIMEOUT_SECS: u64 = 10;

/// Builds the shared HTTP client used for all Discord API requests.
///
/// Redirects are disabled to prevent SSRF via a redirecting endpoint, which
/// is also what the `oauth2` crate expects of the client it is handed.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured HTTP client
/// - `Err(AppError)` - The client builder rejected the configuration
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(OUTBOUND_TIMEOUT_SECS))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord's authorization-code flow.
///
/// The client carries the application credentials, the fixed redirect URI
/// registered with Discord, and the provider's endpoint URLs from
/// configuration.
///
/// # Arguments
/// - `config` - Application configuration with Discord credentials and endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client ready to exchange authorization codes
/// - `Err(AppError)` - A configured endpoint URL failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone()).map_err(|e| {
        ConfigError::InvalidEndpointUrl {
            url: config.discord_auth_url.clone(),
            source: e,
        }
    })?;
    let token_url = TokenUrl::new(config.discord_token_url.clone()).map_err(|e| {
        ConfigError::InvalidEndpointUrl {
            url: config.discord_token_url.clone(),
            source: e,
        }
    })?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|e| {
        ConfigError::InvalidEndpointUrl {
            url: config.discord_redirect_url.clone(),
            source: e,
        }
    })?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}
