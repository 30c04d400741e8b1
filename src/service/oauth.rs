//! OAuth2 authorization-code exchange with Discord.

use oauth2::{AuthorizationCode, TokenResponse};

use crate::{
    error::{auth::AuthError, AppError},
    state::OAuth2Client,
};

pub struct DiscordAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Exchanges an authorization code for a bearer access token.
    ///
    /// Issues a single POST to Discord's token endpoint carrying the client
    /// credentials, the code, and the fixed redirect URI. Only the access
    /// token is extracted from the response; nothing is stored. The exchange
    /// is never retried; authorization codes are single-use, so a retry
    /// would fail regardless.
    ///
    /// # Arguments
    /// - `authorization_code` - Code issued to the browser by Discord's consent screen
    ///
    /// # Returns
    /// - `Ok(String)` - The bearer access token
    /// - `Err(AppError::AuthErr)` - Transport failure, provider rejection, or
    ///   a response without an access token
    pub async fn exchange_code(&self, authorization_code: String) -> Result<String, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        Ok(token.access_token().secret().clone())
    }
}
