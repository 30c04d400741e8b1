//! Caller identity and guild-membership lookups against the Discord REST API.

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::{DiscordUser, UserGuild},
};

pub struct DiscordApiService<'a> {
    http_client: &'a reqwest::Client,
    api_base_url: &'a str,
}

impl<'a> DiscordApiService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_base_url: &'a str) -> Self {
        Self {
            http_client,
            api_base_url,
        }
    }

    /// Retrieves the caller's own profile using the provided access token.
    ///
    /// # Arguments
    /// - `access_token` - Bearer token from the OAuth exchange
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The caller's profile
    /// - `Err(AppError::AuthErr)` - Transport failure, non-2xx response, or
    ///   a body that does not match the expected schema
    pub async fn get_current_user(&self, access_token: &str) -> Result<DiscordUser, AppError> {
        let body = self.get_authorized(access_token, "/users/@me").await?;

        let user = serde_json::from_str::<DiscordUser>(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(user)
    }

    /// Retrieves the guilds the caller is a member of.
    ///
    /// The returned order is whatever Discord responded with; it is not
    /// guaranteed stable between calls.
    ///
    /// # Arguments
    /// - `access_token` - Bearer token from the OAuth exchange
    ///
    /// # Returns
    /// - `Ok(Vec<UserGuild>)` - The caller's guild memberships with permission bitmasks
    /// - `Err(AppError::AuthErr)` - Transport failure, non-2xx response, or
    ///   a body that does not match the expected schema
    pub async fn get_user_guilds(&self, access_token: &str) -> Result<Vec<UserGuild>, AppError> {
        let body = self.get_authorized(access_token, "/users/@me/guilds").await?;

        let guilds = serde_json::from_str::<Vec<UserGuild>>(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(guilds)
    }

    /// Issues one bearer-authorized GET and returns the raw success body.
    ///
    /// Splitting status handling from decoding keeps provider rejections
    /// (`ProviderRejected`) distinguishable from schema mismatches
    /// (`MalformedResponse`).
    async fn get_authorized(&self, access_token: &str, path: &str) -> Result<String, AppError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.api_base_url, path))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(AuthError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(AuthError::ProviderRejected(response.status()).into());
        }

        let body = response.text().await.map_err(AuthError::RequestFailed)?;

        Ok(body)
    }
}
