//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the gateway. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The gateway itself is stateless: nothing in here is mutated by request
//! handlers. The live bot roster and the ticket store are injected behind
//! read-only trait objects, so ownership of their data stays with the bot's
//! own event loop.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::data::{roster::GuildRoster, tickets::TicketStore};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - the roster and ticket store are `Arc` trait objects
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for Discord API requests.
    ///
    /// Configured with security settings (no redirects) and a fixed outbound
    /// timeout, shared by the OAuth exchange and the identity lookups.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authorization-code exchange.
    pub oauth_client: OAuth2Client,

    /// Read-only snapshot access to the live bot roster.
    ///
    /// Owned and mutated by the Discord bot's event loop; the gateway only
    /// reads point-in-time snapshots from it.
    pub roster: Arc<dyn GuildRoster>,

    /// Per-guild modmail configuration and open-ticket lookups.
    pub ticket_store: Arc<dyn TicketStore>,

    /// Base URL of the Discord REST API.
    ///
    /// Fixed in production, overridable so tests can run against a mock server.
    pub discord_api_url: String,

    /// Command prefixes reported in guild settings payloads.
    pub command_prefixes: Vec<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after the bot has been initialized;
    /// the resulting state is provided to the Axum router for use in request
    /// handlers.
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        roster: Arc<dyn GuildRoster>,
        ticket_store: Arc<dyn TicketStore>,
        discord_api_url: String,
        command_prefixes: Vec<String>,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            roster,
            ticket_store,
            discord_api_url,
            command_prefixes,
        }
    }
}
