//! Configuration for the osu! API client and the renderer.
//!
//! This module contains:
//! - `Secret` - a redacted wrapper for the OAuth client secret
//! - `ApiConfig` - credentials and request options passed to `OsuClient`
//! - API and plot configuration constants

mod secret;

pub use secret::Secret;

use crate::error::{Error, Result};
use crate::score::GameMode;

/// osu! API configuration.
pub mod api {
    use std::time::Duration;

    /// Base URL of the osu! API v2.
    pub const BASE_URL: &str = "https://osu.ppy.sh/api/v2";

    /// OAuth token endpoint.
    pub const TOKEN_URL: &str = "https://osu.ppy.sh/oauth/token";

    /// Pins the legacy score format the `Score` model describes.
    pub const API_VERSION: &str = "20220704";

    /// Scope requested with the client credentials grant.
    pub const SCOPE: &str = "public";

    /// Timeout applied to every request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Number of scores requested per list when no limit is given.
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Largest page the user-scores endpoint accepts.
    pub const MAX_LIMIT: u32 = 100;

    /// Where operators create OAuth applications.
    pub const ACCOUNT_SETTINGS_URL: &str = "https://osu.ppy.sh/home/account/edit";
}

/// Renderer configuration.
pub mod plot {
    /// Output path used when none is given.
    pub const DEFAULT_OUTPUT: &str = "pp_star_rating.svg";

    /// Image width in pixels.
    pub const WIDTH: u32 = 1024;

    /// Image height in pixels.
    pub const HEIGHT: u32 = 768;
}

/// Credentials and request options for the osu! API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub client_id: String,
    pub client_secret: Secret,
    pub base_url: String,
    pub token_url: String,
    pub mode: Option<GameMode>,
    pub limit: u32,
    pub include_fails: bool,
}

impl ApiConfig {
    /// Build a config from possibly-missing credentials.
    ///
    /// Empty strings count as missing.
    pub fn from_credentials(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
        let client_id = client_id
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingCredentials("CLIENT_ID"))?;
        let client_secret = client_secret
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingCredentials("CLIENT_SECRET"))?;

        Ok(Self::new(client_id, Secret::new(client_secret)))
    }

    pub fn new(client_id: String, client_secret: Secret) -> Self {
        Self {
            client_id,
            client_secret,
            base_url: api::BASE_URL.to_string(),
            token_url: api::TOKEN_URL.to_string(),
            mode: None,
            limit: api::DEFAULT_LIMIT,
            include_fails: false,
        }
    }

    pub fn with_mode(mut self, mode: Option<GameMode>) -> Self {
        self.mode = mode;
        self
    }

    /// Set the per-list limit, clamped to `1..=MAX_LIMIT`.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, api::MAX_LIMIT);
        self
    }

    pub fn with_include_fails(mut self, include_fails: bool) -> Self {
        self.include_fails = include_fails;
        self
    }
}

/// Explanation printed when `CLIENT_ID` or `CLIENT_SECRET` is missing.
pub fn missing_credentials_message() -> String {
    format!(
        "This tool requires a client ID and secret to access the osu! API.\n\
         Please go to your account settings ({}), create an OAuth application if you don't \
         already have one, and set the `CLIENT_ID` and `CLIENT_SECRET` environment variables \
         with the client ID and secret for your application.\n\
         NEVER, EVER SHARE YOUR CLIENT SECRET WITH **ANYONE!**",
        api::ACCOUNT_SETTINGS_URL
    )
}

/// Parse a user ID entered by the operator or read from the environment.
pub fn parse_user_id(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| Error::InvalidUserId(trimmed.to_string()))
}
