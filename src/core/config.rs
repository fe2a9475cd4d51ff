//! Client configuration: where the API lives, how to authenticate, and how
//! long to wait.
//!
//! Every setting can come from a command-line flag or an environment
//! variable; the flag wins when both are present.

use crate::{
    error::{Result, RosterError},
    models::PlayerId,
    API_TOKEN_ENV_VAR, API_URL_ENV_VAR, TIMEOUT_ENV_VAR,
};
use reqwest::Url;
use std::time::Duration;

/// Connection settings for [`crate::HttpPlayerDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    pub token: Option<String>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Validate `base_url` (http or https, trailing slashes dropped).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use club_roster::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://localhost:5000/api/").unwrap();
    /// assert_eq!(config.base_url(), "http://localhost:5000/api");
    /// assert_eq!(config.players_url(), "http://localhost:5000/api/players");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();

        let url = Url::parse(&trimmed).map_err(|e| RosterError::InvalidApiUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RosterError::InvalidApiUrl {
                url: raw,
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed,
            token: None,
            timeout: None,
        })
    }

    /// Build a config from optional flag values, falling back to the
    /// environment for anything not given.
    pub fn from_sources(
        api_url: Option<String>,
        token: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let mut config = Self::new(resolve_api_url(api_url)?)?;
        config.token = resolve_token(token);
        config.timeout = resolve_timeout(timeout_secs)?;
        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether write requests will carry credentials.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn players_url(&self) -> String {
        format!("{}/players", self.base_url)
    }

    pub fn player_url(&self, id: PlayerId) -> String {
        format!("{}/players/{}", self.base_url, id)
    }
}

/// Resolve the API base URL from the flag value or `CLUB_ROSTER_API_URL`.
pub fn resolve_api_url(api_url: Option<String>) -> Result<String> {
    api_url
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| RosterError::MissingApiUrl {
            env_var: API_URL_ENV_VAR.to_string(),
        })
}

/// Resolve the bearer token from the flag value or `CLUB_ROSTER_API_TOKEN`.
pub fn resolve_token(token: Option<String>) -> Option<String> {
    token
        .or_else(|| std::env::var(API_TOKEN_ENV_VAR).ok())
        .filter(|t| !t.trim().is_empty())
}

/// Resolve the request timeout from the flag value or
/// `CLUB_ROSTER_TIMEOUT_SECS`. No timeout when neither is set.
pub fn resolve_timeout(timeout_secs: Option<u64>) -> Result<Option<Duration>> {
    if let Some(secs) = timeout_secs {
        return Ok(Some(Duration::from_secs(secs)));
    }
    match std::env::var(TIMEOUT_ENV_VAR) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| RosterError::InvalidTimeout { value: raw }),
        _ => Ok(None),
    }
}
