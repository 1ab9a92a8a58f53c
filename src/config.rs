//! Connection settings for the Sheets API.
//!
//! Values come from explicit arguments or from any environment-shaped lookup;
//! the CLI layers its flags over the process environment and `.env`.

use std::fmt;
use std::time::Duration;

use crate::error::{Result, SheetSyncError};

pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ACCESS_TOKEN_ENV: &str = "SHEETS_ACCESS_TOKEN";
pub const API_BASE_URL_ENV: &str = "SHEETS_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "SHEETS_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme and host of the Sheets API, without the `/v4` path
    pub api_base_url: String,
    /// OAuth2 bearer token obtained by the caller
    pub access_token: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build settings from a key lookup keyed by the `*_ENV` names.
    ///
    /// # Errors
    /// Returns `Config` if the access token is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ACCESS_TOKEN_ENV)
            .ok_or_else(|| SheetSyncError::Config(format!("{ACCESS_TOKEN_ENV} is not set")))?;
        let mut config = Self::new(token);

        if let Some(url) = lookup(API_BASE_URL_ENV) {
            config.api_base_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SheetSyncError::Config(format!("{TIMEOUT_ENV} must be whole seconds, got '{raw}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can be used to reach the API.
    ///
    /// # Errors
    /// Returns `Config` for an empty token, a non-http(s) base URL or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(SheetSyncError::Config(
                "access token must not be empty".to_string(),
            ));
        }
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://"))
        {
            return Err(SheetSyncError::Config(format!(
                "API base URL must be http(s), got '{}'",
                self.api_base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(SheetSyncError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
