//! Client configuration
//!
//! Credentials resolve from explicit values first, then from the
//! `RRPPROXY_USERNAME` / `RRPPROXY_PASSWORD` environment variables.
//! The API has two environments: live and OTE (the operational test
//! environment); the OTE toggle picks the endpoint.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Live API endpoint.
pub const LIVE_URL: &str = "https://api.rrpproxy.net/";

/// OTE (test environment) API endpoint.
pub const OTE_URL: &str = "https://api-ote.rrpproxy.net/";

/// Environment variable holding the account username.
pub const USERNAME_VAR: &str = "RRPPROXY_USERNAME";

/// Environment variable holding the account password.
pub const PASSWORD_VAR: &str = "RRPPROXY_PASSWORD";

/// RRPproxy account credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username (`s_login`)
    pub username: String,
    /// Account password (`s_pw`)
    pub password: String,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Resolve credentials from the environment
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None)
    }

    /// Resolve credentials, preferring explicit values over the
    /// environment variables
    pub fn resolve(username: Option<String>, password: Option<String>) -> Result<Self> {
        let username = username
            .or_else(|| env::var(USERNAME_VAR).ok())
            .ok_or_else(|| Error::missing_credential(USERNAME_VAR))?;
        let password = password
            .or_else(|| env::var(PASSWORD_VAR).ok())
            .ok_or_else(|| Error::missing_credential(PASSWORD_VAR))?;
        Ok(Self { username, password })
    }
}

impl std::fmt::Display for Credentials {
    // Never render the password.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:***", self.username)
    }
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account credentials
    pub credentials: Credentials,
    /// Use the OTE environment instead of live
    pub ote: bool,
    /// Explicit endpoint override (mainly for tests)
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config for the live environment
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ote: false,
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("rrpproxy-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Toggle the OTE environment
    #[must_use]
    pub fn ote(mut self, ote: bool) -> Self {
        self.ote = ote;
        self
    }

    /// Override the endpoint URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint this config points at
    pub fn endpoint(&self) -> &str {
        match &self.base_url {
            Some(url) => url,
            None if self.ote => OTE_URL,
            None => LIVE_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("user", "secret")
    }

    #[test]
    fn test_endpoint_selection() {
        let config = ClientConfig::new(creds());
        assert_eq!(config.endpoint(), LIVE_URL);

        let config = ClientConfig::new(creds()).ote(true);
        assert_eq!(config.endpoint(), OTE_URL);

        let config = ClientConfig::new(creds()).base_url("http://localhost:9999/");
        assert_eq!(config.endpoint(), "http://localhost:9999/");
    }

    #[test]
    fn test_resolve_prefers_explicit_values() {
        let creds =
            Credentials::resolve(Some("explicit".into()), Some("pw".into())).unwrap();
        assert_eq!(creds.username, "explicit");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_resolve_missing_username_errors() {
        env::remove_var(USERNAME_VAR);
        let err = Credentials::resolve(None, Some("pw".into())).unwrap_err();
        assert!(err.to_string().contains(USERNAME_VAR));
    }

    #[test]
    fn test_display_hides_password() {
        assert_eq!(creds().to_string(), "user:***");
    }
}
