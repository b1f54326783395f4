//! Client configuration.
//!
//! Configuration priority: explicit builder calls > environment variables > defaults.

use crate::error::{LawbotError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_BASE_URL: &str = "LAWBOT_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "LAWBOT_TIMEOUT_SECS";

/// Settings shared by every request the client issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:5000`. Stored without a trailing slash.
    pub base_origin: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("lawbot-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given origin with default settings.
    pub fn new(base_origin: impl Into<String>) -> Result<Self> {
        Self::default().with_base_origin(base_origin)
    }

    /// Loads configuration from environment variables over the defaults.
    ///
    /// - `LAWBOT_BASE_URL`: backend origin
    /// - `LAWBOT_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(origin) = env::var(ENV_BASE_URL) {
            config = config.with_base_origin(origin)?;
        }

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                LawbotError::config(format!("{} must be a whole number, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            config = config.with_timeout_secs(secs)?;
        }

        tracing::debug!("[ClientConfig] Using backend origin {}", config.base_origin);
        Ok(config)
    }

    /// Sets and validates the backend origin.
    pub fn with_base_origin(mut self, base_origin: impl Into<String>) -> Result<Self> {
        self.base_origin = normalize_origin(&base_origin.into())?;
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(LawbotError::config("request timeout must be greater than zero"));
        }
        self.request_timeout_secs = secs;
        Ok(self)
    }

    /// Re-validates a configuration that was deserialized or edited in place.
    pub fn validated(self) -> Result<Self> {
        let timeout = self.request_timeout_secs;
        let origin = self.base_origin.clone();
        self.with_base_origin(origin)?.with_timeout_secs(timeout)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Joins an absolute path (`/auth/me`) onto the base origin.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_origin, path)
        } else {
            format!("{}/{}", self.base_origin, path)
        }
    }
}

/// Validates an origin string and strips trailing slashes.
fn normalize_origin(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| LawbotError::config(format!("invalid base origin '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(LawbotError::config(format!(
            "base origin must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(LawbotError::config(format!("base origin '{}' has no host", raw)));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.base_origin, "http://localhost:5000");
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert!(config.user_agent.starts_with("lawbot-client/"));
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://172.20.10.2:5000/").unwrap();
        assert_eq!(config.base_origin, "http://172.20.10.2:5000");
        assert_eq!(
            config.endpoint("/auth/me"),
            "http://172.20.10.2:5000/auth/me"
        );
        assert_eq!(
            config.endpoint("api/query"),
            "http://172.20.10.2:5000/api/query"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, LawbotError::Config(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(ClientConfig::new("not a url").is_err());
        assert!(ClientConfig::new("").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(ClientConfig::default().with_timeout_secs(0).is_err());
        let config = ClientConfig::default().with_timeout_secs(5).unwrap();
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_origin":"https://lawbot.example"}"#).unwrap();
        assert_eq!(config.base_origin, "https://lawbot.example");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config: ClientConfig =
            serde_json::from_str(r#"{"base_origin":"https://lawbot.example/"}"#).unwrap();
        assert_eq!(config.validated().unwrap().base_origin, "https://lawbot.example");
    }
}
