use super::ConfigError;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_HEALTHCHECK_PATH: &str = "/healthcheck";

/// Environment variables as seen through the `TSURU_` prefix.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawCredentials {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Control-plane access, read once at start-up.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub target: String,
    pub token: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.trim().is_empty() {
            return Err(ConfigError::Empty("TSURU_TARGET"));
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::Empty("TSURU_TOKEN"));
        }

        let url = Url::parse(&self.target).map_err(|e| ConfigError::InvalidTarget {
            target: self.target.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidTarget {
                target: self.target.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(())
    }

    /// URL of the unit listing for `app`.
    pub fn app_url(&self, app: &str) -> String {
        format!("{}/apps/{}", self.target.trim_end_matches('/'), app)
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("target", &self.target)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ListerConfig {
    pub timeout_secs: u64,
}

impl ListerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self { timeout_secs: 3 }
    }
}

/// How each unit is probed.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub path: String,
    pub headers: HeaderMap,
    pub timeout_secs: u64,
}

impl CheckConfig {
    pub fn new(path: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            path: path.into(),
            headers,
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_HEALTHCHECK_PATH.to_string(),
            headers: HeaderMap::new(),
            timeout_secs: 5,
        }
    }
}
