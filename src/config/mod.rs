// src/config/mod.rs
mod models;

pub use models::*;

use ::config::{Config as Settings, Environment, Map};

/// Prefix shared by the control-plane environment variables.
pub const ENV_PREFIX: &str = "TSURU";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Environment variable {0} is empty")]
    Empty(&'static str),

    #[error("Invalid control-plane target {target:?}: {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("Failed to read environment: {0}")]
    Source(#[from] ::config::ConfigError),
}

/// Load control-plane credentials from the process environment
/// (`TSURU_TARGET`, `TSURU_TOKEN`).
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    build_credentials(Environment::with_prefix(ENV_PREFIX))
}

/// Same as [`load_credentials`], but reads variables from `vars` instead of
/// the process environment.
pub fn load_credentials_from<I, K, V>(vars: I) -> Result<Credentials, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut source = Map::new();
    for (key, value) in vars {
        source.insert(key.into(), value.into());
    }

    build_credentials(Environment::with_prefix(ENV_PREFIX).source(Some(source)))
}

fn build_credentials(env: Environment) -> Result<Credentials, ConfigError> {
    let settings = Settings::builder().add_source(env).build()?;
    let raw: RawCredentials = settings.try_deserialize()?;

    let credentials = Credentials {
        target: raw.target.ok_or(ConfigError::Missing("TSURU_TARGET"))?,
        token: raw.token.ok_or(ConfigError::Missing("TSURU_TOKEN"))?,
    };

    credentials.validate()?;
    Ok(credentials)
}
