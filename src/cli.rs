// src/cli.rs
use crate::config::{CheckConfig, DEFAULT_HEALTHCHECK_PATH};
use crate::health::parse_headers_lenient;
use clap::Parser;

/// Get healthcheck for all units
#[derive(Parser, Debug)]
#[command(name = "unit-healthcheck", version)]
pub struct Args {
    /// App name
    #[arg(short = 'a', value_name = "app")]
    pub app: String,

    /// Healthcheck path
    #[arg(short = 'p', value_name = "path", default_value = DEFAULT_HEALTHCHECK_PATH)]
    pub path: String,

    /// Add headers to healthcheck call - "Header1:Value1, Header2:Value2"
    #[arg(short = 'H', value_name = "header")]
    pub headers: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn check_config(&self) -> CheckConfig {
        CheckConfig::new(
            self.path.clone(),
            parse_headers_lenient(self.headers.as_deref()),
        )
    }
}
