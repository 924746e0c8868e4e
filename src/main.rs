// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use unit_healthcheck::{
    cli::Args,
    config::{self, ListerConfig},
    health::UnitHealthChecker,
    units::UnitLister,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize tracing
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("unit_healthcheck={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let credentials =
        config::load_credentials().context("Failed to load control-plane credentials")?;
    debug!("Using control plane at {}", credentials.target);

    let lister = UnitLister::new(credentials, ListerConfig::default())
        .context("Failed to create control-plane client")?;
    let checker = UnitHealthChecker::new(args.check_config())
        .context("Failed to create healthcheck client")?;

    let units = lister.list_units(&args.app).await;
    let report = checker.check_units(&units).await;

    Ok(if report.is_healthy() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
