// src/health/checker.rs
use super::outcome::{CheckOutcome, HealthReport, UnitCheck, UnitVerdict};
use crate::config::CheckConfig;
use crate::units::{SkipReason, Unit};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Probes the web units of an application, one after the other.
pub struct UnitHealthChecker {
    config: CheckConfig,
    client: Client,
}

impl UnitHealthChecker {
    pub fn new(config: CheckConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { config, client })
    }

    /// Check every qualifying unit in order and fold the results.
    pub async fn check_units(&self, units: &[Unit]) -> HealthReport {
        let mut verdicts = Vec::with_capacity(units.len());
        for unit in units {
            verdicts.push(self.check_unit(unit).await);
        }

        let report = HealthReport::tally(&verdicts);
        info!(
            "Health check complete: {} passed, {} failed, {} skipped",
            report.passed, report.failed, report.skipped
        );
        report
    }

    pub async fn check_unit(&self, unit: &Unit) -> UnitVerdict {
        match unit.skip_reason() {
            Some(SkipReason::Process(process)) => {
                warn!("[{}] skip task: {}", unit.label(), process);
                return UnitVerdict::Skipped;
            }
            Some(SkipReason::Status(status)) => {
                warn!("[{}] skip status: {}", unit.label(), status);
                return UnitVerdict::Skipped;
            }
            None => {}
        }

        let Some(url) = unit.healthcheck_url(&self.config.path) else {
            let outcome = CheckOutcome::TransportError("unit has no address".to_string());
            report_outcome(unit.label(), &outcome);
            return UnitVerdict::Checked(UnitCheck {
                url: unit.label().to_string(),
                outcome,
                response_time_ms: 0,
            });
        };

        let start = Instant::now();
        let outcome = self.probe(&url).await;
        let response_time_ms = start.elapsed().as_millis() as u64;

        debug!("[{}] answered in {} ms", url, response_time_ms);
        report_outcome(&url, &outcome);

        UnitVerdict::Checked(UnitCheck {
            url,
            outcome,
            response_time_ms,
        })
    }

    async fn probe(&self, url: &str) -> CheckOutcome {
        debug!("GET {}", url);

        // The client timeout bounds the whole exchange, body included.
        let result = self
            .client
            .get(url)
            .headers(self.config.headers.clone())
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return CheckOutcome::TransportError("Request timeout".to_string())
            }
            Err(e) => return CheckOutcome::TransportError(e.to_string()),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("[{}] Failed to read response body: {}", url, e);
                None
            }
        };

        CheckOutcome::classify(status, body)
    }
}

fn report_outcome(url: &str, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Success { .. } if outcome.passed() => {
            info!("[{}] Healthcheck OK", url);
        }
        CheckOutcome::Success { status, body } => {
            error!(
                "[{}] Failed to healthcheck unit, status code: {}, body: {}",
                url,
                status.as_u16(),
                body.as_deref().unwrap_or_default()
            );
        }
        CheckOutcome::HttpError { status, body } => {
            error!("[{}] Failed to healthcheck unit: HTTP Error {}", url, status);
            if let Some(body) = body {
                error!("{}", body);
            }
        }
        CheckOutcome::TransportError(cause) => {
            error!("[{}] Failed to healthcheck unit: {}", url, cause);
        }
    }
}
