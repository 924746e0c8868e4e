// src/health/outcome.rs

use reqwest::StatusCode;

/// What happened when a unit was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The unit answered with a 2xx status.
    Success { status: StatusCode, body: Option<String> },
    /// No response: connection refused, timeout, no address...
    TransportError(String),
    /// The unit answered outside 2xx once redirects were followed.
    HttpError { status: StatusCode, body: Option<String> },
}

impl CheckOutcome {
    pub fn classify(status: StatusCode, body: Option<String>) -> Self {
        if status.is_success() {
            CheckOutcome::Success { status, body }
        } else {
            CheckOutcome::HttpError { status, body }
        }
    }

    /// Only a plain 200 counts as healthy.
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Success { status, .. } if *status == StatusCode::OK)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCheck {
    pub url: String,
    pub outcome: CheckOutcome,
    pub response_time_ms: u64,
}

impl UnitCheck {
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitVerdict {
    Skipped,
    Checked(UnitCheck),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthReport {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl HealthReport {
    pub fn tally<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a UnitVerdict>,
    {
        verdicts
            .into_iter()
            .fold(Self::default(), |report, verdict| report.record(verdict))
    }

    fn record(mut self, verdict: &UnitVerdict) -> Self {
        match verdict {
            UnitVerdict::Skipped => self.skipped += 1,
            UnitVerdict::Checked(check) if check.passed() => self.passed += 1,
            UnitVerdict::Checked(_) => self.failed += 1,
        }
        self
    }

    /// Healthy unless a checked unit failed; nothing checked is healthy.
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn checked(&self) -> usize {
        self.passed + self.failed
    }
}
