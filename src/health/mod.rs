// src/health/mod.rs
mod checker;
mod headers;
mod outcome;

pub use checker::UnitHealthChecker;
pub use headers::{parse_headers, parse_headers_lenient, HeaderParseError};
pub use outcome::{CheckOutcome, HealthReport, UnitCheck, UnitVerdict};
