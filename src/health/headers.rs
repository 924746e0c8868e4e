// src/health/headers.rs
// Extra request headers given on the command line as "Key:Value, Key:Value".

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderParseError {
    #[error("expected Key:Value, got {0:?}")]
    Malformed(String),

    #[error("invalid header name {0:?}")]
    InvalidName(String),

    #[error("invalid value for header {0}")]
    InvalidValue(String),
}

/// Parse a comma-separated `Key:Value` list. A single bad item rejects the
/// whole string.
pub fn parse_headers(input: &str) -> Result<HeaderMap, HeaderParseError> {
    let mut headers = HeaderMap::new();

    for item in input.split(',') {
        let mut parts = item.split(':');
        let (name, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => (name.trim(), value.trim()),
            _ => return Err(HeaderParseError::Malformed(item.trim().to_string())),
        };

        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HeaderParseError::InvalidName(name.to_string()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| HeaderParseError::InvalidValue(name.to_string()))?;

        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Best-effort variant of [`parse_headers`]: malformed input is dropped with
/// a warning and no extra headers are sent.
pub fn parse_headers_lenient(input: Option<&str>) -> HeaderMap {
    let Some(input) = input else {
        return HeaderMap::new();
    };

    parse_headers(input).unwrap_or_else(|e| {
        warn!("Ignoring extra headers: {}", e);
        HeaderMap::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_header_list() {
        let headers = parse_headers("Host:myapp.example.com, X-Check: deep").unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers["host"], "myapp.example.com");
        assert_eq!(headers["x-check"], "deep");
    }

    #[test]
    fn test_single_header() {
        let headers = parse_headers("X-Token:abc").unwrap();
        assert_eq!(headers["x-token"], "abc");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let headers = parse_headers("X-A:1,X-A:2").unwrap();
        assert_eq!(headers.get_all("x-a").iter().count(), 1);
        assert_eq!(headers["x-a"], "2");
    }

    #[test]
    fn test_malformed_items_reject_everything() {
        assert_eq!(
            parse_headers("X-A:1, broken"),
            Err(HeaderParseError::Malformed("broken".to_string()))
        );
        // a colon inside the value is not supported
        assert_eq!(
            parse_headers("Host:example.com:8080"),
            Err(HeaderParseError::Malformed("Host:example.com:8080".to_string()))
        );
        assert!(matches!(parse_headers(""), Err(HeaderParseError::Malformed(_))));
        assert!(matches!(parse_headers("X-A:1,"), Err(HeaderParseError::Malformed(_))));
    }

    #[test]
    fn test_invalid_name_or_value() {
        assert_eq!(
            parse_headers("Bad Name:1"),
            Err(HeaderParseError::InvalidName("Bad Name".to_string()))
        );
        assert_eq!(
            parse_headers(":1"),
            Err(HeaderParseError::InvalidName(String::new()))
        );
        assert_eq!(
            parse_headers("X-A:line\nbreak"),
            Err(HeaderParseError::InvalidValue("X-A".to_string()))
        );
    }

    #[test]
    fn test_lenient_parsing() {
        assert!(parse_headers_lenient(None).is_empty());
        assert!(parse_headers_lenient(Some("garbage")).is_empty());
        assert_eq!(parse_headers_lenient(Some("X-A:1")).len(), 1);
    }
}
