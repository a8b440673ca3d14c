//! Error type definitions.
//!
//! This module defines the error taxonomy for the pipeline. The policy is
//! strict: only structurally invalid input is a hard failure surfaced to the
//! caller. Every signal-source failure (DNS, WHOIS, TLS, geolocation) is
//! recovered locally to a documented empty/null value so that one failing
//! branch can never abort its siblings.

use std::time::Duration;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use serde::Serialize;
use thiserror::Error;

/// Hard failures for a single analysis request.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input could not be normalized into a registrable hostname.
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),
}

/// Error types for WHOIS lookups.
///
/// Both variants are soft: the domain-age resolver treats them as "no data"
/// and falls through to the DNS SOA-serial heuristic.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// Connection refused, reset, or otherwise failed.
    #[error("WHOIS server unavailable: {0}")]
    Unavailable(String),

    /// Connect or read deadline exceeded.
    #[error("WHOIS query timed out after {0:?}")]
    Timeout(Duration),
}

/// Classified DNS resolution failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DnsErrorKind {
    /// The domain does not exist.
    Nxdomain,
    /// The authoritative server failed to answer.
    Servfail,
    /// The query timed out.
    Timeout,
    /// Anything else (I/O errors, protocol errors, ...).
    Unknown,
}

/// Classifies a resolver error into a [`DnsErrorKind`].
pub fn classify_resolve_error(error: &ResolveError) -> DnsErrorKind {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            classify_response_code(*response_code)
        }
        ResolveErrorKind::Timeout => DnsErrorKind::Timeout,
        _ => DnsErrorKind::Unknown,
    }
}

/// Maps a DNS response code from a negative answer to a [`DnsErrorKind`].
pub(crate) fn classify_response_code(code: ResponseCode) -> DnsErrorKind {
    match code {
        ResponseCode::NXDomain => DnsErrorKind::Nxdomain,
        ResponseCode::ServFail => DnsErrorKind::Servfail,
        _ => DnsErrorKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_error_kind_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&DnsErrorKind::Nxdomain).unwrap(),
            "\"NXDOMAIN\""
        );
        assert_eq!(
            serde_json::to_string(&DnsErrorKind::Servfail).unwrap(),
            "\"SERVFAIL\""
        );
    }

    #[test]
    fn whois_error_messages() {
        let err = WhoisError::Unavailable("connect refused".into());
        assert!(err.to_string().contains("unavailable"));
        let err = WhoisError::Timeout(Duration::from_secs(10));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn response_codes_classify_by_severity() {
        assert_eq!(
            classify_response_code(ResponseCode::NXDomain),
            DnsErrorKind::Nxdomain
        );
        assert_eq!(
            classify_response_code(ResponseCode::ServFail),
            DnsErrorKind::Servfail
        );
        // Anything outside the two named codes is deliberately unclassified.
        assert_eq!(
            classify_response_code(ResponseCode::Refused),
            DnsErrorKind::Unknown
        );
        assert_eq!(
            classify_response_code(ResponseCode::NoError),
            DnsErrorKind::Unknown
        );
    }

    #[test]
    fn resolver_timeout_classifies_as_timeout() {
        let err = ResolveError::from(ResolveErrorKind::Timeout);
        assert_eq!(classify_resolve_error(&err), DnsErrorKind::Timeout);
    }

    #[test]
    fn opaque_resolver_errors_classify_as_unknown() {
        let err = ResolveError::from(ResolveErrorKind::Message("resolver exploded"));
        assert_eq!(classify_resolve_error(&err), DnsErrorKind::Unknown);
    }
}
