//! DNS signal data structures.

use serde::Serialize;

use crate::error_handling::DnsErrorKind;

/// Outcome of the address resolution step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionOutcome {
    /// `success` or `error`.
    pub status: ResolutionStatus,
    /// Present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DnsResolutionError>,
}

impl ResolutionOutcome {
    pub(crate) fn success() -> Self {
        ResolutionOutcome {
            status: ResolutionStatus::Success,
            error: None,
        }
    }

    pub(crate) fn error(kind: DnsErrorKind, message: String) -> Self {
        ResolutionOutcome {
            status: ResolutionStatus::Error,
            error: Some(DnsResolutionError { kind, message }),
        }
    }
}

/// Resolution status discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStatus {
    Success,
    Error,
}

/// A classified DNS resolution failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsResolutionError {
    /// NXDOMAIN, SERVFAIL, TIMEOUT, or UNKNOWN.
    pub kind: DnsErrorKind,
    /// Human-readable resolver message.
    pub message: String,
}

/// Geolocation data for one resolved address.
///
/// Individual fields may be absent when the geolocation service omits them;
/// an address with no entry at all simply failed its lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoEntry {
    /// The address this entry describes.
    pub ip: String,
    /// Country name as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISP / hosting organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
}

/// A mail exchanger record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MxRecord {
    /// Exchange hostname.
    pub exchange: String,
    /// Preference value; lower is higher priority.
    pub priority: u16,
}

/// The full DNS posture bundle for a hostname.
///
/// Any sub-fetch may be empty; absence is not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsSignals {
    /// Resolved addresses (A/AAAA), as strings.
    pub addresses: Vec<String>,
    /// Classified outcome of the address resolution.
    pub resolution_result: ResolutionOutcome,
    /// Geolocation entries; partial relative to `addresses`.
    pub geolocation: Vec<GeoEntry>,
    /// TXT record groups, one inner list per record.
    pub txt_records: Vec<Vec<String>>,
    /// MX records sorted by priority.
    pub mx_records: Vec<MxRecord>,
    /// True when a guaranteed-nonexistent subdomain still resolved.
    pub is_wildcard_domain: bool,
}
