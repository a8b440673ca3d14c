//! Top-level output contract.

use serde::Serialize;

use crate::dns_probe::DnsSignals;
use crate::domain_age::DomainAgeResult;
use crate::redirects::RedirectChain;
use crate::tls_probe::CertificateInfo;

/// The raw signal bundle for one analyzed URL.
///
/// Constructed fresh per request and never mutated afterwards; consumers
/// (the HTTP layer, or the LLM-enrichment collaborator) receive it together
/// with the [`crate::risk::RiskBundle`] derived from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Traced redirect chain from the seed URL.
    pub redirects: RedirectChain,
    /// DNS posture (addresses, geolocation, TXT, MX, wildcard flag).
    pub dns: DnsSignals,
    /// Registration age; `None` means age unknown.
    pub domain_age: Option<DomainAgeResult>,
    /// Certificate details; `None` means no TLS connection was possible.
    pub ssl: Option<CertificateInfo>,
}
