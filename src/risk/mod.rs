//! Deterministic risk classification.
//!
//! A pure mapping from the raw signal bundles to per-category risk levels.
//! No I/O happens here; all reference data comes in through
//! [`ReferenceTables`]. Combination across sub-signals is always
//! most-severe-wins, which keeps every category monotone: replacing any
//! sub-signal with a more severe one can never lower the aggregate.

mod tables;

pub use tables::ReferenceTables;

use serde::Serialize;

use crate::dns_probe::{DnsSignals, GeoEntry, MxRecord};
use crate::domain_age::DomainAgeResult;
use crate::models::AnalysisReport;
use crate::tls_probe::CertificateInfo;

/// Ordinal risk level. The derived order (`LOW < MEDIUM < HIGH`) is load-
/// bearing: aggregation takes the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Domain-age risk, which alone may be INCONCLUSIVE (no creation date could
/// be determined from either WHOIS or the SOA heuristic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeRisk {
    Low,
    Medium,
    High,
    Inconclusive,
}

impl From<RiskLevel> for AgeRisk {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => AgeRisk::Low,
            RiskLevel::Medium => AgeRisk::Medium,
            RiskLevel::High => AgeRisk::High,
        }
    }
}

/// Per-category risk verdicts for one analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBundle {
    pub ip_geolocation_risk: RiskLevel,
    pub txt_records_risk: RiskLevel,
    pub mx_records_risk: RiskLevel,
    pub wildcard_risk: RiskLevel,
    pub domain_age_risk: AgeRisk,
    pub ssl_risk: RiskLevel,
}

/// Classifies a full analysis report into per-category risk levels.
pub fn assess_risk(report: &AnalysisReport, tables: &ReferenceTables) -> RiskBundle {
    RiskBundle {
        ip_geolocation_risk: aggregate_geolocation_risk(&report.dns.geolocation, tables),
        txt_records_risk: evaluate_txt_risk(&report.dns.txt_records),
        mx_records_risk: evaluate_mx_risk(&report.dns.mx_records, tables),
        wildcard_risk: evaluate_wildcard_risk(report.dns.is_wildcard_domain),
        domain_age_risk: evaluate_domain_age_risk(report.domain_age.as_ref()),
        ssl_risk: evaluate_ssl_risk(report.ssl.as_ref(), tables),
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Classifies one address's geolocation entry: country against the risk
/// lists, ISP against the trust lists (unmatched ISP defaults to MEDIUM),
/// combined most-severe-wins.
pub fn evaluate_geolocation_risk(entry: &GeoEntry, tables: &ReferenceTables) -> RiskLevel {
    let geo_risk = match &entry.country {
        Some(country) if tables.high_risk_countries.iter().any(|c| c == country) => {
            RiskLevel::High
        }
        Some(country) if tables.medium_risk_countries.iter().any(|c| c == country) => {
            RiskLevel::Medium
        }
        _ => RiskLevel::Low,
    };

    let isp_risk = match &entry.isp {
        Some(isp) if tables.untrusted_isps.iter().any(|u| contains_ci(isp, u)) => RiskLevel::High,
        Some(isp) if tables.trusted_isps.iter().any(|t| contains_ci(isp, t)) => RiskLevel::Low,
        // Unknown or absent ISP: neither exonerating nor damning.
        _ => RiskLevel::Medium,
    };

    geo_risk.max(isp_risk)
}

/// Combines per-address geolocation risk across all resolved addresses.
/// No entries at all is LOW: absence of geolocation data is not a signal.
pub fn aggregate_geolocation_risk(entries: &[GeoEntry], tables: &ReferenceTables) -> RiskLevel {
    entries
        .iter()
        .map(|entry| evaluate_geolocation_risk(entry, tables))
        .max()
        .unwrap_or(RiskLevel::Low)
}

/// Classifies TXT record posture.
///
/// HIGH on suspicious markers (`redirect=`, `include=`, or any string over
/// 255 characters) or when the domain has no TXT records at all; LOW when a
/// valid SPF/DKIM/DMARC marker is present; otherwise MEDIUM (no mail
/// authentication configured, which is sloppy but not necessarily
/// malicious).
pub fn evaluate_txt_risk(txt_groups: &[Vec<String>]) -> RiskLevel {
    if txt_groups.is_empty() || txt_groups.iter().any(|group| group.is_empty()) {
        return RiskLevel::High;
    }

    let mut has_valid_configuration = false;
    let mut suspicious = false;

    for group in txt_groups {
        for value in group {
            let lower = value.to_lowercase();
            if lower.contains("v=spf1") || lower.contains("dkim") || lower.contains("dmarc") {
                has_valid_configuration = true;
            }
            if lower.contains("redirect=") || lower.contains("include=") || lower.len() > 255 {
                suspicious = true;
            }
        }
    }

    if suspicious {
        RiskLevel::High
    } else if has_valid_configuration {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}

/// Classifies MX record posture.
///
/// HIGH when any exchange lives under a known-abused TLD; LOW when every
/// exchange matches a trusted provider (or there is no mail setup at all);
/// MEDIUM for unrecognized providers.
pub fn evaluate_mx_risk(mx_records: &[MxRecord], tables: &ReferenceTables) -> RiskLevel {
    let mut risk = RiskLevel::Low;

    for record in mx_records {
        let exchange = record.exchange.to_lowercase();
        let exchange = exchange.trim_end_matches('.');

        if tables
            .risky_tlds
            .iter()
            .any(|tld| exchange.ends_with(tld.as_str()))
        {
            risk = risk.max(RiskLevel::High);
        } else if tables
            .trusted_email_providers
            .iter()
            .any(|provider| exchange.contains(provider.as_str()))
        {
            // Trusted provider, contributes LOW.
        } else {
            risk = risk.max(RiskLevel::Medium);
        }
    }

    risk
}

/// Wildcard DNS is binary: detected means the zone can mint arbitrary
/// subdomains, HIGH; otherwise LOW.
pub fn evaluate_wildcard_risk(is_wildcard: bool) -> RiskLevel {
    if is_wildcard {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// Classifies domain age: unknown is INCONCLUSIVE (out-of-band, never a
/// numeric-derived level); under a year (including zero and negative ages)
/// HIGH; one to five years MEDIUM; older LOW.
pub fn evaluate_domain_age_risk(age: Option<&DomainAgeResult>) -> AgeRisk {
    let Some(age) = age else {
        return AgeRisk::Inconclusive;
    };

    if age.age_years <= 0 {
        AgeRisk::High
    } else if age.age_years <= 5 {
        AgeRisk::Medium
    } else {
        AgeRisk::Low
    }
}

/// Classifies TLS certificate posture.
///
/// HIGH when no certificate could be obtained, the chain did not verify, or
/// the certificate is expired (`days_remaining <= 0`, checked before issuer
/// reputation so expiry always dominates); then LOW/HIGH by issuer trust
/// lists; MEDIUM for an unrecognized but otherwise valid issuer.
pub fn evaluate_ssl_risk(cert: Option<&CertificateInfo>, tables: &ReferenceTables) -> RiskLevel {
    let Some(cert) = cert else {
        return RiskLevel::High;
    };

    if !cert.chain_valid {
        return RiskLevel::High;
    }

    if cert.days_remaining <= 0 {
        return RiskLevel::High;
    }

    if let Some(issuer) = &cert.issuer {
        if tables
            .untrusted_issuers
            .iter()
            .any(|u| issuer.contains(u.as_str()))
        {
            return RiskLevel::High;
        }
        if tables
            .trusted_issuers
            .iter()
            .any(|t| issuer.contains(t.as_str()))
        {
            return RiskLevel::Low;
        }
    }

    RiskLevel::Medium
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
