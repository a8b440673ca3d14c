//! Domain age resolution.
//!
//! Races two strategies for dating a registration:
//!
//! 1. WHOIS: query the registry and extract a creation date from the
//!    free-text response using an ordered pattern table.
//! 2. DNS fallback: decode the zone's SOA serial as an approximate
//!    `YYYYMMDD` creation date.
//!
//! WHOIS runs under a bounded max-wait; when it produces nothing in time the
//! SOA fallback is attempted synchronously. Dropping the timed-out WHOIS
//! future closes its socket, so the race loser cannot leak a connection.
//! When neither strategy yields a date the result is `None` ("age unknown"),
//! which the risk layer reports as INCONCLUSIVE.

mod parse;
mod soa;

pub(crate) use parse::extract_creation_date;

use chrono::{DateTime, Utc};
use hickory_resolver::TokioAsyncResolver;
use serde::Serialize;

use crate::config::WHOIS_MAX_WAIT;
use crate::hostname::Hostname;
use crate::whois::WhoisClient;

/// Which strategy produced the creation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeMethod {
    /// Registry WHOIS free-text response.
    #[serde(rename = "WHOIS")]
    Whois,
    /// SOA-serial heuristic; approximate, not authoritative.
    #[serde(rename = "DNS Fallback")]
    DnsFallback,
}

/// A resolved domain age.
///
/// `age_years` may be zero or negative for very new or misdated
/// registrations; that is still a valid result and a strong risk signal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAgeResult {
    /// Strategy that produced the date.
    pub method: AgeMethod,
    /// Registration creation date.
    pub creation_date: DateTime<Utc>,
    /// Whole years elapsed since creation.
    pub age_years: i64,
}

/// Computes whole years between a creation date and `now`, using the mean
/// Gregorian year of 365.25 days and flooring.
pub(crate) fn age_in_years(creation: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed_days = (now - creation).num_seconds() as f64 / 86_400.0;
    (elapsed_days / 365.25).floor() as i64
}

/// Resolves the age of a domain registration.
///
/// # Arguments
///
/// * `hostname` - The normalized registrable hostname
/// * `whois` - WHOIS client
/// * `resolver` - DNS resolver for the SOA fallback
///
/// # Returns
///
/// The creation date and age from whichever strategy produced one, or `None`
/// when the age could not be determined. Never errors: WHOIS unavailability
/// and DNS failures are soft by design.
pub async fn resolve_domain_age(
    hostname: &Hostname,
    whois: &WhoisClient,
    resolver: &TokioAsyncResolver,
) -> Option<DomainAgeResult> {
    let whois_attempt = async {
        match whois.lookup(&hostname.registrable, &hostname.tld).await {
            Ok(text) => extract_creation_date(&text),
            Err(e) => {
                log::warn!("WHOIS lookup failed for {}: {e}", hostname.registrable);
                None
            }
        }
    };

    match tokio::time::timeout(WHOIS_MAX_WAIT, whois_attempt).await {
        Ok(Some(creation_date)) => {
            return Some(build_result(AgeMethod::Whois, creation_date));
        }
        Ok(None) => {
            log::debug!(
                "WHOIS produced no creation date for {}, trying SOA fallback",
                hostname.registrable
            );
        }
        Err(_) => {
            // The timed-out future is dropped here, which closes its socket.
            log::warn!(
                "WHOIS exceeded {WHOIS_MAX_WAIT:?} for {}, trying SOA fallback",
                hostname.registrable
            );
        }
    }

    let hint = soa::soa_creation_hint(&hostname.registrable, resolver).await?;
    let creation_date = hint.and_hms_opt(0, 0, 0)?.and_utc();
    Some(build_result(AgeMethod::DnsFallback, creation_date))
}

fn build_result(method: AgeMethod, creation_date: DateTime<Utc>) -> DomainAgeResult {
    DomainAgeResult {
        method,
        creation_date,
        age_years: age_in_years(creation_date, Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
