//! DNS posture probing.
//!
//! For a resolved hostname this module gathers: address records, per-address
//! geolocation, TXT record groups, MX records, and a wildcard/catch-all
//! probe. Every sub-fetch is allowed to come back empty; resolution failures
//! are classified (NXDOMAIN, SERVFAIL, TIMEOUT, UNKNOWN) and surfaced next
//! to the empty address list rather than thrown.

mod geo;
mod records;
mod types;
mod wildcard;

pub use geo::GeoClient;
pub use types::{
    DnsResolutionError, DnsSignals, GeoEntry, MxRecord, ResolutionOutcome, ResolutionStatus,
};

use hickory_resolver::TokioAsyncResolver;

use crate::hostname::Hostname;

/// Probes the full DNS posture of a hostname.
///
/// Address resolution runs first (geolocation needs its output); the
/// geolocation fan-out, TXT, MX, and wildcard probes then run concurrently.
/// Geolocation is skipped entirely when no client is configured.
pub async fn probe_dns(
    hostname: &Hostname,
    resolver: &TokioAsyncResolver,
    geo: Option<&GeoClient>,
) -> DnsSignals {
    let domain = &hostname.registrable;

    let (addresses, resolution_result) = records::lookup_addresses(domain, resolver).await;

    let geolocation_fut = async {
        match geo {
            Some(client) if !addresses.is_empty() => client.lookup_all(&addresses).await,
            _ => Vec::new(),
        }
    };

    let (geolocation, txt_records, mx_records, is_wildcard_domain) = tokio::join!(
        geolocation_fut,
        records::lookup_txt_groups(domain, resolver),
        records::lookup_mx_records(domain, resolver),
        wildcard::probe_wildcard(domain, resolver),
    );

    DnsSignals {
        addresses,
        resolution_result,
        geolocation,
        txt_records,
        mx_records,
        is_wildcard_domain,
    }
}
