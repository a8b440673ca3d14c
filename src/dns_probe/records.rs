//! DNS record queries (A/AAAA, TXT, MX).

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::classify_resolve_error;

use super::types::{MxRecord, ResolutionOutcome};

/// Resolves the address records for a hostname.
///
/// # Returns
///
/// The resolved addresses plus a classified outcome. Failures yield an empty
/// address list with the error kind annotated rather than an `Err`.
pub(crate) async fn lookup_addresses(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> (Vec<String>, ResolutionOutcome) {
    match resolver.lookup_ip(domain).await {
        Ok(lookup) => {
            let addresses: Vec<String> = lookup.iter().map(|ip| ip.to_string()).collect();
            (addresses, ResolutionOutcome::success())
        }
        Err(e) => {
            let kind = classify_resolve_error(&e);
            log::warn!("Address resolution failed for {domain} ({kind:?}): {e}");
            (Vec::new(), ResolutionOutcome::error(kind, e.to_string()))
        }
    }
}

/// Queries TXT records for a domain, preserving the record grouping: each
/// record's character strings become one inner vector.
///
/// Returns an empty list when the query fails or no records exist.
pub(crate) async fn lookup_txt_groups(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Vec<Vec<String>> {
    match resolver.lookup(domain, RecordType::TXT).await {
        Ok(lookup) => lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::TXT(txt) = rdata {
                    Some(
                        txt.iter()
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                            .collect::<Vec<String>>(),
                    )
                } else {
                    None
                }
            })
            .collect(),
        Err(e) => {
            log::debug!("TXT lookup for {domain} returned nothing: {e}");
            Vec::new()
        }
    }
}

/// Queries MX records for a domain, sorted by priority (lower first).
///
/// Returns an empty list when the query fails or no mail servers exist.
pub(crate) async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Vec<MxRecord> {
    match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => {
            let mut records: Vec<MxRecord> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::MX(mx) = rdata {
                        Some(MxRecord {
                            exchange: mx.exchange().to_utf8(),
                            priority: mx.preference(),
                        })
                    } else {
                        None
                    }
                })
                .collect();
            records.sort_by_key(|record| record.priority);
            records
        }
        Err(e) => {
            log::debug!("MX lookup for {domain} returned nothing: {e}");
            Vec::new()
        }
    }
}
