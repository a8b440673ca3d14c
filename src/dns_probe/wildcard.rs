//! Wildcard / catch-all DNS detection.
//!
//! A zone that answers for arbitrary nonexistent subdomains can be used to
//! mint unlimited phishing hostnames under one registration, so a positive
//! probe is a risk signal in its own right.

use chrono::Utc;
use hickory_resolver::TokioAsyncResolver;
use tokio::time::timeout;

use crate::config::WILDCARD_PROBE_TIMEOUT;

/// Builds a subdomain label that cannot plausibly exist: timestamp plus a
/// random component under the target domain.
fn probe_label(domain: &str) -> String {
    format!(
        "nonexistent-{}-{:08x}.{domain}",
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}

/// Probes whether the domain serves wildcard DNS responses.
///
/// Resolves a guaranteed-nonexistent subdomain; any address in the answer
/// means the zone is a catch-all. NXDOMAIN, timeouts, and other failures all
/// mean "no wildcard detected".
pub(crate) async fn probe_wildcard(domain: &str, resolver: &TokioAsyncResolver) -> bool {
    let probe = probe_label(domain);
    match timeout(WILDCARD_PROBE_TIMEOUT, resolver.lookup_ip(probe.clone())).await {
        Ok(Ok(lookup)) => {
            let detected = lookup.iter().next().is_some();
            if detected {
                log::info!("Wildcard DNS detected for {domain} (probe {probe} resolved)");
            }
            detected
        }
        Ok(Err(e)) => {
            log::debug!("Wildcard probe {probe} did not resolve: {e}");
            false
        }
        Err(_) => {
            log::debug!("Wildcard probe {probe} timed out");
            false
        }
    }
}
