//! HTTP redirect chain tracing.
//!
//! Follows redirects manually (client redirect policy must be `none`) so the
//! full path from seed URL to final destination is captured. The walk is an
//! explicit bounded loop rather than recursion, carrying a `visited` set so
//! ping-pong redirects are at least observable in the logs; exceeding the
//! hop bound is a soft stop that treats the last-visited URL as final, not
//! an error.

mod types;

pub use types::{HopType, RedirectChain, RedirectHop};

use std::collections::{BTreeMap, HashSet};

use reqwest::header::LOCATION;
use reqwest::Url;

use crate::config::MAX_REDIRECT_HOPS;

/// Traces the redirect chain starting from a seed URL.
///
/// # Arguments
///
/// * `seed_url` - The URL to start from (scheme required)
/// * `client` - HTTP client with automatic redirects disabled
///
/// # Returns
///
/// The assembled chain. Request failures terminate the trace at the current
/// URL; they never surface as errors because a dead hop is itself a finding.
pub async fn trace_redirects(seed_url: &str, client: &reqwest::Client) -> RedirectChain {
    let mut hops: Vec<RedirectHop> = Vec::new();
    let mut current = seed_url.to_string();
    let mut visited: HashSet<String> = HashSet::new();

    for _ in 0..MAX_REDIRECT_HOPS {
        visited.insert(current.clone());

        let response = match client.get(&current).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Request failed at {current}: {e}");
                break;
            }
        };

        let status = response.status();
        if !status.is_redirection() {
            break;
        }

        let location = match response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
        {
            Some(location) => location.to_string(),
            None => {
                log::warn!("Redirect status {status} at {current} without a Location header");
                break;
            }
        };

        let next = match resolve_location(&current, &location) {
            Some(next) => next,
            None => {
                log::warn!("Unresolvable Location {location:?} at {current}");
                break;
            }
        };

        hops.push(RedirectHop {
            url: current.clone(),
            status_code: status.as_u16(),
            headers: header_map(&response),
            hop_type: HopType::Http,
        });

        if visited.contains(&next) {
            // Bounded by hop count only; revisits within the bound are
            // followed but logged so short loops stand out.
            log::debug!("Redirect revisits {next} (loop within hop budget)");
        }
        current = next;
    }

    build_chain(seed_url, &current, hops)
}

/// Resolves a `Location` header value against the current URL, handling both
/// absolute and relative forms.
fn resolve_location(current: &str, location: &str) -> Option<String> {
    match Url::parse(location) {
        Ok(url) => Some(url.to_string()),
        Err(_) => Url::parse(current)
            .and_then(|base| base.join(location))
            .map(|url| url.to_string())
            .ok(),
    }
}

fn header_map(response: &reqwest::Response) -> BTreeMap<String, String> {
    response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            )
        })
        .collect()
}

/// Assembles the final chain from the raw redirect hops.
///
/// When any real redirect occurred the seed is prepended as a synthetic 200
/// hop and the final URL appended as one (unless identical to the seed);
/// consecutive duplicate URLs are then collapsed. A trace with no redirects
/// yields a single-hop chain for the seed itself.
pub(crate) fn build_chain(
    seed_url: &str,
    final_url: &str,
    raw_hops: Vec<RedirectHop>,
) -> RedirectChain {
    let mut hops = raw_hops;
    if hops.is_empty() {
        hops.push(RedirectHop::synthetic(final_url));
    } else {
        hops.insert(0, RedirectHop::synthetic(seed_url));
        if final_url != seed_url {
            hops.push(RedirectHop::synthetic(final_url));
        }
    }

    let mut chain: Vec<RedirectHop> = Vec::with_capacity(hops.len());
    for hop in hops {
        if chain.last().map(|last| last.url == hop.url).unwrap_or(false) {
            continue;
        }
        chain.push(hop);
    }

    let total_redirects = chain.len().saturating_sub(1);
    RedirectChain {
        chain,
        final_url: final_url.to_string(),
        total_redirects,
    }
}
