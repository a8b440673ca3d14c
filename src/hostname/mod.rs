//! Hostname extraction and normalization.
//!
//! This module turns an arbitrary URL or bare hostname into a registrable
//! domain plus its public suffix, using `tldextract` (Public Suffix List)
//! rather than a naive last-two-labels split, so multi-part suffixes such as
//! `co.uk` are handled correctly.

use std::net::{Ipv4Addr, Ipv6Addr};

use tldextract::TldExtractor;
use url::Url;

use crate::error_handling::AnalysisError;

/// A normalized, registrable hostname.
///
/// Invariant: both fields are lowercase; `registrable` carries no scheme,
/// path, or `www.` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname {
    /// The registrable domain, e.g. `example.co.uk`.
    pub registrable: String,
    /// The public suffix, e.g. `co.uk`.
    pub tld: String,
}

/// Ensures an input string is a fetchable URL by assuming `http://` when no
/// scheme is present. Scheme matching is case-insensitive (RFC 3986).
pub fn normalize_seed_url(input: &str) -> String {
    let trimmed = input.trim();
    let prefix = trimmed.get(..8).unwrap_or(trimmed).to_ascii_lowercase();
    if prefix.starts_with("http://") || prefix.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Extracts the registrable hostname and public suffix from a URL or bare
/// hostname.
///
/// # Arguments
///
/// * `extractor` - The TldExtractor instance
/// * `input` - URL or hostname, with or without scheme
///
/// # Returns
///
/// The normalized [`Hostname`], or [`AnalysisError::InvalidHostname`] when no
/// ICANN-registered domain can be derived (IP literals, malformed input,
/// unknown suffixes).
///
/// This function is idempotent: feeding the returned `registrable` value back
/// in yields the same result.
pub fn extract_hostname(extractor: &TldExtractor, input: &str) -> Result<Hostname, AnalysisError> {
    let url_str = normalize_seed_url(input);
    let parsed = Url::parse(&url_str)
        .map_err(|e| AnalysisError::InvalidHostname(format!("{input}: {e}")))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| AnalysisError::InvalidHostname(format!("{input}: no host component")))?;

    // IP literals have no registrable domain.
    if host.parse::<Ipv4Addr>().is_ok()
        || host.trim_matches(|c| c == '[' || c == ']').parse::<Ipv6Addr>().is_ok()
    {
        return Err(AnalysisError::InvalidHostname(format!(
            "{host}: IP addresses have no registrable domain"
        )));
    }

    // Extract from the parsed host, which `Url` has already lowercased,
    // rather than the raw URL string.
    let result = extractor
        .extract(host)
        .map_err(|e| AnalysisError::InvalidHostname(format!("{input}: {e}")))?;

    match (result.domain, result.suffix) {
        (Some(domain), Some(suffix)) => Ok(Hostname {
            registrable: format!("{}.{}", domain.to_lowercase(), suffix.to_lowercase()),
            tld: suffix.to_lowercase(),
        }),
        _ => Err(AnalysisError::InvalidHostname(format!(
            "{input}: no registrable domain"
        ))),
    }
}
