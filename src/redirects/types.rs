//! Redirect chain data structures.

use std::collections::BTreeMap;

use serde::Serialize;

/// How a hop was observed. Only HTTP-level redirects are traced here;
/// JavaScript and meta-refresh navigation belong to the browser-automation
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HopType {
    Http,
}

/// A single hop in a redirect chain.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectHop {
    /// The URL that produced this response.
    pub url: String,
    /// HTTP status code (synthetic framing hops use 200).
    pub status_code: u16,
    /// Response headers; empty for synthetic hops. BTreeMap keeps JSON key
    /// order deterministic.
    pub headers: BTreeMap<String, String>,
    /// Hop mechanism.
    #[serde(rename = "type")]
    pub hop_type: HopType,
}

impl RedirectHop {
    /// A synthetic status-200 framing hop for the seed or final URL.
    pub(crate) fn synthetic(url: impl Into<String>) -> Self {
        RedirectHop {
            url: url.into(),
            status_code: 200,
            headers: BTreeMap::new(),
            hop_type: HopType::Http,
        }
    }
}

/// An ordered redirect chain from seed to final destination.
///
/// Invariants: no two consecutive hops share the same URL, the chain has at
/// least one hop after tracing, and `total_redirects == max(0, len - 1)`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectChain {
    /// The deduplicated hops, start to end.
    pub chain: Vec<RedirectHop>,
    /// Where the trace ended up.
    pub final_url: String,
    /// Number of transitions in the chain.
    pub total_redirects: usize,
}
