//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! pipeline, including network timeouts, redirect limits, and well-known
//! endpoints.

use std::time::Duration;

/// DNS query timeout in seconds.
///
/// Most DNS queries complete in well under a second; 3s provides buffer
/// while failing fast on slow or unresponsive DNS servers.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// TCP connection timeout in seconds (TLS inspection).
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// TLS handshake timeout in seconds.
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;

/// Per-request HTTP timeout in seconds (redirect tracing).
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 10;

/// WHOIS connect timeout.
pub const WHOIS_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// WHOIS read timeout, covering the full read-until-close exchange.
pub const WHOIS_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum time the domain-age resolver waits for WHOIS before switching
/// to the DNS SOA-serial fallback.
pub const WHOIS_MAX_WAIT: Duration = Duration::from_secs(10);

/// Timeout for the wildcard-DNS probe lookup.
pub const WILDCARD_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for a single IP geolocation HTTP call.
pub const GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum number of redirect hops to follow before treating the
/// last-visited URL as final.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// WHOIS protocol port (RFC 3912).
pub const WHOIS_PORT: u16 = 43;

/// IANA root WHOIS server, queried to discover the authoritative server
/// for TLDs missing from the static table.
pub const IANA_WHOIS_SERVER: &str = "whois.iana.org";

/// Base URL of the IP geolocation HTTP API.
pub const GEOLOCATION_API_BASE_URL: &str = "https://api.ipgeolocation.io";

/// Default User-Agent string for HTTP requests.
///
/// A browser-like User-Agent matters here: sites frequently serve different
/// redirect behavior (or block outright) for obvious bot agents, which would
/// skew the traced chain.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
