//! Raw WHOIS protocol client.
//!
//! WHOIS (RFC 3912) is a line-oriented TCP protocol on port 43: the client
//! sends `"<hostname>\r\n"` and the server writes free-text registration
//! data, then closes the connection. There is no framing beyond EOF.
//!
//! Lookups first consult a static table of authoritative servers for common
//! TLDs; unknown TLDs (or failed direct queries) fall back to the IANA root
//! server, whose response carries a `whois: <server>` referral line naming
//! the registry's server, which is then queried in turn.
//!
//! All failures map to [`WhoisError`], which callers treat as "no data".

mod servers;

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::{IANA_WHOIS_SERVER, WHOIS_CONNECT_TIMEOUT, WHOIS_PORT, WHOIS_READ_TIMEOUT};
use crate::error_handling::WhoisError;

use servers::authoritative_server;

/// Referral line in an IANA root-server response, e.g. `whois: whois.nic.io`.
static IANA_REFERRAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*whois:\s+(\S+)").expect("hard-coded pattern compiles"));

/// Client for the WHOIS line protocol.
///
/// Constructed explicitly and injected at the call site; there is no global
/// default instance. The port and IANA endpoint are overridable so tests can
/// run against a local listener.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    connect_timeout: Duration,
    read_timeout: Duration,
    port: u16,
    iana_server: String,
}

impl Default for WhoisClient {
    fn default() -> Self {
        WhoisClient {
            connect_timeout: WHOIS_CONNECT_TIMEOUT,
            read_timeout: WHOIS_READ_TIMEOUT,
            port: WHOIS_PORT,
            iana_server: IANA_WHOIS_SERVER.to_string(),
        }
    }
}

impl WhoisClient {
    /// Creates a client with the default timeouts and endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the server port (tests).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Overrides the IANA root server address (tests).
    pub fn with_iana_server(mut self, server: impl Into<String>) -> Self {
        self.iana_server = server.into();
        self
    }

    /// Looks up WHOIS data for a hostname, returning the raw response text.
    ///
    /// # Arguments
    ///
    /// * `hostname` - The registrable domain to query
    /// * `tld` - Its public suffix, used to pick the authoritative server
    ///
    /// # Errors
    ///
    /// Returns [`WhoisError`] when neither the direct query nor the IANA
    /// referral path produced a response.
    pub async fn lookup(&self, hostname: &str, tld: &str) -> Result<String, WhoisError> {
        // Multi-part suffixes like "co.uk" are keyed by their last label.
        let lookup_key = tld.rsplit('.').next().unwrap_or(tld);

        if let Some(server) = authoritative_server(lookup_key) {
            match self.query_server(hostname, server).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    log::warn!("Direct WHOIS query against {server} failed for {hostname}: {e}");
                }
            }
        }

        // Discover the registry server through the IANA root.
        let iana_response = self.query_server(hostname, &self.iana_server).await?;
        let referred = parse_iana_referral(&iana_response).ok_or_else(|| {
            WhoisError::Unavailable(format!("no WHOIS referral for .{tld} in IANA response"))
        })?;
        log::debug!("IANA referred {hostname} to {referred}");
        self.query_server(hostname, &referred).await
    }

    /// Performs one raw protocol exchange against a single server: connect,
    /// send `"<hostname>\r\n"`, read until the peer closes the connection.
    pub async fn query_server(&self, hostname: &str, server: &str) -> Result<String, WhoisError> {
        let stream = timeout(
            self.connect_timeout,
            TcpStream::connect((server, self.port)),
        )
        .await
        .map_err(|_| WhoisError::Timeout(self.connect_timeout))?
        .map_err(|e| WhoisError::Unavailable(format!("connect {}:{}: {e}", server, self.port)))?;

        let mut stream = stream;
        let query = format!("{hostname}\r\n");
        stream
            .write_all(query.as_bytes())
            .await
            .map_err(|e| WhoisError::Unavailable(format!("write to {server}: {e}")))?;

        let mut response = Vec::new();
        timeout(self.read_timeout, stream.read_to_end(&mut response))
            .await
            .map_err(|_| WhoisError::Timeout(self.read_timeout))?
            .map_err(|e| WhoisError::Unavailable(format!("read from {server}: {e}")))?;

        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}

/// Extracts the referred server from an IANA root-server response.
pub(crate) fn parse_iana_referral(response: &str) -> Option<String> {
    IANA_REFERRAL
        .captures(response)
        .map(|caps| caps[1].trim().to_string())
}
