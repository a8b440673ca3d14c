//! TLS certificate inspection.
//!
//! Opens a TLS connection to port 443 with SNI set to the target hostname
//! and reads the peer's leaf certificate. Automatic certificate rejection is
//! disabled through [`verifier::RecordingVerifier`] so that invalid,
//! self-signed, and expired certificates can still be inspected; whether the
//! chain actually verified is reported separately as `chain_valid`.

mod verifier;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rustls::pki_types::ServerName;
use serde::Serialize;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::TlsConnector;
use x509_parser::certificate::X509Certificate;

use crate::config::{TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS};
use crate::initialization::ensure_crypto_provider;

use verifier::RecordingVerifier;

/// TLS certificate information extracted from a completed handshake.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateInfo {
    /// Start of the validity window; `None` when the leaf did not parse.
    pub valid_from: Option<DateTime<Utc>>,
    /// End of the validity window; `None` when the leaf did not parse.
    pub valid_to: Option<DateTime<Utc>>,
    /// Issuer organization field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Whether the presented chain verified against the Mozilla roots.
    /// Recorded at handshake time, not re-derived.
    pub chain_valid: bool,
    /// Days until expiry, rounded up; negative means expired. Zero when the
    /// validity window is unknown.
    pub days_remaining: i64,
    /// Diagnostic detail (verification failure, parse failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Days until `valid_to`, rounded up. Negative once expired.
pub(crate) fn days_remaining(valid_to: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let remaining_secs = (valid_to - now).num_seconds() as f64;
    (remaining_secs / 86_400.0).ceil() as i64
}

/// Inspects the TLS certificate presented by `host:443`.
///
/// # Returns
///
/// `None` only when no TLS connection could be established at all (TCP or
/// handshake failure/timeout); those are logged, never propagated. A
/// completed handshake always yields `Some`, even for broken certificates.
pub async fn inspect_tls(host: &str) -> Option<CertificateInfo> {
    ensure_crypto_provider();

    let server_name = match ServerName::try_from(host.to_string()) {
        Ok(name) => name,
        Err(e) => {
            log::warn!("Invalid SNI name {host}: {e}");
            return None;
        }
    };

    let (cert_verifier, trust_outcome) = match RecordingVerifier::new() {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Failed to build certificate verifier: {e}");
            return None;
        }
    };

    let config = rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(cert_verifier)
        .with_no_client_auth();

    let sock = match timeout(
        std::time::Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((host, 443)),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            log::warn!("Failed to connect to {host}:443 - {e}");
            return None;
        }
        Err(_) => {
            log::warn!("TCP connection timeout for {host}:443 ({TCP_CONNECT_TIMEOUT_SECS}s)");
            return None;
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match timeout(
        std::time::Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            log::warn!("TLS handshake failed for {host}: {e}");
            return None;
        }
        Err(_) => {
            log::warn!("TLS handshake timeout for {host} ({TLS_HANDSHAKE_TIMEOUT_SECS}s)");
            return None;
        }
    };

    let chain_valid = trust_outcome.authorized();
    let mut diagnostic = trust_outcome.failure();

    let (_, session) = tls_stream.get_ref();
    let leaf = match session.peer_certificates().and_then(|certs| certs.first()) {
        Some(cert) => cert,
        None => {
            log::warn!("No peer certificate presented by {host}");
            return Some(CertificateInfo {
                valid_from: None,
                valid_to: None,
                issuer: None,
                chain_valid: false,
                days_remaining: 0,
                diagnostic: Some("no peer certificate presented".to_string()),
            });
        }
    };

    match x509_parser::parse_x509_certificate(leaf.as_ref()) {
        Ok((_, cert)) => {
            let (valid_from, valid_to) = validity_window(&cert);
            let issuer = issuer_organization(&cert);
            let days = valid_to
                .map(|to| days_remaining(to, Utc::now()))
                .unwrap_or(0);
            Some(CertificateInfo {
                valid_from,
                valid_to,
                issuer,
                chain_valid,
                days_remaining: days,
                diagnostic,
            })
        }
        Err(e) => {
            log::warn!("Peer certificate from {host} did not parse: {e}");
            diagnostic.get_or_insert_with(|| format!("certificate parse error: {e}"));
            Some(CertificateInfo {
                valid_from: None,
                valid_to: None,
                issuer: None,
                chain_valid,
                days_remaining: 0,
                diagnostic,
            })
        }
    }
}

/// Extracts the certificate validity window as UTC datetimes.
fn validity_window(
    cert: &X509Certificate<'_>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let validity = cert.validity();
    let valid_from = DateTime::<Utc>::from_timestamp(validity.not_before.timestamp(), 0);
    let valid_to = DateTime::<Utc>::from_timestamp(validity.not_after.timestamp(), 0);
    (valid_from, valid_to)
}

/// Extracts the issuer organization (O) field, if present.
fn issuer_organization(cert: &X509Certificate<'_>) -> Option<String> {
    cert.issuer()
        .iter_organization()
        .next()
        .and_then(|attr| attr.as_str().ok())
        .map(|org| org.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn days_remaining_rounds_up() {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        // 36 hours out rounds up to 2 days.
        let to = Utc.with_ymd_and_hms(2026, 8, 26, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(to, now), 2);
    }

    #[test]
    fn days_remaining_negative_when_expired() {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap();
        assert_eq!(days_remaining(to, now), -4);
    }

    #[test]
    fn days_remaining_zero_at_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        assert_eq!(days_remaining(now, now), 0);
    }
}
