//! Certificate verifier that records trust outcomes without enforcing them.
//!
//! The inspector's job is to look at whatever certificate the peer presents,
//! including expired and self-signed ones, so the handshake must not abort
//! on verification failure. This verifier runs the real webpki chain
//! verification against the Mozilla root store, stores the outcome, and then
//! reports success to rustls either way. The recorded outcome becomes the
//! `chain_valid` field of the certificate report.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::client::WebPkiServerVerifier;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, RootCertStore, SignatureScheme};

/// Shared record of the chain-trust outcome for one connection.
#[derive(Debug, Default)]
pub(crate) struct TrustOutcome {
    authorized: AtomicBool,
    failure: Mutex<Option<String>>,
}

impl TrustOutcome {
    /// Whether the presented chain verified against the root store.
    pub(crate) fn authorized(&self) -> bool {
        self.authorized.load(Ordering::Acquire)
    }

    /// The verification failure message, when not authorized.
    pub(crate) fn failure(&self) -> Option<String> {
        self.failure.lock().ok().and_then(|guard| guard.clone())
    }

    fn record_success(&self) {
        self.authorized.store(true, Ordering::Release);
    }

    fn record_failure(&self, message: String) {
        self.authorized.store(false, Ordering::Release);
        if let Ok(mut guard) = self.failure.lock() {
            guard.get_or_insert(message);
        }
    }
}

/// A [`ServerCertVerifier`] that never rejects but remembers what webpki
/// would have decided.
#[derive(Debug)]
pub(crate) struct RecordingVerifier {
    inner: Arc<WebPkiServerVerifier>,
    outcome: Arc<TrustOutcome>,
}

impl RecordingVerifier {
    /// Builds a verifier backed by the bundled Mozilla roots, returning it
    /// together with the shared outcome handle.
    pub(crate) fn new() -> Result<(Arc<Self>, Arc<TrustOutcome>)> {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let inner = WebPkiServerVerifier::builder(Arc::new(roots)).build()?;

        let outcome = Arc::new(TrustOutcome::default());
        let verifier = Arc::new(RecordingVerifier {
            inner,
            outcome: Arc::clone(&outcome),
        });
        Ok((verifier, outcome))
    }
}

impl ServerCertVerifier for RecordingVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        match self.inner.verify_server_cert(
            end_entity,
            intermediates,
            server_name,
            ocsp_response,
            now,
        ) {
            Ok(_) => self.outcome.record_success(),
            Err(e) => self.outcome.record_failure(e.to_string()),
        }
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        match self.inner.verify_tls12_signature(message, cert, dss) {
            Ok(valid) => Ok(valid),
            Err(e) => {
                self.outcome.record_failure(e.to_string());
                Ok(HandshakeSignatureValid::assertion())
            }
        }
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        match self.inner.verify_tls13_signature(message, cert, dss) {
            Ok(valid) => Ok(valid),
            Err(e) => {
                self.outcome.record_failure(e.to_string());
                Ok(HandshakeSignatureValid::assertion())
            }
        }
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.inner.supported_verify_schemes()
    }
}
