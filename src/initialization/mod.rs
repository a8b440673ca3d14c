//! Shared resource initialization.
//!
//! Every client the pipeline needs (HTTP, DNS, geolocation, WHOIS) is
//! constructed explicitly here and injected at the call site; there are no
//! module-level default instances.

mod client;
mod logger;
mod resolver;

pub use client::init_redirect_client;
pub use logger::init_logger;
pub use resolver::init_resolver;

use std::sync::Arc;

use anyhow::Result;
use hickory_resolver::TokioAsyncResolver;
use tldextract::{TldExtractor, TldOption};

use crate::config::Config;
use crate::dns_probe::GeoClient;
use crate::whois::WhoisClient;

/// Installs the ring crypto provider as the process default for rustls.
///
/// Idempotent; later calls are no-ops.
pub(crate) fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Shared clients for one pipeline instance.
///
/// Cheap to clone across requests; each analysis still builds its own
/// sockets and result objects, so no state is shared between concurrent
/// requests beyond these read-only handles.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// HTTP client with automatic redirects disabled.
    pub http_client: Arc<reqwest::Client>,
    /// DNS resolver.
    pub resolver: Arc<TokioAsyncResolver>,
    /// Public-suffix extractor.
    pub extractor: Arc<TldExtractor>,
    /// WHOIS line-protocol client.
    pub whois: WhoisClient,
    /// Geolocation client; `None` when no API key is configured.
    pub geo: Option<GeoClient>,
}

impl AnalysisContext {
    /// Builds all shared clients from a configuration.
    pub fn init(config: &Config) -> Result<Self> {
        ensure_crypto_provider();

        let http_client = init_redirect_client(config)?;
        let geo = config
            .geolocation_api_key
            .as_ref()
            .map(|key| GeoClient::new(http_client.as_ref().clone(), key.clone()));
        if geo.is_none() {
            log::info!("No geolocation API key configured; geolocation lookups disabled");
        }

        Ok(AnalysisContext {
            http_client,
            resolver: init_resolver(),
            extractor: Arc::new(TldExtractor::new(TldOption::default())),
            whois: WhoisClient::new(),
            geo,
        })
    }
}
