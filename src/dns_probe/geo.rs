//! IP geolocation lookups.
//!
//! Fans out one HTTP call per resolved address against an ipgeolocation.io
//! style API. Lookups run concurrently; any individual failure drops that
//! address's entry instead of aborting the probe.

use futures::future::join_all;
use serde::Deserialize;

use crate::config::{GEOLOCATION_API_BASE_URL, GEOLOCATION_TIMEOUT};

use super::types::GeoEntry;

/// Wire shape of the geolocation API response (the fields we consume).
#[derive(Debug, Deserialize)]
struct GeoApiResponse {
    country_name: Option<String>,
    city: Option<String>,
    isp: Option<String>,
}

/// Client for the IP geolocation HTTP API.
#[derive(Debug, Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeoClient {
    /// Creates a client against the production API endpoint.
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        GeoClient {
            http,
            api_key,
            base_url: GEOLOCATION_API_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Looks up geolocation data for a single address.
    ///
    /// Returns `None` on any transport, status, or decode failure.
    pub async fn lookup(&self, ip: &str) -> Option<GeoEntry> {
        let response = self
            .http
            .get(format!("{}/ipgeo", self.base_url))
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("ip", ip),
                ("fields", "geo,isp"),
            ])
            .timeout(GEOLOCATION_TIMEOUT)
            .send()
            .await;

        let response = match response.and_then(|r| r.error_for_status()) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Geolocation lookup failed for {ip}: {e}");
                return None;
            }
        };

        match response.json::<GeoApiResponse>().await {
            Ok(geo) => Some(GeoEntry {
                ip: ip.to_string(),
                country: geo.country_name,
                city: geo.city,
                isp: geo.isp,
            }),
            Err(e) => {
                log::warn!("Geolocation response for {ip} did not decode: {e}");
                None
            }
        }
    }

    /// Looks up all addresses concurrently, keeping only successful entries.
    pub async fn lookup_all(&self, addresses: &[String]) -> Vec<GeoEntry> {
        let lookups = addresses.iter().map(|ip| self.lookup(ip));
        join_all(lookups).await.into_iter().flatten().collect()
    }
}
