//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT, HTTP_REQUEST_TIMEOUT_SECS};

/// Initializes the shared HTTP client.
///
/// Redirects are disabled so the tracer can follow the chain manually and
/// capture every intermediate URL; the same client serves the geolocation
/// API, which never redirects.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent(user_agent)
        .build()?;
    Ok(Arc::new(client))
}
