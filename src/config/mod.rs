//! Configuration types and constants.
//!
//! All tunable timeouts and limits live in [`constants`]; the [`Config`]
//! struct carries the few runtime settings (API keys, User-Agent override)
//! that callers may want to change per deployment.

mod constants;

pub use constants::*;

/// Runtime configuration for an analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API key for the IP geolocation service.
    ///
    /// Geolocation lookups are skipped entirely (empty result list) when
    /// this is unset, since the service rejects unauthenticated requests.
    pub geolocation_api_key: Option<String>,
    /// Override for the User-Agent header sent by the redirect tracer.
    pub user_agent: Option<String>,
}

impl Config {
    /// Builds a configuration from environment variables.
    ///
    /// Reads `IP_GEOLOCATION_API_KEY`; an empty value is treated as unset.
    pub fn from_env() -> Self {
        Config {
            geolocation_api_key: std::env::var("IP_GEOLOCATION_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            user_agent: None,
        }
    }
}
