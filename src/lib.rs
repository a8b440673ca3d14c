//! domain_trust: low-level trust signals for a target domain.
//!
//! Given a URL or bare hostname, this library gathers four independent
//! signal bundles: registration age (raw WHOIS with IANA referral plus a
//! DNS SOA-serial fallback), DNS posture (records, geolocation, wildcard
//! detection), TLS certificate health, and the HTTP redirect chain. The
//! bundles feed a deterministic risk classifier producing LOW/MEDIUM/HIGH
//! verdicts per category.
//!
//! # Example
//!
//! ```no_run
//! use domain_trust::{analyze_url, assess_risk, AnalysisContext, Config, ReferenceTables};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = AnalysisContext::init(&Config::from_env())?;
//! let report = analyze_url("https://example.com", &ctx).await?;
//! let risk = assess_risk(&report, &ReferenceTables::default());
//! println!("{}", serde_json::to_string_pretty(&risk)?);
//! # Ok(())
//! # }
//! ```
//!
//! Signal sources fail independently: a dead WHOIS server, an NXDOMAIN, or
//! a refused TLS handshake each degrade their own bundle to a documented
//! empty/null value without touching the others. The only hard failure is
//! input that cannot be normalized into a registrable hostname.

pub mod config;
mod dns_probe;
mod domain_age;
mod error_handling;
mod hostname;
pub mod initialization;
mod models;
mod redirects;
mod risk;
mod tls_probe;
mod whois;

// Re-export public API
pub use config::Config;
pub use dns_probe::{probe_dns, DnsSignals, GeoClient, GeoEntry, MxRecord, ResolutionStatus};
pub use domain_age::{resolve_domain_age, AgeMethod, DomainAgeResult};
pub use error_handling::{AnalysisError, DnsErrorKind, WhoisError};
pub use hostname::{extract_hostname, Hostname};
pub use initialization::AnalysisContext;
pub use models::AnalysisReport;
pub use redirects::{trace_redirects, RedirectChain, RedirectHop};
pub use risk::{assess_risk, AgeRisk, ReferenceTables, RiskBundle, RiskLevel};
pub use tls_probe::{inspect_tls, CertificateInfo};
pub use whois::WhoisClient;

use hostname::normalize_seed_url;

/// Runs one full analysis of a URL or bare hostname.
///
/// The four probes (redirect trace, DNS posture, domain age, TLS
/// certificate) query independent external systems and run concurrently;
/// each recovers its own failures, so the fan-out always completes.
///
/// # Errors
///
/// Only [`AnalysisError::InvalidHostname`]. Every downstream failure is
/// soft and reflected in the report instead.
pub async fn analyze_url(
    input: &str,
    ctx: &AnalysisContext,
) -> Result<AnalysisReport, AnalysisError> {
    let host = extract_hostname(&ctx.extractor, input)?;
    let seed_url = normalize_seed_url(input);
    log::info!("Analyzing {} (registrable: {})", seed_url, host.registrable);

    let (redirects, dns, domain_age, ssl) = tokio::join!(
        redirects::trace_redirects(&seed_url, &ctx.http_client),
        dns_probe::probe_dns(&host, &ctx.resolver, ctx.geo.as_ref()),
        domain_age::resolve_domain_age(&host, &ctx.whois, &ctx.resolver),
        tls_probe::inspect_tls(&host.registrable),
    );

    Ok(AnalysisReport {
        redirects,
        dns,
        domain_age,
        ssl,
    })
}
