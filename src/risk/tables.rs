//! Static reference data for the risk classifier.
//!
//! These lists are deliberately data, not logic: they are injected into the
//! classifier at construction so deployments can swap them and tests can pin
//! them, and they are never derived at runtime.

/// Immutable reference tables consulted by the risk classifier.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    /// Countries whose hosting presence alone is HIGH risk.
    pub high_risk_countries: Vec<String>,
    /// Countries treated as MEDIUM risk.
    pub medium_risk_countries: Vec<String>,
    /// ISP name substrings considered trustworthy (case-insensitive).
    pub trusted_isps: Vec<String>,
    /// ISP name substrings considered hostile (case-insensitive).
    pub untrusted_isps: Vec<String>,
    /// Certificate issuer substrings considered trustworthy.
    pub trusted_issuers: Vec<String>,
    /// Certificate issuer substrings considered hostile.
    pub untrusted_issuers: Vec<String>,
    /// Mail exchange hostname substrings of reputable providers.
    pub trusted_email_providers: Vec<String>,
    /// TLD suffixes with a history of throwaway abuse.
    pub risky_tlds: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ReferenceTables {
    fn default() -> Self {
        ReferenceTables {
            high_risk_countries: owned(&[
                "North Korea",
                "Iran",
                "Syria",
                "Sudan",
                "Cuba",
                "Russia",
                "Belarus",
                "Myanmar",
            ]),
            medium_risk_countries: owned(&[
                "China",
                "Nigeria",
                "Pakistan",
                "Vietnam",
                "Indonesia",
                "Ukraine",
                "Romania",
                "Turkey",
                "Brazil",
                "India",
            ]),
            trusted_isps: owned(&[
                "Google",
                "Amazon",
                "Cloudflare",
                "Microsoft",
                "Akamai",
                "Fastly",
                "DigitalOcean",
                "Hetzner",
                "OVH",
            ]),
            untrusted_isps: owned(&[
                "bulletproof",
                "offshore",
                "anonymous hosting",
                "privex",
            ]),
            trusted_issuers: owned(&[
                "Let's Encrypt",
                "DigiCert",
                "Sectigo",
                "GlobalSign",
                "GoDaddy",
                "Entrust",
                "Amazon",
                "Google Trust Services",
                "Microsoft",
                "Comodo",
            ]),
            untrusted_issuers: owned(&["Self-signed", "localhost", "Test CA", "Fake"]),
            trusted_email_providers: owned(&[
                "google.com",
                "googlemail.com",
                "outlook.com",
                "protection.outlook.com",
                "proofpoint.com",
                "mimecast.com",
                "zoho.com",
                "fastmail.com",
                "yahoodns.net",
            ]),
            risky_tlds: owned(&[".tk", ".ml", ".ga"]),
        }
    }
}
