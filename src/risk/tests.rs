use super::*;
use chrono::{TimeZone, Utc};

fn tables() -> ReferenceTables {
    ReferenceTables::default()
}

fn geo(country: Option<&str>, isp: Option<&str>) -> GeoEntry {
    GeoEntry {
        ip: "198.51.100.7".to_string(),
        country: country.map(str::to_string),
        city: None,
        isp: isp.map(str::to_string),
    }
}

fn mx(exchange: &str) -> MxRecord {
    MxRecord {
        exchange: exchange.to_string(),
        priority: 10,
    }
}

fn cert(chain_valid: bool, days_remaining: i64, issuer: Option<&str>) -> CertificateInfo {
    CertificateInfo {
        valid_from: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        valid_to: Some(Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap()),
        issuer: issuer.map(str::to_string),
        chain_valid,
        days_remaining,
        diagnostic: None,
    }
}

fn age(age_years: i64) -> DomainAgeResult {
    DomainAgeResult {
        method: crate::domain_age::AgeMethod::Whois,
        creation_date: Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap(),
        age_years,
    }
}

// --- Risk level ordering ---

#[test]
fn test_risk_level_total_order() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
    assert_eq!(RiskLevel::Low.max(RiskLevel::High), RiskLevel::High);
}

#[test]
fn test_risk_level_wire_names() {
    assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
    assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"HIGH\"");
    assert_eq!(
        serde_json::to_string(&AgeRisk::Inconclusive).unwrap(),
        "\"INCONCLUSIVE\""
    );
}

// --- Geolocation ---

#[test]
fn test_geolocation_trusted_isp_low() {
    let entry = geo(Some("United States"), Some("Google LLC"));
    assert_eq!(evaluate_geolocation_risk(&entry, &tables()), RiskLevel::Low);
}

#[test]
fn test_geolocation_unknown_isp_defaults_medium() {
    let entry = geo(Some("United States"), Some("Totally Obscure Networks"));
    assert_eq!(
        evaluate_geolocation_risk(&entry, &tables()),
        RiskLevel::Medium
    );
}

#[test]
fn test_geolocation_missing_isp_defaults_medium() {
    let entry = geo(Some("United States"), None);
    assert_eq!(
        evaluate_geolocation_risk(&entry, &tables()),
        RiskLevel::Medium
    );
}

#[test]
fn test_geolocation_high_risk_country_dominates_trusted_isp() {
    let entry = geo(Some("North Korea"), Some("Cloudflare, Inc."));
    assert_eq!(evaluate_geolocation_risk(&entry, &tables()), RiskLevel::High);
}

#[test]
fn test_geolocation_isp_match_is_case_insensitive() {
    let entry = geo(Some("Germany"), Some("HETZNER Online GmbH"));
    assert_eq!(evaluate_geolocation_risk(&entry, &tables()), RiskLevel::Low);
}

#[test]
fn test_geolocation_aggregate_most_severe_wins() {
    let entries = vec![
        geo(Some("United States"), Some("Google LLC")),
        geo(Some("Iran"), Some("Google LLC")),
    ];
    assert_eq!(
        aggregate_geolocation_risk(&entries, &tables()),
        RiskLevel::High
    );
}

#[test]
fn test_geolocation_no_entries_is_low() {
    assert_eq!(aggregate_geolocation_risk(&[], &tables()), RiskLevel::Low);
}

// --- TXT records ---

#[test]
fn test_txt_spf_record_low() {
    let groups = vec![vec!["v=spf1 include:_spf.example.com ~all".to_string()]];
    assert_eq!(evaluate_txt_risk(&groups), RiskLevel::Low);
}

#[test]
fn test_txt_no_records_high() {
    assert_eq!(evaluate_txt_risk(&[]), RiskLevel::High);
}

#[test]
fn test_txt_redirect_marker_high() {
    let groups = vec![vec!["redirect=http://evil.example".to_string()]];
    assert_eq!(evaluate_txt_risk(&groups), RiskLevel::High);
}

#[test]
fn test_txt_overlong_record_high() {
    let groups = vec![vec!["a".repeat(300)]];
    assert_eq!(evaluate_txt_risk(&groups), RiskLevel::High);
}

#[test]
fn test_txt_suspicious_beats_valid_config() {
    let groups = vec![
        vec!["v=spf1 -all".to_string()],
        vec!["redirect=http://evil.example".to_string()],
    ];
    assert_eq!(evaluate_txt_risk(&groups), RiskLevel::High);
}

#[test]
fn test_txt_unrelated_records_medium() {
    let groups = vec![vec!["google-site-verification=abc123".to_string()]];
    assert_eq!(evaluate_txt_risk(&groups), RiskLevel::Medium);
}

// --- MX records ---

#[test]
fn test_mx_trusted_provider_low() {
    let records = vec![mx("aspmx.l.google.com."), mx("alt1.aspmx.l.google.com.")];
    assert_eq!(evaluate_mx_risk(&records, &tables()), RiskLevel::Low);
}

#[test]
fn test_mx_risky_tld_high() {
    let records = vec![mx("mail.phish.tk")];
    assert_eq!(evaluate_mx_risk(&records, &tables()), RiskLevel::High);
}

#[test]
fn test_mx_risky_tld_dominates_trusted() {
    let records = vec![mx("aspmx.l.google.com."), mx("mail.phish.ga")];
    assert_eq!(evaluate_mx_risk(&records, &tables()), RiskLevel::High);
}

#[test]
fn test_mx_unknown_provider_medium() {
    let records = vec![mx("mail.selfhosted.example")];
    assert_eq!(evaluate_mx_risk(&records, &tables()), RiskLevel::Medium);
}

#[test]
fn test_mx_no_records_low() {
    assert_eq!(evaluate_mx_risk(&[], &tables()), RiskLevel::Low);
}

// --- Wildcard ---

#[test]
fn test_wildcard_detected_high() {
    assert_eq!(evaluate_wildcard_risk(true), RiskLevel::High);
    assert_eq!(evaluate_wildcard_risk(false), RiskLevel::Low);
}

// --- Domain age ---

#[test]
fn test_age_unknown_inconclusive() {
    assert_eq!(evaluate_domain_age_risk(None), AgeRisk::Inconclusive);
}

#[test]
fn test_age_brand_new_high() {
    assert_eq!(evaluate_domain_age_risk(Some(&age(0))), AgeRisk::High);
    assert_eq!(evaluate_domain_age_risk(Some(&age(-1))), AgeRisk::High);
}

#[test]
fn test_age_one_to_five_years_medium() {
    assert_eq!(evaluate_domain_age_risk(Some(&age(1))), AgeRisk::Medium);
    assert_eq!(evaluate_domain_age_risk(Some(&age(5))), AgeRisk::Medium);
}

#[test]
fn test_age_established_low() {
    assert_eq!(evaluate_domain_age_risk(Some(&age(6))), AgeRisk::Low);
    assert_eq!(evaluate_domain_age_risk(Some(&age(25))), AgeRisk::Low);
}

// --- SSL ---

#[test]
fn test_ssl_missing_certificate_high() {
    assert_eq!(evaluate_ssl_risk(None, &tables()), RiskLevel::High);
}

#[test]
fn test_ssl_unauthorized_chain_high() {
    let c = cert(false, 90, Some("Let's Encrypt"));
    assert_eq!(evaluate_ssl_risk(Some(&c), &tables()), RiskLevel::High);
}

#[test]
fn test_ssl_expired_high_regardless_of_issuer() {
    let c = cert(true, 0, Some("Let's Encrypt"));
    assert_eq!(evaluate_ssl_risk(Some(&c), &tables()), RiskLevel::High);
    let c = cert(true, -30, Some("DigiCert"));
    assert_eq!(evaluate_ssl_risk(Some(&c), &tables()), RiskLevel::High);
}

#[test]
fn test_ssl_trusted_issuer_low() {
    let c = cert(true, 90, Some("Let's Encrypt"));
    assert_eq!(evaluate_ssl_risk(Some(&c), &tables()), RiskLevel::Low);
}

#[test]
fn test_ssl_unknown_issuer_medium() {
    let c = cert(true, 90, Some("Example Corp CA"));
    assert_eq!(evaluate_ssl_risk(Some(&c), &tables()), RiskLevel::Medium);
}

#[test]
fn test_ssl_missing_issuer_medium() {
    let c = cert(true, 90, None);
    assert_eq!(evaluate_ssl_risk(Some(&c), &tables()), RiskLevel::Medium);
}

// --- Monotonicity spot checks ---

#[test]
fn test_geolocation_monotone_in_country() {
    let t = tables();
    let low = evaluate_geolocation_risk(&geo(Some("France"), Some("Google LLC")), &t);
    let mid = evaluate_geolocation_risk(&geo(Some("China"), Some("Google LLC")), &t);
    let high = evaluate_geolocation_risk(&geo(Some("Iran"), Some("Google LLC")), &t);
    assert!(low <= mid && mid <= high);
}

#[test]
fn test_aggregate_monotone_under_worse_entry() {
    let t = tables();
    let base = vec![geo(Some("France"), Some("Google LLC"))];
    let worse = vec![
        geo(Some("France"), Some("Google LLC")),
        geo(Some("Iran"), None),
    ];
    assert!(aggregate_geolocation_risk(&base, &t) <= aggregate_geolocation_risk(&worse, &t));
}
