//! Registry-specific creation-date extraction from WHOIS free text.
//!
//! Registries are inconsistent by nature, so this stays an explicit ordered
//! rule table (pattern, then a multi-format date parser) that falls through
//! silently on non-match rather than a grammar.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Ordered creation-date patterns. The first pattern whose captured value
/// parses into a valid date wins.
static CREATION_DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Creation Date:\s*(.+)",
        r"(?i)created:\s*(.+)",
        r"(?i)Registration Time:\s*(.+)",
        r"(?i)Domain Create Date:\s*(.+)",
        r"(?i)Registered on:\s*(.+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("hard-coded pattern compiles"))
    .collect()
});

/// Extracts the registration creation date from raw WHOIS text.
///
/// Returns `None` when no pattern matches or the matched value does not
/// parse; neither case is an error.
pub fn extract_creation_date(text: &str) -> Option<DateTime<Utc>> {
    for pattern in CREATION_DATE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let raw = caps[1].trim();
            if let Some(date) = parse_whois_date(raw) {
                return Some(date);
            }
            log::debug!("WHOIS date value {raw:?} matched a pattern but did not parse");
        }
    }
    None
}

/// Attempts to parse a date string in the formats registries actually emit.
pub(crate) fn parse_whois_date(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%Y.%m.%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
