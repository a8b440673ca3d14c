//! DNS SOA-serial fallback for domain age.
//!
//! Many zones follow the `YYYYMMDDnn` serial convention, which makes the
//! serial's leading eight digits a usable proxy for when the zone was first
//! set up. This is a heuristic, not authoritative: serials are free-form
//! 32-bit counters and nothing guarantees a date encoding, which is why the
//! decode is bounds-checked hard and rejected on any implausibility.

use chrono::{Datelike, NaiveDate, Utc};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Decodes a SOA serial's leading eight digits as a `YYYYMMDD` date.
///
/// Rejects years outside `[1980, current year]` and any month/day outside
/// calendar bounds (leap years included, via `NaiveDate` validation).
pub(crate) fn decode_soa_serial(serial: u32) -> Option<NaiveDate> {
    let digits = serial.to_string();
    if digits.len() < 8 {
        return None;
    }
    let ymd = &digits[..8];
    let year: i32 = ymd[..4].parse().ok()?;
    let month: u32 = ymd[4..6].parse().ok()?;
    let day: u32 = ymd[6..8].parse().ok()?;

    let current_year = Utc::now().year();
    if year < 1980 || year > current_year {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Queries the zone's SOA record and decodes its serial as an approximate
/// creation date. Returns `None` when the zone has no SOA, the query fails,
/// or the serial does not look date-encoded.
pub(crate) async fn soa_creation_hint(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Option<NaiveDate> {
    let lookup = match resolver.lookup(domain, RecordType::SOA).await {
        Ok(lookup) => lookup,
        Err(e) => {
            log::debug!("SOA lookup failed for {domain}: {e}");
            return None;
        }
    };

    lookup.iter().find_map(|rdata| {
        if let RData::SOA(soa) = rdata {
            let serial = soa.serial();
            let date = decode_soa_serial(serial);
            if date.is_none() {
                log::debug!("SOA serial {serial} for {domain} does not decode to a date");
            }
            date
        } else {
            None
        }
    })
}
