//! Date-string parsers.
//!
//! Leave requests arrive from free-form form entry and bulk spreadsheet
//! imports, so dates show up as plain ISO dates, ISO timestamps exported by
//! the storage backend, or European `DD/MM/YYYY`.  These helpers only split
//! and convert fields; calendar validity (e.g. February 30) is checked by the
//! date type that consumes them.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.trim().split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || year.len() != 4 {
        return None;
    }
    Some((field(year)?, field(month)?, field(day)?))
}

/// Parse an ISO 8601 timestamp and keep only its date part.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]` (or a space instead of `T`),
/// optionally followed by `Z` or a `+HH:MM` / `-HH:MM` offset.  The time must
/// be well formed even though it is discarded, so `"2025-12-01 garbage"` is
/// rejected.
pub fn parse_iso_datetime(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let (date, time) = s.split_once(['T', ' '])?;
    if !is_time_of_day(time) {
        return None;
    }
    parse_iso_date(date)
}

/// Parse a date string in `DD/MM/YYYY` format.
///
/// Slash dates are always read day first, the way they are typed in the
/// Italian spreadsheets this format comes from: `"02/01/2026"` is 2 January.
/// There is no month-first fallback, even when the day would be a valid
/// month.
///
/// Returns `(year, month, day)` on success.
pub fn parse_date_slash(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.trim().split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || year.len() != 4 {
        return None;
    }
    Some((field(year)?, field(month)?, field(day)?))
}

/// Try every supported format in turn.
///
/// # Errors
/// Returns [`Error::Parse`] when the input is blank or matches no format.
pub fn parse_date_fields(s: &str) -> Result<(u16, u8, u8)> {
    if s.trim().is_empty() {
        return Err(Error::parse(s, "empty date"));
    }
    parse_iso_date(s)
        .or_else(|| parse_iso_datetime(s))
        .or_else(|| parse_date_slash(s))
        .ok_or_else(|| Error::parse(s, "expected YYYY-MM-DD, an ISO timestamp, or DD/MM/YYYY"))
}

// `HH:MM[:SS[.fff]]` with an optional `Z` or `±HH:MM` suffix.
fn is_time_of_day(s: &str) -> bool {
    let clock = match s.strip_suffix('Z') {
        Some(clock) => clock,
        None => match s.rfind(['+', '-']) {
            Some(at) => {
                if !is_hh_mm(&s[at + 1..]) {
                    return false;
                }
                &s[..at]
            }
            None => s,
        },
    };
    let (hh_mm, rest) = match clock.get(..5) {
        Some(hh_mm) => (hh_mm, &clock[5..]),
        None => return false,
    };
    if !is_hh_mm(hh_mm) {
        return false;
    }
    if rest.is_empty() {
        return true;
    }
    let Some(seconds) = rest.strip_prefix(':') else {
        return false;
    };
    let (whole, fraction) = match seconds.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (seconds, None),
    };
    whole.len() == 2
        && field::<u8>(whole).is_some_and(|ss| ss < 60)
        && fraction.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

fn is_hh_mm(s: &str) -> bool {
    match s.split_once(':') {
        Some((hh, mm)) if hh.len() == 2 && mm.len() == 2 => {
            field::<u8>(hh).is_some_and(|h| h < 24) && field::<u8>(mm).is_some_and(|m| m < 60)
        }
        _ => false,
    }
}

// Digits only: `str::parse` would also accept a leading `+`.
fn field<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
