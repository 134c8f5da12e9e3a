//! `Date` type.
//!
//! Dates are stored as a serial number of days: serial 1 is January 1, 1900
//! (a Monday).  The valid range is 1900-01-01 to 2199-12-31, which comfortably
//! covers any leave request the dashboard will see.  Comparisons and
//! differences are plain integer operations on the serial.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use hr_core::errors::{Error, Result};
use hr_core::parsers::parse_date_fields;

/// A calendar date (no time component).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    /// First representable year.
    pub const MIN_YEAR: u16 = 1900;

    /// Last representable year.
    pub const MAX_YEAR: u16 = 2199;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the year is outside 1900–2199 or the
    /// month/day pair does not exist (e.g. February 30).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(Date(serial))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::ALL[m as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 is a Monday.
        match Weekday::from_ordinal(((self.0 - 1).rem_euclid(7) + 1) as u8) {
            Some(w) => w,
            None => unreachable!("rem_euclid(7) + 1 is always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))
            .and_then(Date::from_serial)
    }

    /// The next day, or `None` at [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        (self < Self::MAX).then(|| Date(self.0 + 1))
    }

    /// The previous day, or `None` at [`Date::MIN`].
    pub fn pred(self) -> Option<Self> {
        (self > Self::MIN).then(|| Date(self.0 - 1))
    }

    /// Calendar days from `self` to `other` (positive if `other > self`).
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing / formatting ──────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD`, an ISO timestamp (date part kept), or `DD/MM/YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_date_fields(s)?;
        Date::from_ymd(y, m, d).map_err(|e| Error::parse(s, e.to_string()))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        // 1900-01-01 is day 693_596 of the proleptic Gregorian calendar (CE).
        match chrono::NaiveDate::from_num_days_from_ce_opt(d.0 + 693_595) {
            Some(nd) => nd,
            None => unreachable!("every Date is representable as a NaiveDate"),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(nd: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(nd.year())
            .map_err(|_| Error::Date(format!("year {} out of range", nd.year())))?;
        Date::from_ymd(year, nd.month() as u8, nd.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Serial of `year`-01-01 minus one.
fn days_before_year(year: u16) -> i32 {
    let y = year as i32;
    // Leap years in [1901, year); 1900 itself is not a leap year.
    let leaps = (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    (y - 1900) * 365 + leaps
}

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let leap_shift = i32::from(month > 2 && is_leap_year(year));
    days_before_year(year) + MONTH_OFFSET[month as usize - 1] + leap_shift + day as i32
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // The estimate can overshoot by one year near January 1st.
    let mut y = (Date::MIN_YEAR as i32 + (serial - 1) / 365) as u16;
    while serial <= days_before_year(y) {
        y -= 1;
    }
    let mut remaining = serial - days_before_year(y);
    let mut m = 1u8;
    loop {
        let len = days_in_month(y, m) as i32;
        if remaining <= len {
            break;
        }
        remaining -= len;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_and_bounds() {
        assert_eq!(date(1900, 1, 1), Date::MIN);
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(2199, 12, 31), Date::MAX);
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2024, 12, 31),
            (2025, 1, 1),
            (2025, 12, 31),
            (2026, 1, 6),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let dt = date(y, m, d);
            assert_eq!(dt.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(dt.month().number(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(dt.day(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_day() {
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 4, 31).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 1, 0).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2025, 12, 8).weekday(), Weekday::Monday);
        assert_eq!(date(2025, 12, 25).weekday(), Weekday::Thursday);
        assert_eq!(date(2025, 12, 27).weekday(), Weekday::Saturday);
        assert_eq!(date(2026, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2026, 1, 6).weekday(), Weekday::Tuesday);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2025, 12, 31);
        assert_eq!(d.succ(), Some(date(2026, 1, 1)));
        assert_eq!(date(2026, 1, 1).pred(), Some(d));
        assert_eq!(d.add_days(-30).unwrap(), date(2025, 12, 1));
        assert_eq!(date(2026, 1, 2) - date(2025, 12, 29), 4);
        assert_eq!(date(2025, 1, 1).days_until(date(2025, 12, 31)), 364);
        assert_eq!(Date::MAX.succ(), None);
        assert_eq!(Date::MIN.pred(), None);
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(date(2024, 2, 15).end_of_month(), date(2024, 2, 29));
        assert_eq!(date(2025, 2, 1).end_of_month(), date(2025, 2, 28));
        assert_eq!(date(2025, 12, 8).end_of_month(), date(2025, 12, 31));
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2025-12-08".parse().unwrap();
        assert_eq!(d, date(2025, 12, 8));
        assert_eq!(d.to_string(), "2025-12-08");
        assert_eq!(format!("{d:?}"), "Date(2025-12-08)");
        assert_eq!("08/12/2025".parse::<Date>().unwrap(), d);
        assert_eq!("2025-12-08T00:00:00".parse::<Date>().unwrap(), d);
        assert!(matches!("2025-02-30".parse::<Date>(), Err(Error::Parse { .. })));
        assert!(matches!("".parse::<Date>(), Err(Error::Parse { .. })));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_interop() {
        let nd = chrono::NaiveDate::from_ymd_opt(2025, 12, 26).unwrap();
        let d = Date::try_from(nd).unwrap();
        assert_eq!(d, date(2025, 12, 26));
        assert_eq!(chrono::NaiveDate::from(d), nd);
        assert_eq!(chrono::NaiveDate::from(Date::MIN), chrono::NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
    }
}
