//! Raw leave-request rows.
//!
//! Rows come straight from form submissions or spreadsheet imports, so either
//! date may be missing or malformed.  Parsing a row yields a normalized
//! [`DateInterval`]; callers aggregating many rows skip the ones that fail
//! instead of aborting.

use crate::date::Date;
use crate::interval::DateInterval;
use hr_core::errors::{Error, Result};

/// One leave request as stored upstream: two optional date strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaveRow {
    /// First day of leave.
    pub start: Option<String>,
    /// Last day of leave.
    pub end: Option<String>,
}

impl LeaveRow {
    /// Create a row with both dates present.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Create a row whose end date was never filled in.
    pub fn open_ended(start: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: None,
        }
    }

    /// Parse both dates into an interval (swapping them if reversed).
    ///
    /// # Errors
    /// Fails if either date is missing or unparseable.
    pub fn parse(&self) -> Result<DateInterval> {
        let start = required(self.start.as_deref(), "start")?;
        let end = required(self.end.as_deref(), "end")?;
        Ok(DateInterval::new(start, end))
    }

    /// Like [`LeaveRow::parse`], but a missing end date means a one-day
    /// request ending on the start date.
    ///
    /// Only the period filter reads rows this way; the month tally and the
    /// daily trend drop open-ended rows.
    ///
    /// A present but unparseable end date is still an error.
    pub fn parse_with_open_end(&self) -> Result<DateInterval> {
        let start = required(self.start.as_deref(), "start")?;
        match self.end.as_deref().map(str::trim) {
            None | Some("") => Ok(DateInterval::single(start)),
            Some(end) => Ok(DateInterval::new(start, end.parse()?)),
        }
    }
}

fn required(value: Option<&str>, field: &str) -> Result<Date> {
    match value {
        Some(s) if !s.trim().is_empty() => s.parse(),
        _ => Err(Error::parse("", format!("missing {field} date"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parse_normalizes_reversed_row() {
        let row = LeaveRow::new("2026-01-02", "29/12/2025");
        assert_eq!(
            row.parse().unwrap(),
            DateInterval::new(date(2025, 12, 29), date(2026, 1, 2))
        );
    }

    #[test]
    fn parse_rejects_missing_or_bad_dates() {
        assert!(LeaveRow::open_ended("2025-12-01").parse().is_err());
        assert!(LeaveRow::default().parse().is_err());
        assert!(LeaveRow::new("2025-12-01", "  ").parse().is_err());
        assert!(LeaveRow::new("2025-13-01", "2025-12-05").parse().is_err());
    }

    #[test]
    fn open_end_falls_back_to_start() {
        let row = LeaveRow::open_ended("2025-12-22");
        assert_eq!(row.parse_with_open_end().unwrap(), DateInterval::single(date(2025, 12, 22)));
        let blank = LeaveRow::new("2025-12-22", "");
        assert_eq!(blank.parse_with_open_end().unwrap().len_days(), 1);
        let bad = LeaveRow::new("2025-12-22", "soon");
        assert!(bad.parse_with_open_end().is_err());
    }
}
