//! `DateInterval` — an inclusive `[start, end]` date range.
//!
//! Every leave request spans one interval.  Construction normalizes the
//! bounds, so a request entered backwards (end before start) is corrected
//! rather than rejected and `start <= end` always holds afterwards.

use crate::date::Date;
use crate::month::Month;
use hr_core::errors::{Error, Result};
use hr_core::{DayCount, Year};

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(Date, Date)", into = "(Date, Date)")
)]
pub struct DateInterval {
    start: Date,
    end: Date,
}

impl DateInterval {
    /// Create an interval from two dates in either order.
    pub fn new(a: Date, b: Date) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// A one-day interval.
    pub fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The whole calendar year `[year-01-01, year-12-31]`.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if `year` is outside the representable range.
    pub fn year(year: Year) -> Result<Self> {
        let y = checked_year(year)?;
        Ok(Self {
            start: Date::from_ymd(y, 1, 1)?,
            end: Date::from_ymd(y, 12, 31)?,
        })
    }

    /// The whole calendar month `[first day, last day]`.
    ///
    /// The last day is the day before the first of the following month, with
    /// December rolling into January of the next year.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if `year` is outside the representable range.
    pub fn month(year: Year, month: Month) -> Result<Self> {
        let y = checked_year(year)?;
        let start = Date::from_ymd(y, month.number(), 1)?;
        let (next, rolls_over) = month.next();
        let end = match Date::from_ymd(y + u16::from(rolls_over), next.number(), 1) {
            Ok(first_of_next) => first_of_next.add_days(-1)?,
            // December of the last representable year has no following month.
            Err(_) => start.end_of_month(),
        };
        Ok(Self { start, end })
    }

    /// First day (inclusive).
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day (inclusive).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn len_days(&self) -> DayCount {
        (self.end - self.start + 1) as DayCount
    }

    /// Return `true` if `date` lies within the interval.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The common part of two intervals, if any.
    pub fn intersect(&self, other: &DateInterval) -> Option<DateInterval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(DateInterval { start, end })
    }

    /// Return `true` if the two intervals share at least one day.
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.end >= other.start && self.start <= other.end
    }

    /// Iterate over every date in the interval.
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl std::fmt::Display for DateInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl From<(Date, Date)> for DateInterval {
    fn from((a, b): (Date, Date)) -> Self {
        Self::new(a, b)
    }
}

impl From<DateInterval> for (Date, Date) {
    fn from(iv: DateInterval) -> Self {
        (iv.start, iv.end)
    }
}

impl IntoIterator for &DateInterval {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over the dates of a [`DateInterval`], in order.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next {
            Some(d) if d <= self.end => (self.end - d + 1) as usize,
            _ => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Days {}

impl std::iter::FusedIterator for Days {}

fn checked_year(year: Year) -> Result<u16> {
    u16::try_from(year)
        .ok()
        .filter(|y| (Date::MIN_YEAR..=Date::MAX_YEAR).contains(y))
        .ok_or_else(|| Error::Date(format!("year {year} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let iv = DateInterval::new(date(2026, 1, 2), date(2025, 12, 29));
        assert_eq!(iv.start(), date(2025, 12, 29));
        assert_eq!(iv.end(), date(2026, 1, 2));
        assert_eq!(iv, DateInterval::new(date(2025, 12, 29), date(2026, 1, 2)));
        assert_eq!(iv.len_days(), 5);
    }

    #[test]
    fn year_window() {
        let y = DateInterval::year(2025).unwrap();
        assert_eq!(y.start(), date(2025, 1, 1));
        assert_eq!(y.end(), date(2025, 12, 31));
        assert_eq!(y.len_days(), 365);
        assert_eq!(DateInterval::year(2024).unwrap().len_days(), 366);
        assert!(DateInterval::year(1899).is_err());
        assert!(DateInterval::year(-5).is_err());
    }

    #[test]
    fn month_windows() {
        let dec = DateInterval::month(2025, Month::December).unwrap();
        assert_eq!(dec.end(), date(2025, 12, 31));
        let feb = DateInterval::month(2024, Month::February).unwrap();
        assert_eq!(feb.end(), date(2024, 2, 29));
        let apr = DateInterval::month(2026, Month::April).unwrap();
        assert_eq!(apr.len_days(), 30);
        let last = DateInterval::month(2199, Month::December).unwrap();
        assert_eq!(last.end(), Date::MAX);
        assert!(DateInterval::month(2200, Month::January).is_err());
    }

    #[test]
    fn intersection_and_overlap() {
        let a = DateInterval::new(date(2025, 12, 20), date(2026, 1, 10));
        let dec = DateInterval::month(2025, Month::December).unwrap();
        assert_eq!(
            a.intersect(&dec),
            Some(DateInterval::new(date(2025, 12, 20), date(2025, 12, 31)))
        );
        let nov = DateInterval::month(2025, Month::November).unwrap();
        assert_eq!(a.intersect(&nov), None);
        assert!(!a.overlaps(&nov));
        // Touching on a single day counts as overlapping.
        let b = DateInterval::new(date(2026, 1, 10), date(2026, 1, 12));
        assert!(a.overlaps(&b));
        assert_eq!(a.intersect(&b).map(|i| i.len_days()), Some(1));
    }

    #[test]
    fn days_iterates_inclusively() {
        let iv = DateInterval::new(date(2025, 12, 30), date(2026, 1, 1));
        let days: Vec<_> = iv.days().collect();
        assert_eq!(days, vec![date(2025, 12, 30), date(2025, 12, 31), date(2026, 1, 1)]);
        assert_eq!(iv.days().len(), 3);
        assert_eq!(DateInterval::single(Date::MAX).days().count(), 1);
    }

    #[test]
    fn display() {
        let iv = DateInterval::new(date(2025, 12, 8), date(2025, 12, 9));
        assert_eq!(iv.to_string(), "[2025-12-08, 2025-12-09]");
    }
}
