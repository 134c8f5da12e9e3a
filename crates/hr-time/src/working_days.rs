//! Working-day calculator over leave intervals.
//!
//! Two counting rules live side by side and are deliberately kept apart:
//!
//! * the **year split** ([`WorkingDayCalculator::calendar_days_in_year`])
//!   reports raw calendar days of a request per year, weekends and holidays
//!   included; this is what gets stored with each request;
//! * the **month analysis** ([`WorkingDayCalculator::working_days_in_month`])
//!   reports working days only, summed over many requests.
//!
//! The other two combinations are available as well so a caller always names
//! the rule it wants.  No counting operation fails: windows that cannot be
//! built (years outside the date range) count as an empty overlap, and
//! unparseable rows are skipped and reported in a [`MonthTally`].

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holiday_calendar::HolidayCalendar;
use crate::interval::DateInterval;
use crate::leave_row::LeaveRow;
use crate::month::Month;
use hr_core::config::CalendarConfig;
use hr_core::errors::Result;
use hr_core::{DayCount, Size, Year};
use tracing::{debug, warn};

/// Raw calendar days of one interval falling in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearShare {
    /// The calendar year.
    pub year: Year,
    /// Calendar days of the interval inside `year`.
    pub days: DayCount,
}

/// Result of aggregating raw rows over a month.
///
/// Rows whose dates cannot be parsed contribute nothing to `working_days` and
/// are counted in `skipped`, so the caller can surface a warning without
/// losing the rest of the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthTally {
    /// Working days inside the month, summed over counted rows.
    pub working_days: DayCount,
    /// Rows that parsed (including those with no overlap).
    pub counted: Size,
    /// Rows dropped because a date was missing or unparseable.
    pub skipped: Size,
}

impl MonthTally {
    /// Return `true` if no row was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

impl Add for MonthTally {
    type Output = MonthTally;

    fn add(self, rhs: MonthTally) -> MonthTally {
        MonthTally {
            working_days: self.working_days + rhs.working_days,
            counted: self.counted + rhs.counted,
            skipped: self.skipped + rhs.skipped,
        }
    }
}

impl AddAssign for MonthTally {
    fn add_assign(&mut self, rhs: MonthTally) {
        *self = *self + rhs;
    }
}

impl Sum for MonthTally {
    fn sum<I: Iterator<Item = MonthTally>>(iter: I) -> MonthTally {
        iter.fold(MonthTally::default(), Add::add)
    }
}

/// Counts calendar and working days of leave intervals against a calendar.
///
/// Stateless apart from the injected calendar; share it freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct WorkingDayCalculator<C = HolidayCalendar> {
    calendar: C,
}

impl WorkingDayCalculator<HolidayCalendar> {
    /// A calculator over the shipped holiday calendar.
    pub fn standard() -> Self {
        Self::new(HolidayCalendar::default())
    }

    /// Build a calculator over the holiday calendar described by `config`.
    ///
    /// # Errors
    /// See [`HolidayCalendar::from_config`].
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        HolidayCalendar::from_config(config).map(Self::new)
    }
}

impl<C: Calendar> WorkingDayCalculator<C> {
    /// Create a calculator over `calendar`.
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// The underlying calendar.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Return `true` unless `date` is a Saturday, a Sunday, or a holiday.
    pub fn is_working_day(&self, date: Date) -> bool {
        self.calendar.is_working_day(date)
    }

    /// Calendar days of `interval` inside `year`, weekends and holidays
    /// included.  Zero if there is no overlap.
    pub fn calendar_days_in_year(&self, interval: &DateInterval, year: Year) -> DayCount {
        DateInterval::year(year)
            .ok()
            .and_then(|window| interval.intersect(&window))
            .map_or(0, |overlap| overlap.len_days())
    }

    /// Working days of `interval` inside `year`.
    pub fn working_days_in_year(&self, interval: &DateInterval, year: Year) -> DayCount {
        DateInterval::year(year)
            .ok()
            .and_then(|window| interval.intersect(&window))
            .map_or(0, |overlap| self.calendar.working_days_in(&overlap))
    }

    /// Calendar days of `interval` inside the given month, weekends and
    /// holidays included.
    pub fn calendar_days_in_month(&self, interval: &DateInterval, year: Year, month: Month) -> DayCount {
        DateInterval::month(year, month)
            .ok()
            .and_then(|window| interval.intersect(&window))
            .map_or(0, |overlap| overlap.len_days())
    }

    /// Working days inside the given month, summed over all `intervals`.
    pub fn working_days_in_month<'a, I>(&self, intervals: I, year: Year, month: Month) -> DayCount
    where
        I: IntoIterator<Item = &'a DateInterval>,
    {
        let Ok(window) = DateInterval::month(year, month) else {
            debug!(year, month = month.number(), "month outside the date range");
            return 0;
        };
        intervals
            .into_iter()
            .filter_map(|iv| iv.intersect(&window))
            .map(|overlap| self.calendar.working_days_in(&overlap))
            .sum()
    }

    /// Raw calendar days of `interval` for each of `years`, in the given
    /// order.
    pub fn year_split(&self, interval: &DateInterval, years: &[Year]) -> Vec<YearShare> {
        years
            .iter()
            .map(|&year| YearShare {
                year,
                days: self.calendar_days_in_year(interval, year),
            })
            .collect()
    }

    /// Working days inside the given month over raw rows, skipping rows with
    /// a missing or unparseable date.
    pub fn tally_month<'a, I>(&self, rows: I, year: Year, month: Month) -> MonthTally
    where
        I: IntoIterator<Item = &'a LeaveRow>,
    {
        let mut tally = MonthTally::default();
        let mut parsed = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            match row.parse() {
                Ok(interval) => parsed.push(interval),
                Err(e) => {
                    warn!(row = index, error = %e, "leave row skipped");
                    tally.skipped += 1;
                }
            }
        }
        tally.counted = parsed.len();
        tally.working_days = self.working_days_in_month(&parsed, year, month);
        debug!(
            calendar = self.calendar.name(),
            year,
            month = month.number(),
            working_days = tally.working_days,
            counted = tally.counted,
            skipped = tally.skipped,
            "month tally"
        );
        tally
    }

    /// Weekend days and holidays inside `window`, in date order.
    pub fn non_working_days(&self, window: &DateInterval) -> Vec<Date> {
        self.calendar.non_working_days_in(window)
    }
}
