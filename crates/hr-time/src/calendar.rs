//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar decides which dates are working days.  The policy used across
//! the dashboard is: Monday to Friday, minus the calendar's named holidays.

use crate::date::Date;
use crate::interval::DateInterval;
use hr_core::DayCount;

/// A working-day calendar.
///
/// Implementors only have to say which dates are named holidays; weekends and
/// the counting helpers come for free.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"HR leave"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a named holiday, whatever its weekday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Count the working days in `interval` (both ends inclusive).
    fn working_days_in(&self, interval: &DateInterval) -> DayCount {
        interval.days().filter(|&d| self.is_working_day(d)).count() as DayCount
    }

    /// List the weekend days and holidays in `interval`, in date order.
    fn non_working_days_in(&self, interval: &DateInterval) -> Vec<Date> {
        interval.days().filter(|&d| !self.is_working_day(d)).collect()
    }
}

/// A calendar with no holidays: only Saturdays and Sundays are off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
