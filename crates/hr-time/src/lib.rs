//! # hr-time
//!
//! Date, calendar, interval, and working-day calculator types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Per-day count of active leave intervals.
pub mod daily;

/// `Date` type.
pub mod date;

/// Calendar with an injected holiday set.
pub mod holiday_calendar;

/// `DateInterval` — inclusive date range.
pub mod interval;

/// Raw leave-request rows with unvalidated date strings.
pub mod leave_row;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

/// Working-day calculator over leave intervals.
pub mod working_days;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use daily::{daily_activity, DailySeries};
pub use date::Date;
pub use holiday_calendar::HolidayCalendar;
pub use interval::{DateInterval, Days};
pub use leave_row::LeaveRow;
pub use month::Month;
pub use weekday::Weekday;
pub use working_days::{MonthTally, WorkingDayCalculator, YearShare};
