//! # hrleave
//!
//! Working-day and leave-interval arithmetic for an HR leave-management
//! dashboard.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on `hr-core` / `hr-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use hrleave::prelude::*;
//!
//! let calc = WorkingDayCalculator::standard();
//! let request = LeaveRow::new("2026-01-02", "2025-12-29").parse()?;
//!
//! // Year split: raw calendar days per year.
//! assert_eq!(calc.calendar_days_in_year(&request, 2025), 3);
//! assert_eq!(calc.calendar_days_in_year(&request, 2026), 2);
//!
//! // Month analysis: working days only (New Year's Day is a holiday).
//! assert_eq!(calc.working_days_in_month([&request], 2026, Month::January), 1);
//! # Ok::<(), hrleave::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, errors, parsers, and configuration.
pub use hr_core as core;

/// Dates, calendars, intervals, and the working-day calculator.
pub use hr_time as time;

/// The items most callers need.
pub mod prelude {
    pub use hr_core::{CalendarConfig, DayCount, Error, Result, Year};
    pub use hr_time::{
        daily_activity, Calendar, DailySeries, Date, DateInterval, HolidayCalendar, LeaveRow,
        Month, MonthTally, WeekendsOnly, Weekday, WorkingDayCalculator, YearShare,
    };
}
