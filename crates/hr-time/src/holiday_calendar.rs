//! Calendar with an injected holiday set.

use std::collections::BTreeSet;

use crate::calendar::Calendar;
use crate::date::Date;
use hr_core::config::CalendarConfig;
use hr_core::errors::{Error, Result};
use tracing::{debug, error};

/// A weekends-plus-holidays calendar whose holiday set is supplied by the
/// deployment.
///
/// The holiday set is fixed once built and shared read-only; use
/// [`HolidayCalendar::from_config`] to load it from a [`CalendarConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Create a calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar with the given holidays.
    pub fn with_holidays(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Build the calendar described by `config`.
    ///
    /// # Errors
    /// Fails if the configuration is inconsistent or any holiday entry cannot
    /// be parsed; a deployment with a broken holiday list should not start.
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        config.validate()?;
        let holidays = config
            .holidays
            .iter()
            .map(|s| {
                s.parse::<Date>().map_err(|e| {
                    Error::Config(format!("calendar '{}': holiday {e}", config.name))
                })
            })
            .collect::<Result<BTreeSet<_>>>()?;
        debug!(
            calendar = %config.name,
            holidays = holidays.len(),
            "holiday calendar loaded"
        );
        Ok(Self {
            name: config.name.clone(),
            holidays,
        })
    }

    /// Add a holiday. Weekends are already non-working days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// Return the number of explicitly-added holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Iterate over the holidays in date order.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }
}

impl Default for HolidayCalendar {
    /// The shipped policy: the five holidays of the 2025/2026 season.
    ///
    /// Built through [`HolidayCalendar::from_config`]. Should the shipped
    /// list ever fail to load, the error is logged and the entries that do
    /// parse are kept.
    fn default() -> Self {
        let config = CalendarConfig::default();
        Self::from_config(&config).unwrap_or_else(|e| {
            error!(error = %e, "shipped holiday calendar failed to load");
            Self::with_holidays(
                config.name,
                config.holidays.iter().filter_map(|s| s.parse().ok()),
            )
        })
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar_is_weekends_only() {
        let cal = HolidayCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        assert!(cal.is_working_day(date(2025, 12, 8)));
        assert!(!cal.is_working_day(date(2025, 12, 6)));
    }

    #[test]
    fn add_and_remove_holiday() {
        let mut cal = HolidayCalendar::new("Custom");
        let holiday = date(2025, 8, 15); // Friday
        assert!(cal.is_working_day(holiday));

        cal.add_holiday(holiday);
        assert!(!cal.is_working_day(holiday));
        assert_eq!(cal.holiday_count(), 1);

        cal.remove_holiday(holiday);
        assert!(cal.is_working_day(holiday));
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn default_has_shipped_holidays() {
        let cal = HolidayCalendar::default();
        assert_eq!(cal.holiday_count(), 5);
        assert_eq!(
            cal.holidays().collect::<Vec<_>>(),
            vec![
                date(2025, 12, 8),
                date(2025, 12, 25),
                date(2025, 12, 26),
                date(2026, 1, 1),
                date(2026, 1, 6),
            ]
        );
    }

    #[test]
    fn from_config_accepts_mixed_formats() {
        let cfg = CalendarConfig::new("Rome", ["2025-06-02", "29/06/2025"], [2025]);
        let cal = HolidayCalendar::from_config(&cfg).unwrap();
        assert_eq!(cal.name(), "Rome");
        assert!(cal.is_holiday(date(2025, 6, 2)));
        assert!(cal.is_holiday(date(2025, 6, 29)));
    }

    #[test]
    fn from_config_rejects_bad_holiday() {
        let cfg = CalendarConfig::new("Rome", ["2025-06-02", "Ferragosto"], [2025]);
        let err = HolidayCalendar::from_config(&cfg).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("Ferragosto")));
    }

    #[test]
    fn shipped_holidays_all_load() {
        use hr_core::config::DEFAULT_HOLIDAYS;

        for s in DEFAULT_HOLIDAYS {
            assert!(s.parse::<Date>().is_ok(), "shipped holiday {s} does not parse");
        }
        assert_eq!(HolidayCalendar::default().holiday_count(), DEFAULT_HOLIDAYS.len());
    }

    #[test]
    fn from_config_default_equals_default() {
        let cal = HolidayCalendar::from_config(&CalendarConfig::default()).unwrap();
        assert_eq!(cal, HolidayCalendar::default());
    }
}
