//! Calendar configuration.
//!
//! [`CalendarConfig`] describes the non-working-day policy of one deployment:
//! the named holiday dates and the years the dashboard reports on.  It is a
//! plain value handed to the calendar at construction time; nothing in the
//! workspace keeps a process-wide copy.
//!
//! Holidays are kept as strings here so a configuration can be loaded (and
//! validated field by field) before any date type is involved.  Building a
//! calendar from it parses every entry.

use crate::errors::Result;
use crate::{ensure, fail, Year};

/// Holidays of the 2025/2026 season, used when no list is configured.
pub const DEFAULT_HOLIDAYS: [&str; 5] = [
    "2025-12-08",
    "2025-12-25",
    "2025-12-26",
    "2026-01-01",
    "2026-01-06",
];

/// Years the dashboard reports on by default.
pub const DEFAULT_SUPPORTED_YEARS: [Year; 2] = [2025, 2026];

/// Non-working-day policy of a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Human-readable calendar name, used in logs.
    pub name: String,
    /// Holiday dates (any format accepted by [`crate::parsers`]).
    pub holidays: Vec<String>,
    /// Years offered by the year split and the month selector.
    pub supported_years: Vec<Year>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            name: "HR leave".into(),
            holidays: DEFAULT_HOLIDAYS.iter().map(|s| s.to_string()).collect(),
            supported_years: DEFAULT_SUPPORTED_YEARS.to_vec(),
        }
    }
}

impl CalendarConfig {
    /// Create a configuration with the given name, holidays, and years.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = S>,
        supported_years: impl IntoIterator<Item = Year>,
    ) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().map(Into::into).collect(),
            supported_years: supported_years.into_iter().collect(),
        }
    }

    /// Check structural consistency.
    ///
    /// Holiday strings are not parsed here; see `HolidayCalendar::from_config`.
    ///
    /// # Errors
    /// Returns an error for a blank name, an empty year list, or a year listed
    /// twice.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            fail!("calendar name must not be empty");
        }
        if self.supported_years.is_empty() {
            fail!("calendar '{}' lists no supported years", self.name);
        }
        for (i, y) in self.supported_years.iter().enumerate() {
            ensure!(
                !self.supported_years[..i].contains(y),
                "year {y} listed twice in calendar '{}'",
                self.name
            );
        }
        Ok(())
    }

    /// Return `true` if `year` is one of the supported years.
    pub fn supports_year(&self, year: Year) -> bool {
        self.supported_years.contains(&year)
    }
}
