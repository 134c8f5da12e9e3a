//! Per-day count of active leave intervals.
//!
//! Feeds the dashboard's daily trend: for every date, how many requests are
//! running on that day.

use std::collections::BTreeMap;

use crate::date::Date;
use crate::interval::DateInterval;

/// Number of active intervals per date, ordered by date.
///
/// Dates covered by no interval are absent rather than stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailySeries {
    counts: BTreeMap<Date, u32>,
}

impl DailySeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `interval` (or only its overlap with `window`).
    pub fn add(&mut self, interval: &DateInterval, window: Option<&DateInterval>) {
        let span = match window {
            Some(w) => match interval.intersect(w) {
                Some(overlap) => overlap,
                None => return,
            },
            None => *interval,
        };
        for d in span.days() {
            *self.counts.entry(d).or_insert(0) += 1;
        }
    }

    /// Active intervals on `date`, or `None` if there were none.
    pub fn get(&self, date: Date) -> Option<u32> {
        self.counts.get(&date).copied()
    }

    /// Number of dates with at least one active interval.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Return `true` if no date has an active interval.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(date, count)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, u32)> + '_ {
        self.counts.iter().map(|(&d, &n)| (d, n))
    }

    /// The busiest date; the earliest one wins a tie.
    pub fn peak(&self) -> Option<(Date, u32)> {
        self.iter().fold(None, |best, (d, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((d, n)),
        })
    }

    /// First and last covered dates.
    pub fn span(&self) -> Option<DateInterval> {
        let first = self.counts.keys().next()?;
        let last = self.counts.keys().next_back()?;
        Some(DateInterval::new(*first, *last))
    }
}

/// Count, for each date, how many of `intervals` cover it.
///
/// With a `window`, dates outside it are left out.
pub fn daily_activity<'a, I>(intervals: I, window: Option<&DateInterval>) -> DailySeries
where
    I: IntoIterator<Item = &'a DateInterval>,
{
    let mut series = DailySeries::new();
    for interval in intervals {
        series.add(interval, window);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn overlapping_requests_stack() {
        let requests = [
            DateInterval::new(date(2025, 12, 22), date(2025, 12, 24)),
            DateInterval::new(date(2025, 12, 24), date(2025, 12, 23)),
            DateInterval::single(date(2025, 12, 29)),
        ];
        let series = daily_activity(&requests, None);
        assert_eq!(series.len(), 4);
        assert_eq!(series.get(date(2025, 12, 22)), Some(1));
        assert_eq!(series.get(date(2025, 12, 23)), Some(2));
        assert_eq!(series.get(date(2025, 12, 24)), Some(2));
        assert_eq!(series.get(date(2025, 12, 25)), None);
        assert_eq!(series.peak(), Some((date(2025, 12, 23), 2)));
        assert_eq!(
            series.span(),
            Some(DateInterval::new(date(2025, 12, 22), date(2025, 12, 29)))
        );
    }

    #[test]
    fn window_clips_the_series() {
        let requests = [DateInterval::new(date(2025, 12, 20), date(2026, 1, 10))];
        let window = DateInterval::new(date(2026, 1, 1), date(2026, 1, 31));
        let series = daily_activity(&requests, Some(&window));
        assert_eq!(series.len(), 10);
        assert_eq!(series.iter().next(), Some((date(2026, 1, 1), 1)));

        let elsewhere = DateInterval::new(date(2025, 6, 1), date(2025, 6, 30));
        assert!(daily_activity(&requests, Some(&elsewhere)).is_empty());
    }

    #[test]
    fn empty_input() {
        let none: [DateInterval; 0] = [];
        let series = daily_activity(&none, None);
        assert!(series.is_empty());
        assert_eq!(series.peak(), None);
        assert_eq!(series.span(), None);
    }
}
