//! Working-day logic for the rotation tracker.
//!
//! Answers the one question the date arithmetic keeps asking: does work
//! happen on this date? Weekends are non-working by default; a per-year
//! holiday calendar supplies exceptions in both directions (days off on
//! weekdays, makeup working days on weekends).

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::{debug, info, warn};
use std::collections::HashMap;

use crate::domain::models::Holiday;

/// Source of holiday calendar data, fetched per year.
///
/// This is the engine's only I/O-bound collaborator. Implementations may
/// fail (feed unreachable, file unreadable); callers degrade to
/// weekday-only logic rather than propagating the failure.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch all holiday entries for a calendar year. An empty vec is a
    /// valid answer (no holidays known for that year).
    async fn get_holidays(&self, year: i32) -> Result<Vec<Holiday>>;
}

/// Calendar of working days built from weekend rules plus holiday overrides.
///
/// Holiday-set membership always wins over the weekend default: a weekday
/// marked as a day off is non-working, and a weekend date marked as a makeup
/// working day is working.
#[derive(Debug, Clone, Default)]
pub struct WorkingDayCalendar {
    /// date -> is_day_off, from the holiday source
    overrides: HashMap<NaiveDate, bool>,
}

impl WorkingDayCalendar {
    /// Calendar with no holiday data: pure weekday/weekend logic.
    pub fn weekdays_only() -> Self {
        Self::default()
    }

    /// Build a calendar covering the given years, degrading per year when the
    /// source fails. A failed fetch leaves that year on weekday-only logic;
    /// it never fails the build.
    pub async fn load(source: &dyn HolidaySource, years: &[i32]) -> Self {
        let mut overrides = HashMap::new();
        for &year in years {
            match source.get_holidays(year).await {
                Ok(holidays) => {
                    debug!("Loaded {} holiday entries for {}", holidays.len(), year);
                    for holiday in holidays {
                        overrides.insert(holiday.date, holiday.is_day_off);
                    }
                }
                Err(e) => {
                    warn!(
                        "Holiday source unavailable for {}: {}. Falling back to weekday-only logic for that year.",
                        year, e
                    );
                }
            }
        }
        info!("Working day calendar ready with {} holiday overrides", overrides.len());
        Self { overrides }
    }

    /// Whether work happens on the given date.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if let Some(&is_day_off) = self.overrides.get(&date) {
            return !is_day_off;
        }
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// First working day strictly after `from`. Scans one day at a time.
    pub fn next_working_day(&self, from: NaiveDate) -> NaiveDate {
        let mut candidate = from + Duration::days(1);
        while !self.is_working_day(candidate) {
            candidate += Duration::days(1);
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct StaticSource {
        holidays: Vec<Holiday>,
    }

    #[async_trait]
    impl HolidaySource for StaticSource {
        async fn get_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
            Ok(self
                .holidays
                .iter()
                .filter(|h| h.date.year() == year)
                .cloned()
                .collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl HolidaySource for FailingSource {
        async fn get_holidays(&self, _year: i32) -> Result<Vec<Holiday>> {
            Err(anyhow!("feed unreachable"))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekends_are_non_working() {
        let calendar = WorkingDayCalendar::weekdays_only();

        assert!(calendar.is_working_day(date(2026, 1, 9))); // Friday
        assert!(!calendar.is_working_day(date(2026, 1, 10))); // Saturday
        assert!(!calendar.is_working_day(date(2026, 1, 11))); // Sunday
        assert!(calendar.is_working_day(date(2026, 1, 12))); // Monday
    }

    #[tokio::test]
    async fn test_holiday_overrides_weekday() {
        let source = StaticSource {
            holidays: vec![Holiday {
                date: date(2026, 1, 1), // Thursday
                name: "New Year's Day".to_string(),
                is_day_off: true,
            }],
        };
        let calendar = WorkingDayCalendar::load(&source, &[2026]).await;

        assert!(!calendar.is_working_day(date(2026, 1, 1)));
        assert!(calendar.is_working_day(date(2026, 1, 2)));
    }

    #[tokio::test]
    async fn test_makeup_working_day_overrides_weekend() {
        let source = StaticSource {
            holidays: vec![Holiday {
                date: date(2026, 1, 10), // Saturday
                name: "Makeup working day".to_string(),
                is_day_off: false,
            }],
        };
        let calendar = WorkingDayCalendar::load(&source, &[2026]).await;

        assert!(calendar.is_working_day(date(2026, 1, 10)));
        assert!(!calendar.is_working_day(date(2026, 1, 11)));
    }

    #[tokio::test]
    async fn test_failing_source_degrades_to_weekdays_only() {
        let calendar = WorkingDayCalendar::load(&FailingSource, &[2026]).await;

        assert!(calendar.is_working_day(date(2026, 1, 1)));
        assert!(!calendar.is_working_day(date(2026, 1, 10)));
    }

    #[test]
    fn test_next_working_day_skips_weekend() {
        let calendar = WorkingDayCalendar::weekdays_only();

        // Friday -> following Monday
        assert_eq!(calendar.next_working_day(date(2026, 1, 9)), date(2026, 1, 12));
        // Monday -> Tuesday
        assert_eq!(calendar.next_working_day(date(2026, 1, 12)), date(2026, 1, 13));
    }

    #[tokio::test]
    async fn test_next_working_day_skips_holiday_block() {
        let source = StaticSource {
            holidays: vec![
                Holiday {
                    date: date(2026, 1, 12), // Monday
                    name: "Holiday".to_string(),
                    is_day_off: true,
                },
                Holiday {
                    date: date(2026, 1, 13), // Tuesday
                    name: "Holiday".to_string(),
                    is_day_off: true,
                },
            ],
        };
        let calendar = WorkingDayCalendar::load(&source, &[2026]).await;

        // Friday -> weekend and two holidays skipped -> Wednesday
        assert_eq!(calendar.next_working_day(date(2026, 1, 9)), date(2026, 1, 14));
    }

    #[test]
    fn test_next_working_day_is_strictly_after() {
        let calendar = WorkingDayCalendar::weekdays_only();

        let monday = date(2026, 1, 12);
        assert!(calendar.next_working_day(monday) > monday);
    }
}
