//! Rotation date arithmetic for the rotation tracker.
//!
//! This module contains the core period calculation: given a task's rotation
//! rule and a reference date, decide exactly when the next assignment period
//! starts and ends. Two entry points share the same day-of-week math:
//!
//! - [`RotationCalculator::next_period`] is the automatic-rollover path, which
//!   searches forward for the next working day to start on;
//! - [`RotationCalculator::period_from_start`] is the manual sprint-reset path,
//!   which takes the caller's start date verbatim (a deliberately chosen date,
//!   possibly a non-working day, e.g. to stretch a sprint across a holiday).

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::str::FromStr;

use crate::domain::errors::RotationError;
use crate::domain::working_days::WorkingDayCalendar;

/// Parsed form of a task's `rotation_rule` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// One working day per assignment.
    Daily,
    /// Period ends on the next occurrence of the given weekday.
    Weekly(Weekday),
    /// Period ends on an occurrence of the given weekday roughly two weeks out.
    Biweekly(Weekday),
}

impl FromStr for RotationRule {
    type Err = RotationError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        if rule == "daily" {
            return Ok(RotationRule::Daily);
        }

        let mut tokens = rule.split('_');
        let (frequency, day_name) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(frequency), Some(day_name), None) => (frequency, day_name),
            _ => {
                return Err(RotationError::InvalidRotationRule {
                    rule: rule.to_string(),
                })
            }
        };

        // Validate the frequency before the day name so the leading token is
        // the one reported for rules like "invalid_rule"
        if !matches!(frequency, "weekly" | "biweekly") {
            return Err(RotationError::UnknownRuleToken {
                rule: rule.to_string(),
                token: frequency.to_string(),
            });
        }

        let weekday = Weekday::from_str(day_name).map_err(|_| RotationError::UnknownRuleToken {
            rule: rule.to_string(),
            token: day_name.to_string(),
        })?;

        match frequency {
            "weekly" => Ok(RotationRule::Weekly(weekday)),
            _ => Ok(RotationRule::Biweekly(weekday)),
        }
    }
}

/// One assignment period: both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Next occurrence of `target` strictly after `from`: always 1-7 days ahead.
/// When `from` already falls on `target` the result jumps a full week, never
/// the same date.
pub fn next_day_of_week(from: NaiveDate, target: Weekday) -> NaiveDate {
    let days_ahead =
        (target.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    from + Duration::days(i64::from(days_ahead))
}

/// Calculator for rotation periods, bound to a working-day calendar for the
/// forward start-date search.
#[derive(Debug, Clone)]
pub struct RotationCalculator {
    working_days: WorkingDayCalendar,
}

impl RotationCalculator {
    pub fn new(working_days: WorkingDayCalendar) -> Self {
        Self { working_days }
    }

    /// Compute the period following `reference` (typically the previous
    /// assignment's end date). The period starts on the next working day
    /// strictly after `reference`.
    pub fn next_period(&self, rule: &RotationRule, reference: NaiveDate) -> RotationPeriod {
        let start_date = self.working_days.next_working_day(reference);
        RotationPeriod {
            start_date,
            end_date: Self::end_date_for(rule, start_date),
        }
    }

    /// Compute the period beginning exactly on `start_date`. No working-day
    /// search is applied: the caller owns the choice of start date.
    pub fn period_from_start(rule: &RotationRule, start_date: NaiveDate) -> RotationPeriod {
        RotationPeriod {
            start_date,
            end_date: Self::end_date_for(rule, start_date),
        }
    }

    /// End-date math shared by both paths.
    ///
    /// Weekly periods end on the next occurrence of the target day strictly
    /// after the start, so a start on or after the target day runs into the
    /// following week. Biweekly periods add a week on top of that occurrence
    /// and are extended by one more week whenever the result would run shorter
    /// than fourteen days, keeping every holder's turn at least two target-day
    /// cycles long.
    fn end_date_for(rule: &RotationRule, start_date: NaiveDate) -> NaiveDate {
        match rule {
            RotationRule::Daily => start_date,
            RotationRule::Weekly(target) => next_day_of_week(start_date, *target),
            RotationRule::Biweekly(target) => {
                let mut end_date = next_day_of_week(start_date, *target) + Duration::days(7);
                if (end_date - start_date).num_days() < 14 {
                    end_date += Duration::days(7);
                }
                end_date
            }
        }
    }
}
