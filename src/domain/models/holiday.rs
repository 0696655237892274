//! Domain model for a holiday calendar entry.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in a year's holiday calendar.
///
/// `is_day_off: true` marks a non-working holiday. `is_day_off: false` marks a
/// makeup working day: a weekend date explicitly worked, overriding the
/// weekend default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub is_day_off: bool,
}
