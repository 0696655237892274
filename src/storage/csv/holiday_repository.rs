//! # Holiday Calendar Repository
//!
//! Per-year YAML holiday files in the data directory:
//!
//! ```text
//! data/
//! ├── members.csv
//! ├── tasks.csv
//! ├── assignments.csv
//! └── holidays/
//!     ├── 2026.yaml    ← This module manages these files
//!     └── 2027.yaml
//! ```
//!
//! A missing year file means "no holidays known" and is not an error; an
//! unreadable or malformed file is an error, which the working-day calendar
//! recovers from by degrading that year to weekday-only logic.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Datelike;
use log::{debug, info};
use std::fs;

use super::connection::CsvConnection;
use crate::domain::models::Holiday;
use crate::domain::working_days::HolidaySource;

#[derive(Clone)]
pub struct HolidayRepository {
    connection: CsvConnection,
}

impl HolidayRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Write a year's holiday calendar, creating the holidays directory on
    /// first use. Entries for other years are rejected to keep each file
    /// self-consistent.
    pub fn store_holidays(&self, year: i32, holidays: &[Holiday]) -> Result<()> {
        if let Some(stray) = holidays.iter().find(|h| h.date.year() != year) {
            return Err(anyhow::anyhow!(
                "Holiday '{}' on {} does not belong in the {} calendar",
                stray.name,
                stray.date,
                year
            ));
        }

        let yaml_path = self.connection.holidays_file_path(year);
        if let Some(parent) = yaml_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yaml::to_string(holidays)?;

        // Atomic write pattern: write to temp file, then rename
        let temp_path = yaml_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &yaml_path)?;

        info!("Stored {} holiday entries for {}", holidays.len(), year);
        Ok(())
    }
}

#[async_trait]
impl HolidaySource for HolidayRepository {
    async fn get_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let yaml_path = self.connection.holidays_file_path(year);

        if !yaml_path.exists() {
            debug!("No holiday calendar for {} at {:?}", year, yaml_path);
            return Ok(Vec::new());
        }

        let yaml_content = fs::read_to_string(&yaml_path)?;
        let holidays: Vec<Holiday> = serde_yaml::from_str(&yaml_content)?;

        debug!("Loaded {} holiday entries for {}", holidays.len(), year);
        Ok(holidays)
    }
}
