//! CSV-backed assignment repository.
//!
//! Assignments are the one collection the engine writes back to: each
//! rotation event overwrites the member and period of an existing row.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use csv::{Reader, Writer};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::Assignment;
use crate::storage::traits::AssignmentStorage;

#[derive(Clone)]
pub struct AssignmentRepository {
    connection: CsvConnection,
}

impl AssignmentRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_assignments(&self) -> Result<Vec<Assignment>> {
        let file_path = self.connection.assignments_file_path();

        if !file_path.exists() {
            debug!("No assignments file at {:?} yet", file_path);
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut assignments = Vec::new();
        for result in csv_reader.deserialize() {
            let assignment: Assignment = result?;
            assignments.push(assignment);
        }

        Ok(assignments)
    }

    fn write_assignments(&self, assignments: &[Assignment]) -> Result<()> {
        let file_path = self.connection.assignments_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(file));

            for assignment in assignments {
                csv_writer.serialize(assignment)?;
            }
            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &file_path)?;
        Ok(())
    }
}

#[async_trait]
impl AssignmentStorage for AssignmentRepository {
    async fn store_assignment(&self, assignment: &Assignment) -> Result<()> {
        let mut assignments = self.read_assignments()?;
        assignments.retain(|a| a.id != assignment.id);
        assignments.push(assignment.clone());
        assignments.sort_by_key(|a| a.id);
        self.write_assignments(&assignments)?;

        info!(
            "Stored assignment {} (task {}, member {}, {} to {})",
            assignment.id, assignment.task_id, assignment.member_id,
            assignment.start_date, assignment.end_date
        );
        Ok(())
    }

    async fn update_assignment(&self, assignment: &Assignment) -> Result<()> {
        let mut assignments = self.read_assignments()?;

        let existing = assignments
            .iter_mut()
            .find(|a| a.id == assignment.id)
            .ok_or_else(|| anyhow!("Cannot update assignment {}: not found", assignment.id))?;
        *existing = assignment.clone();

        self.write_assignments(&assignments)?;

        info!(
            "Updated assignment {}: member {} holds task {} from {} to {}",
            assignment.id, assignment.member_id, assignment.task_id,
            assignment.start_date, assignment.end_date
        );
        Ok(())
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        let mut assignments = self.read_assignments()?;
        assignments.sort_by_key(|a| a.id);
        Ok(assignments)
    }
}
