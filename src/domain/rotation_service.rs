//! Automatic rollover orchestration.
//!
//! Runs once per day (single scheduled trigger, not reentrant): walks every
//! assignment, decides which periods have ended, and advances those to the
//! next member and the next period. One broken assignment must not block the
//! rest of the run, so rule and member failures are collected per assignment
//! instead of aborting the batch.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use log::{error, info, warn};
use std::collections::HashMap;

use crate::domain::member_sequence::next_member;
use crate::domain::models::{Assignment, Member, Task};
use crate::domain::rotation::{RotationCalculator, RotationRule};
use crate::domain::working_days::{HolidaySource, WorkingDayCalendar};
use crate::storage::csv::{
    AssignmentRepository, CsvConnection, HolidayRepository, MemberRepository, TaskRepository,
};
use crate::storage::traits::{AssignmentStorage, MemberStorage, TaskStorage};

/// Outcome of one rotation run.
#[derive(Debug, Default)]
pub struct RotationRunSummary {
    /// Ids of assignments that were advanced and persisted
    pub advanced: Vec<i64>,
    /// Assignments whose period still covers today
    pub still_current: usize,
    /// Assignments referencing a deleted task, skipped with a warning
    pub orphaned: usize,
    /// Per-assignment failures that did not stop the rest of the run
    pub failures: Vec<(i64, anyhow::Error)>,
}

/// Service for the automatic rollover path.
#[derive(Clone)]
pub struct RotationService {
    member_repository: MemberRepository,
    task_repository: TaskRepository,
    assignment_repository: AssignmentRepository,
    holiday_repository: HolidayRepository,
}

impl RotationService {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            member_repository: MemberRepository::new(connection.clone()),
            task_repository: TaskRepository::new(connection.clone()),
            assignment_repository: AssignmentRepository::new(connection.clone()),
            holiday_repository: HolidayRepository::new(connection),
        }
    }

    /// Advance every assignment whose period ended before `today`.
    ///
    /// On a non-working day the whole run is skipped: no assignment is
    /// touched, so a Saturday trigger never produces a partial rotation.
    pub async fn advance_due_assignments(&self, today: NaiveDate) -> Result<RotationRunSummary> {
        let mut summary = RotationRunSummary::default();

        let members = self.member_repository.list_members().await?;
        let tasks_by_id: HashMap<i64, Task> = self
            .task_repository
            .list_tasks()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let assignments = self.assignment_repository.list_assignments().await?;

        // New periods are anchored on each assignment's end date, which can
        // trail into an earlier year than today, and late-December end dates
        // produce periods reaching into the next year. Cover the whole span.
        let first_year = assignments
            .iter()
            .map(|a| a.end_date.year())
            .min()
            .unwrap_or(today.year())
            .min(today.year());
        let years: Vec<i32> = (first_year..=today.year() + 1).collect();
        let calendar =
            WorkingDayCalendar::load(&self.holiday_repository as &dyn HolidaySource, &years).await;

        if !calendar.is_working_day(today) {
            info!("{} is not a working day; skipping rotation run entirely", today);
            return Ok(summary);
        }

        let calculator = RotationCalculator::new(calendar);

        for assignment in assignments {
            let Some(task) = tasks_by_id.get(&assignment.task_id) else {
                warn!(
                    "Assignment {} references deleted task {}; skipping",
                    assignment.id, assignment.task_id
                );
                summary.orphaned += 1;
                continue;
            };

            if today <= assignment.end_date {
                summary.still_current += 1;
                continue;
            }

            match self.advance_one(&calculator, &members, &assignment, task).await {
                Ok(()) => summary.advanced.push(assignment.id),
                Err(e) => {
                    error!("Failed to advance assignment {}: {}", assignment.id, e);
                    summary.failures.push((assignment.id, e));
                }
            }
        }

        info!(
            "Rotation run for {}: {} advanced, {} still current, {} orphaned, {} failed",
            today,
            summary.advanced.len(),
            summary.still_current,
            summary.orphaned,
            summary.failures.len()
        );
        Ok(summary)
    }

    async fn advance_one(
        &self,
        calculator: &RotationCalculator,
        members: &[Member],
        assignment: &Assignment,
        task: &Task,
    ) -> Result<()> {
        let rule: RotationRule = task.rotation_rule.parse()?;
        let successor = next_member(members, assignment.member_id, 1)?;

        // The new period is anchored on the old end date, not on today, so a
        // run delayed past a holiday block does not shift the cadence.
        let period = calculator.next_period(&rule, assignment.end_date);

        let updated = Assignment {
            member_id: successor.id,
            start_date: period.start_date,
            end_date: period.end_date,
            ..assignment.clone()
        };

        self.assignment_repository.update_assignment(&updated).await?;

        info!(
            "Task '{}' rotated to {} for {} to {}",
            task.name, successor.display_name, period.start_date, period.end_date
        );
        Ok(())
    }
}
