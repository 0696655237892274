//! Manual sprint-kickoff orchestration.
//!
//! The human-triggered sibling of the automatic rollover: every assignment
//! is reset to the operator's chosen start date with the member advanced by
//! one, regardless of working days or whether the old period has ended. The
//! chosen date is used verbatim; resetting onto a holiday to stretch a
//! sprint across it is a legitimate move. Unlike the automatic path this one
//! is strict: a bad rule or missing member fails the whole call so the
//! operator notices immediately.

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::HashMap;

use crate::domain::member_sequence::next_member;
use crate::domain::models::{Assignment, Task};
use crate::domain::rotation::{RotationCalculator, RotationRule};
use crate::storage::csv::{AssignmentRepository, CsvConnection, MemberRepository, TaskRepository};
use crate::storage::traits::{AssignmentStorage, MemberStorage, TaskStorage};

/// Outcome of one sprint reset.
#[derive(Debug, Default)]
pub struct SprintResetSummary {
    /// Ids of assignments that were reset and persisted
    pub reset: Vec<i64>,
    /// Assignments referencing a deleted task, skipped with a warning
    pub orphaned: usize,
}

/// Service for the manual sprint-reset path.
#[derive(Clone)]
pub struct SprintResetService {
    member_repository: MemberRepository,
    task_repository: TaskRepository,
    assignment_repository: AssignmentRepository,
}

impl SprintResetService {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            member_repository: MemberRepository::new(connection.clone()),
            task_repository: TaskRepository::new(connection.clone()),
            assignment_repository: AssignmentRepository::new(connection),
        }
    }

    /// Reset every assignment to a period starting exactly on `start_date`,
    /// advancing each member by one.
    pub async fn reset_all(&self, start_date: NaiveDate) -> Result<SprintResetSummary> {
        info!("Sprint reset requested for start date {}", start_date);

        let members = self.member_repository.list_members().await?;
        let tasks_by_id: HashMap<i64, Task> = self
            .task_repository
            .list_tasks()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let assignments = self.assignment_repository.list_assignments().await?;

        let mut summary = SprintResetSummary::default();

        for assignment in assignments {
            let Some(task) = tasks_by_id.get(&assignment.task_id) else {
                warn!(
                    "Assignment {} references deleted task {}; skipping",
                    assignment.id, assignment.task_id
                );
                summary.orphaned += 1;
                continue;
            };

            let rule: RotationRule = task.rotation_rule.parse()?;
            let successor = next_member(&members, assignment.member_id, 1)?;
            let period = RotationCalculator::period_from_start(&rule, start_date);

            let updated = Assignment {
                member_id: successor.id,
                start_date: period.start_date,
                end_date: period.end_date,
                ..assignment
            };
            self.assignment_repository.update_assignment(&updated).await?;

            info!(
                "Task '{}' reset to {} for {} to {}",
                task.name, successor.display_name, period.start_date, period.end_date
            );
            summary.reset.push(updated.id);
        }

        info!(
            "Sprint reset complete: {} reset, {} orphaned",
            summary.reset.len(),
            summary.orphaned
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Member;
    use tempfile::TempDir;

    struct Fixture {
        service: SprintResetService,
        members: MemberRepository,
        tasks: TaskRepository,
        assignments: AssignmentRepository,
        _temp_dir: TempDir,
    }

    fn setup_test() -> Fixture {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = CsvConnection::new(temp_dir.path()).expect("Failed to create connection");
        Fixture {
            service: SprintResetService::new(connection.clone()),
            members: MemberRepository::new(connection.clone()),
            tasks: TaskRepository::new(connection.clone()),
            assignments: AssignmentRepository::new(connection),
            _temp_dir: temp_dir,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed(fixture: &Fixture) {
        for (id, name) in [(8, "Anton"), (10, "Beatrix"), (13, "Chidi")] {
            fixture
                .members
                .store_member(&Member {
                    id,
                    display_name: name.to_string(),
                    slack_handle: name.to_lowercase(),
                })
                .await
                .unwrap();
        }
        fixture
            .tasks
            .store_task(&Task {
                id: 1,
                name: "Release captain".to_string(),
                rotation_rule: "biweekly_wednesday".to_string(),
            })
            .await
            .unwrap();
        fixture
            .tasks
            .store_task(&Task {
                id: 2,
                name: "Standup facilitator".to_string(),
                rotation_rule: "daily".to_string(),
            })
            .await
            .unwrap();
        fixture
            .assignments
            .store_assignment(&Assignment {
                id: 1,
                task_id: 1,
                member_id: 13,
                start_date: date(2025, 12, 10),
                end_date: date(2025, 12, 24),
            })
            .await
            .unwrap();
        fixture
            .assignments
            .store_assignment(&Assignment {
                id: 2,
                task_id: 2,
                member_id: 8,
                start_date: date(2025, 12, 24),
                end_date: date(2025, 12, 24),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reset_overwrites_every_assignment() {
        let fixture = setup_test();
        seed(&fixture).await;

        // Wednesday 2026-01-07, even though the old periods are long expired
        let summary = fixture.service.reset_all(date(2026, 1, 7)).await.unwrap();

        assert_eq!(summary.reset, vec![1, 2]);

        let assignments = fixture.assignments.list_assignments().await.unwrap();

        // Biweekly task wrapped from member 13 back to 8; Wednesday start
        // runs exactly two weeks
        assert_eq!(assignments[0].member_id, 8);
        assert_eq!(assignments[0].start_date, date(2026, 1, 7));
        assert_eq!(assignments[0].end_date, date(2026, 1, 21));

        // Daily task advanced 8 -> 10 with a one-day period on the reset date
        assert_eq!(assignments[1].member_id, 10);
        assert_eq!(assignments[1].start_date, date(2026, 1, 7));
        assert_eq!(assignments[1].end_date, date(2026, 1, 7));
    }

    #[tokio::test]
    async fn test_reset_uses_non_working_start_date_verbatim() {
        let fixture = setup_test();
        seed(&fixture).await;

        // Saturday: deliberate operator choice, no working-day search
        let summary = fixture.service.reset_all(date(2026, 1, 10)).await.unwrap();
        assert_eq!(summary.reset.len(), 2);

        let assignments = fixture.assignments.list_assignments().await.unwrap();
        assert_eq!(assignments[0].start_date, date(2026, 1, 10));
        assert_eq!(assignments[1].start_date, date(2026, 1, 10));
        assert_eq!(assignments[1].end_date, date(2026, 1, 10));
    }

    #[tokio::test]
    async fn test_reset_is_strict_about_invalid_rules() {
        let fixture = setup_test();
        seed(&fixture).await;
        fixture
            .tasks
            .store_task(&Task {
                id: 3,
                name: "Broken".to_string(),
                rotation_rule: "invalid_rule".to_string(),
            })
            .await
            .unwrap();
        fixture
            .assignments
            .store_assignment(&Assignment {
                id: 3,
                task_id: 3,
                member_id: 8,
                start_date: date(2025, 12, 24),
                end_date: date(2025, 12, 24),
            })
            .await
            .unwrap();

        let result = fixture.service.reset_all(date(2026, 1, 7)).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid_rule"));
    }

    #[tokio::test]
    async fn test_reset_skips_orphaned_assignments() {
        let fixture = setup_test();
        seed(&fixture).await;
        fixture
            .assignments
            .store_assignment(&Assignment {
                id: 3,
                task_id: 99,
                member_id: 8,
                start_date: date(2025, 12, 24),
                end_date: date(2025, 12, 24),
            })
            .await
            .unwrap();

        let summary = fixture.service.reset_all(date(2026, 1, 7)).await.unwrap();

        assert_eq!(summary.reset, vec![1, 2]);
        assert_eq!(summary.orphaned, 1);
    }
}
