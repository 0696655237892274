//! # Rotation Tracker
//!
//! Rotation scheduling engine for recurring team duties: tasks with rotation
//! rules (`daily`, `weekly_<day>`, `biweekly_<day>`) are handed from member
//! to member over time, skipping non-working days.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//! ```text
//! Callers (scheduler trigger, admin tooling)
//!     ↓
//! RotationApp (wiring, roster delivery)
//!     ↓
//! Domain Layer (rotation rules, date arithmetic, orchestrators)
//!     ↓
//! Storage Layer (CSV/YAML collections behind storage traits)
//! ```
//!
//! Two call paths share the same date arithmetic and must agree with each
//! other: [`domain::RotationService`] advances expired assignments
//! automatically, and [`domain::SprintResetService`] resets everything to an
//! operator-chosen start date.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use config::AppConfig;
use domain::roster::{format_roster, LogNotifier, NotificationSink};
use domain::{RotationRunSummary, RotationService, SprintResetService};
use storage::csv::{AssignmentRepository, CsvConnection, MemberRepository, TaskRepository};
use storage::traits::{AssignmentStorage, MemberStorage, TaskStorage};

/// Application state wiring the services to one storage backend.
#[derive(Clone)]
pub struct RotationApp {
    pub rotation_service: RotationService,
    pub sprint_service: SprintResetService,
    member_repository: MemberRepository,
    task_repository: TaskRepository,
    assignment_repository: AssignmentRepository,
    notifier: Arc<dyn NotificationSink>,
}

/// Initialize the application: build the storage connection from config and
/// wire up the services. Roster delivery goes to the log until a real sink
/// is supplied via [`RotationApp::with_notifier`].
pub fn initialize(config: &AppConfig) -> Result<RotationApp> {
    info!("Setting up storage in {:?}", config.data_dir);
    let connection = CsvConnection::new(&config.data_dir)?;

    info!("Setting up domain services");
    Ok(RotationApp {
        rotation_service: RotationService::new(connection.clone()),
        sprint_service: SprintResetService::new(connection.clone()),
        member_repository: MemberRepository::new(connection.clone()),
        task_repository: TaskRepository::new(connection.clone()),
        assignment_repository: AssignmentRepository::new(connection),
        notifier: Arc::new(LogNotifier),
    })
}

impl RotationApp {
    /// Replace the roster delivery sink
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = notifier;
        self
    }

    /// The daily entry point: advance due assignments, then deliver the
    /// resulting roster. Delivery is best-effort; a failing channel is
    /// logged and never fails the rotation.
    pub async fn run_daily_rotation(&self, today: NaiveDate) -> Result<RotationRunSummary> {
        let summary = self.rotation_service.advance_due_assignments(today).await?;

        if let Err(e) = self.deliver_roster().await {
            warn!("Roster delivery failed (ignored): {}", e);
        }

        Ok(summary)
    }

    /// Render and deliver the current roster.
    pub async fn deliver_roster(&self) -> Result<()> {
        let tasks = self.task_repository.list_tasks().await?;
        let members = self.member_repository.list_members().await?;
        let assignments = self.assignment_repository.list_assignments().await?;

        let roster = format_roster(&tasks, &members, &assignments);
        self.notifier.deliver(&roster).await
    }
}
