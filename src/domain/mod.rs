//! # Domain Module
//!
//! All business logic for the rotation tracker. This layer encodes the
//! calendar rules that make rotation scheduling subtle: minimum-duration
//! fairness extensions, target-day alignment, working-day skipping, and
//! wrap-around member sequencing. It operates on snapshots read through the
//! storage traits and never holds state across rotation runs.
//!
//! ## Module Organization
//!
//! - **rotation**: rule parsing and the period date arithmetic (the core)
//! - **member_sequence**: circular, id-ordered member advancement
//! - **working_days**: weekend/holiday logic behind every forward date search
//! - **rotation_service**: the automatic daily rollover orchestrator
//! - **sprint_service**: the manual, operator-triggered reset orchestrator
//! - **roster**: roster rendering and the best-effort delivery seam
//!
//! ## Key Invariants
//!
//! - Every computed period has `start_date <= end_date`
//! - Both orchestrator paths share the same end-date math, so an automatic
//!   rollover and a manual reset starting on the same date agree
//! - Invalid rules and dangling member references are surfaced loudly;
//!   unreachable holiday data degrades quietly to weekday-only logic

pub mod errors;
pub mod member_sequence;
pub mod models;
pub mod roster;
pub mod rotation;
pub mod rotation_service;
pub mod sprint_service;
pub mod working_days;

pub use errors::RotationError;
pub use member_sequence::next_member;
pub use roster::{format_roster, LogNotifier, NotificationSink};
pub use rotation::{next_day_of_week, RotationCalculator, RotationPeriod, RotationRule};
pub use rotation_service::{RotationRunSummary, RotationService};
pub use sprint_service::{SprintResetService, SprintResetSummary};
pub use working_days::{HolidaySource, WorkingDayCalendar};
